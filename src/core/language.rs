//! Extension -> language hint table
//!
//! Fixed, case-insensitive lookup. Unknown extensions map to an empty hint;
//! the renderer still emits a fence for those, just untagged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static LANGUAGE_HINTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("py", "python"),
        ("js", "javascript"),
        ("cjs", "javascript"),
        ("ts", "typescript"),
        ("tsx", "tsx"),
        ("jsx", "jsx"),
        ("java", "java"),
        ("c", "c"),
        ("cpp", "cpp"),
        ("sh", "bash"),
        ("html", "html"),
        ("css", "css"),
        ("json", "json"),
        ("yaml", "yaml"),
        ("yml", "yaml"),
        ("md", "markdown"),
    ])
});

/// Resolve the language hint for a file extension (without the leading dot).
pub fn hint_for_extension(extension: &str) -> &'static str {
    LANGUAGE_HINTS
        .get(extension.to_lowercase().as_str())
        .copied()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(hint_for_extension("py"), "python");
        assert_eq!(hint_for_extension("cjs"), "javascript");
        assert_eq!(hint_for_extension("sh"), "bash");
        assert_eq!(hint_for_extension("yml"), "yaml");
        assert_eq!(hint_for_extension("md"), "markdown");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(hint_for_extension("PY"), "python");
        assert_eq!(hint_for_extension("Tsx"), "tsx");
    }

    #[test]
    fn test_unknown_extension_maps_to_empty_hint() {
        assert_eq!(hint_for_extension("xyz"), "");
        assert_eq!(hint_for_extension(""), "");
    }
}
