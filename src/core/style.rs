//! Presentation style table
//!
//! Maps token categories to a fixed display style. The table is a total,
//! side-effect-free function, constant for the lifetime of the process.

use crate::core::model::TokenCategory;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex form without a leading '#', e.g. "7F007F".
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Presentation style for a run of text. The default style carries no
/// overrides and leaves the sink's formatting untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    pub color: Option<Rgb>,
    pub bold: bool,
}

pub const KEYWORD_COLOR: Rgb = Rgb(127, 0, 127);
pub const STRING_COLOR: Rgb = Rgb(42, 133, 0);
pub const COMMENT_COLOR: Rgb = Rgb(100, 100, 100);

/// Resolve the display style for a token category.
pub const fn style_for(category: TokenCategory) -> Style {
    match category {
        TokenCategory::Keyword => Style {
            color: Some(KEYWORD_COLOR),
            bold: false,
        },
        TokenCategory::String => Style {
            color: Some(STRING_COLOR),
            bold: false,
        },
        TokenCategory::Comment => Style {
            color: Some(COMMENT_COLOR),
            bold: false,
        },
        TokenCategory::Other => Style { color: None, bold: false },
    }
}
