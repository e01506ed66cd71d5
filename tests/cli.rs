use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn repodoc_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("repodoc"))
}

#[test]
fn markdown_aggregates_repository() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    write_file(&repo.join("a.py"), "print(1)\n");
    write_file(&repo.join(".git/config"), "[core]\n");

    let out = temp.path().join("out.md");
    repodoc_cmd()
        .arg("--config")
        .arg(temp.path().join("cfg.json"))
        .arg("markdown")
        .arg(&repo)
        .arg("--exclude-dir")
        .arg(".git")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Markdown document generated"));

    let markdown = fs::read_to_string(&out).unwrap();
    assert!(markdown.contains("## a.py"));
    assert!(markdown.contains("```python\nprint(1)\n\n```"));
    assert!(!markdown.contains(".git"));
}

#[test]
fn markdown_always_skips_env_files() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    write_file(&repo.join("secret/.env"), "KEY=1\n");
    write_file(&repo.join("ok.txt"), "ok\n");

    let out = temp.path().join("out.md");
    repodoc_cmd()
        .arg("--config")
        .arg(temp.path().join("cfg.json"))
        .arg("markdown")
        .arg(&repo)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let markdown = fs::read_to_string(&out).unwrap();
    assert!(!markdown.contains(".env"));
    assert!(!markdown.contains("KEY=1"));
    assert!(markdown.contains("## ok.txt"));
}

#[test]
fn markdown_rejects_file_as_root() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("not_a_dir.txt");
    write_file(&file, "x");

    let out = temp.path().join("out.md");
    repodoc_cmd()
        .arg("--config")
        .arg(temp.path().join("cfg.json"))
        .arg("markdown")
        .arg(&file)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));

    // no output file is written on a pre-flight failure
    assert!(!out.exists());
}

#[test]
fn markdown_requires_a_repository_path() {
    let temp = tempdir().unwrap();
    repodoc_cmd()
        .arg("--config")
        .arg(temp.path().join("cfg.json"))
        .arg("markdown")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no repository path"));
}

#[test]
fn docx_renders_markdown_file() {
    let temp = tempdir().unwrap();
    let md = temp.path().join("doc.md");
    write_file(&md, "## a.py\n\n```python\nprint(1)\n```\n\n");

    let out = temp.path().join("doc.docx");
    repodoc_cmd()
        .arg("--config")
        .arg(temp.path().join("cfg.json"))
        .arg("docx")
        .arg(&md)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Word document generated"));

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn convert_runs_both_stages() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    write_file(&repo.join("main.py"), "import os\n");
    write_file(&repo.join("notes.xyz"), "free text\n");

    let md_out = temp.path().join("kept.md");
    let out = temp.path().join("repo.docx");
    repodoc_cmd()
        .arg("--config")
        .arg(temp.path().join("cfg.json"))
        .arg("convert")
        .arg(&repo)
        .arg("--markdown-out")
        .arg(&md_out)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let markdown = fs::read_to_string(&md_out).unwrap();
    // unknown extension still gets a fence, just untagged
    assert!(markdown.contains("## notes.xyz\n\n```\nfree text\n"));
    assert!(markdown.contains("## main.py"));

    assert!(fs::read(&out).unwrap().starts_with(b"PK"));
}

#[test]
fn settings_are_persisted_and_reused() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    write_file(&repo.join("a.sh"), "echo hi\n");

    let cfg = temp.path().join("cfg.json");
    let out = temp.path().join("first.md");
    repodoc_cmd()
        .arg("--config")
        .arg(&cfg)
        .arg("markdown")
        .arg(&repo)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let saved = fs::read_to_string(&cfg).unwrap();
    assert!(saved.contains("first.md"));

    // second run omits the repository path and falls back to the config
    let out2 = temp.path().join("second.md");
    repodoc_cmd()
        .arg("--config")
        .arg(&cfg)
        .arg("markdown")
        .arg("-o")
        .arg(&out2)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        fs::read_to_string(&out2).unwrap()
    );
}

#[test]
fn no_save_config_leaves_no_file() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    write_file(&repo.join("a.py"), "pass\n");

    let cfg = temp.path().join("cfg.json");
    repodoc_cmd()
        .arg("--config")
        .arg(&cfg)
        .arg("--no-save-config")
        .arg("markdown")
        .arg(&repo)
        .arg("-o")
        .arg(temp.path().join("out.md"))
        .assert()
        .success();

    assert!(!cfg.exists());
}

#[test]
fn quiet_suppresses_progress() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    write_file(&repo.join("a.py"), "pass\n");

    repodoc_cmd()
        .arg("--config")
        .arg(temp.path().join("cfg.json"))
        .arg("--quiet")
        .arg("markdown")
        .arg(&repo)
        .arg("-o")
        .arg(temp.path().join("out.md"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Processing").not());
}
