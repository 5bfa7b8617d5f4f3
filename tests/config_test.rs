// tests/config_test.rs
use semverbump::config::{load_config, Config, CONFIG_FILE_NAME};
use semverbump::{IncrementKind, SemverBumpError};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
#[serial]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[bump]
default_kind = "major"

[output]
color = false
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.bump.default_kind, IncrementKind::Major);
    assert!(!config.output.color);
}

#[test]
#[serial]
fn test_partial_file_keeps_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[output]\ncolor = false\n").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.bump.default_kind, IncrementKind::Patch);
}

#[test]
#[serial]
fn test_missing_explicit_file_is_io_error() {
    let err = load_config(Some("tests/fixtures/does-not-exist.toml")).unwrap_err();
    assert!(matches!(err, SemverBumpError::Io(_)));
}

#[test]
#[serial]
fn test_load_fixture() {
    let config = load_config(Some("tests/fixtures/minor_default.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.bump.default_kind, IncrementKind::Minor);
    assert_eq!(config.output, Config::default().output);
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[bump]\ndefault_kind = \"minor\"\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(result.unwrap().bump.default_kind, IncrementKind::Minor);
}
