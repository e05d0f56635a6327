use stackfilter::config::{CheckRules, ConfigError, load_config, load_config_from_path};
use stackfilter::{ColorMode, OutputFormat};
use std::fs;

use tempfile::tempdir;

#[test]
fn test_missing_path_uses_defaults() {
    let config = load_config(None).expect("defaults always load");
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.check, CheckRules::default());
}

#[test]
fn test_full_config_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("stackfilter.toml");
    fs::write(
        &path,
        r#"
[output]
format = "json"
color = "never"
pretty_json = false

[check]
skip_comments = false
skip_blank = true
"#,
    )
    .expect("write config");

    let config = load_config_from_path(&path).expect("config should parse");
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(!config.output.pretty_json);
    assert!(!config.check.skip_comments);
    assert!(config.check.skip_blank);
}

#[test]
fn test_unreadable_path_is_read_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("missing.toml");

    match load_config(Some(&path)) {
        Err(ConfigError::Read { path: reported, .. }) => {
            assert!(reported.ends_with("missing.toml"));
        }
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn test_invalid_value_is_parse_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[output]\nformat = \"yaml\"\n").expect("write config");

    let err = load_config_from_path(&path).expect_err("unknown format must fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse config file"));
}
