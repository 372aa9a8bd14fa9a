// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the configuration system.

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use intake_config::diagnostic::ConfigError;
use intake_config::model::IntakeConfig;
use intake_config::{
    load_and_validate_path, load_and_validate_str, load_config_from_str, render_errors,
};

#[test]
fn full_toml_deserializes() {
    let toml = r#"
[discovery]
prefix = "acme_"
disabled_modules = ["acme_legacy"]

[logging]
level = "debug"

[catalog]
resolve_relative_paths = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.discovery.prefix, "acme_");
    assert_eq!(config.discovery.disabled_modules, vec!["acme_legacy"]);
    assert_eq!(config.logging.level, "debug");
    assert!(!config.catalog.resolve_relative_paths);
}

#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("[logging]\nlevel = \"info\"\n").unwrap();
    assert_eq!(config.discovery.prefix, "intake_");
    assert!(config.discovery.disabled_modules.is_empty());
    assert!(config.catalog.resolve_relative_paths);
}

#[test]
fn env_style_override_wins_over_toml() {
    let config: IntakeConfig = Figment::new()
        .merge(Serialized::defaults(IntakeConfig::default()))
        .merge(Toml::string("[logging]\nlevel = \"info\"\n"))
        .merge(("logging.level", "trace"))
        .merge(("catalog.resolve_relative_paths", false))
        .extract()
        .expect("should merge overrides");

    assert_eq!(config.logging.level, "trace");
    assert!(!config.catalog.resolve_relative_paths);
}

#[test]
fn missing_config_files_are_skipped() {
    let config: IntakeConfig = Figment::new()
        .merge(Serialized::defaults(IntakeConfig::default()))
        .merge(Toml::file("/nonexistent/intake/intake.toml"))
        .extract()
        .unwrap();
    assert_eq!(config, IntakeConfig::default());
}

#[test]
fn unknown_key_is_reported_with_suggestion_and_span() {
    let errors = load_and_validate_str("[discovery]\nprefx = \"x_\"\n").unwrap_err();
    assert_eq!(errors.len(), 1);

    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            valid_keys,
            span,
            ..
        } => {
            assert_eq!(key, "prefx");
            assert_eq!(suggestion.as_deref(), Some("prefix"));
            assert!(valid_keys.contains("disabled_modules"));
            assert!(span.is_some());
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_top_level_section_is_rejected() {
    let errors = load_and_validate_str("[plugins]\nx = 1\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::UnknownKey { key, .. } if key == "plugins"));
}

#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[catalog]\nresolve_relative_paths = \"yes\"\n").unwrap_err();
    match &errors[0] {
        ConfigError::InvalidType { key, expected, .. } => {
            assert!(key.starts_with("catalog"), "got: {key}");
            assert!(expected.contains("bool"), "got: {expected}");
        }
        other => panic!("expected InvalidType, got {other:?}"),
    }
}

#[test]
fn validation_runs_after_deserialization() {
    let errors = load_and_validate_str("[logging]\nlevel = \"chatty\"\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::Validation { key, .. } if key == "logging.level"));
}

#[test]
fn loads_from_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intake.toml");
    std::fs::write(&path, "[discovery]\ndisabled_modules = [\"intake_csv\"]\n").unwrap();

    let config = load_and_validate_path(&path).unwrap();
    assert_eq!(config.discovery.disabled_modules, vec!["intake_csv"]);
}

#[test]
fn config_error_has_code_and_help() {
    use miette::Diagnostic;

    let error = ConfigError::UnknownKey {
        key: "levl".to_string(),
        suggestion: Some("level".to_string()),
        valid_keys: "level".to_string(),
        span: None,
        src: None,
    };
    assert!(error.code().is_some());
    let help = error.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("did you mean `level`"), "got: {help}");
}

#[test]
fn errors_render_through_miette() {
    let errors = load_and_validate_str("[logging]\nlevl = \"info\"\n").unwrap_err();
    let rendered = render_errors(&errors);
    assert!(rendered.contains("levl"), "got: {rendered}");
}
