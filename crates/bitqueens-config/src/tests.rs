//! Tests for solver configuration.

use std::io::Write;

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        kernel = "stacked"
        mask_width = "u128"
        count_width = "u128"
        widths = [1, 4, 8, 12]
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.kernel, KernelType::Stacked);
    assert_eq!(config.mask_width, MaskWidth::U128);
    assert_eq!(config.count_width, CountWidth::U128);
    assert_eq!(config.widths, vec![1, 4, 8, 12]);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        kernel: recursive
        mask_width: u16
        widths:
          - 4
          - 8
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.kernel, KernelType::Recursive);
    assert_eq!(config.mask_width, MaskWidth::U16);
    assert_eq!(config.count_width, CountWidth::U64);
    assert_eq!(config.widths, vec![4, 8]);
}

#[test]
fn test_empty_toml_is_default() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.kernel, KernelType::Recursive);
    assert_eq!(config.mask_width, MaskWidth::U64);
    assert!(config.widths.is_empty());
}

#[test]
fn test_unknown_kernel_rejected() {
    let err = SolverConfig::from_toml_str(r#"kernel = "parallel""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_kernel(KernelType::Stacked)
        .with_mask_width(MaskWidth::U32)
        .with_count_width(CountWidth::U128)
        .with_widths([4, 8]);

    assert_eq!(config.kernel, KernelType::Stacked);
    assert_eq!(config.mask_width, MaskWidth::U32);
    assert_eq!(config.count_width, CountWidth::U128);
    assert_eq!(config.widths, vec![4, 8]);
}

#[test]
fn test_validate() {
    let config = SolverConfig::new().with_widths([1, 64]);
    assert!(config.validate().is_ok());

    let config = SolverConfig::new().with_widths([0]);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let config = SolverConfig::new()
        .with_mask_width(MaskWidth::U16)
        .with_widths([16, 17]);
    let err = config.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid configuration: width 17 is outside 1..=16 for mask width u16"
    );
}

#[test]
fn test_load_missing_file() {
    let err = SolverConfig::load("/nonexistent/bitqueens.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mask_width = \"u8\"").unwrap();
    writeln!(file, "widths = [8]").unwrap();

    let config = SolverConfig::load(file.path()).unwrap();
    assert_eq!(config.mask_width, MaskWidth::U8);
    assert_eq!(config.widths, vec![8]);
}

#[test]
fn test_display() {
    assert_eq!(KernelType::Stacked.to_string(), "stacked");
    assert_eq!(MaskWidth::U128.to_string(), "u128");
    assert_eq!(CountWidth::U64.to_string(), "u64");
}

#[test]
fn test_toml_round_trip() {
    let config = SolverConfig::new().with_kernel(KernelType::Stacked);
    let text = toml::to_string(&config).unwrap();
    assert_eq!(SolverConfig::from_toml_str(&text).unwrap(), config);
}
