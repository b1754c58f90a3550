use dlxsim_core::common::SimError;
use dlxsim_core::config::{Config, FpUnitConfig};
use pretty_assertions::assert_eq;
use std::io::Write;

// ══════════════════════════════════════════════════════════
// 1. Defaults
// ══════════════════════════════════════════════════════════

#[test]
fn defaults_match_documented_values() {
    let config = Config::default();
    assert!(config.pipeline.forwarding);
    assert_eq!(config.units.int_alu.count, 1);
    assert_eq!(config.units.fp_add, FpUnitConfig::new(1, 2));
    assert_eq!(config.units.fp_mul, FpUnitConfig::new(1, 5));
    assert_eq!(config.units.fp_div, FpUnitConfig::new(1, 19));
    assert_eq!(config.memory.size, 0x8000);
    assert_eq!(config.memory.code_base, 0);
    assert_eq!(config.memory.data_base, 0x1000);
    assert_eq!(config.general.max_cycles, 1_000_000);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_json_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

// ══════════════════════════════════════════════════════════
// 2. Parsing
// ══════════════════════════════════════════════════════════

#[test]
fn partial_sections_keep_other_defaults() {
    let config = Config::from_json(
        r#"{
            "units": { "int_alu": { "count": 3 }, "fp_div": { "count": 2, "latency": 40 } },
            "general": { "max_cycles": 500 }
        }"#,
    )
    .unwrap();
    assert_eq!(config.units.int_alu.count, 3);
    assert_eq!(config.units.fp_div, FpUnitConfig::new(2, 40));
    assert_eq!(config.units.fp_add, FpUnitConfig::new(1, 2));
    assert_eq!(config.general.max_cycles, 500);
    assert!(config.pipeline.forwarding);
}

#[test]
fn unknown_field_is_rejected() {
    let err = Config::from_json(r#"{ "pipeline": { "forwarding": true, "width": 2 } }"#)
        .unwrap_err();
    assert!(matches!(err, SimError::ConfigParse(_)), "{err:?}");
}

#[test]
fn malformed_json_is_parse_error() {
    assert!(matches!(
        Config::from_json("{ not json"),
        Err(SimError::ConfigParse(_))
    ));
}

// ══════════════════════════════════════════════════════════
// 3. Validation
// ══════════════════════════════════════════════════════════

#[test]
fn zero_unit_count_is_invalid() {
    let err = Config::from_json(r#"{ "units": { "fp_mul": { "count": 0, "latency": 5 } } }"#)
        .unwrap_err();
    assert_eq!(
        err,
        SimError::InvalidConfig("units.fp_mul.count must be at least 1".to_string())
    );
}

#[test]
fn zero_latency_is_invalid() {
    let mut config = Config::default();
    config.units.fp_add.latency = 0;
    assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
}

#[test]
fn zero_memory_is_invalid() {
    let mut config = Config::default();
    config.memory.size = 0;
    assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
}

#[test]
fn data_base_beyond_memory_is_invalid() {
    let mut config = Config::default();
    config.memory.size = 0x800;
    assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
    config.memory.data_base = 0x400;
    assert!(config.validate().is_ok());
}

// ══════════════════════════════════════════════════════════
// 4. Files
// ══════════════════════════════════════════════════════════

#[test]
fn from_file_reads_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "pipeline": {{ "forwarding": false }} }}"#).unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert!(!config.pipeline.forwarding);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SimError::ConfigIo(_)), "{err:?}");
}
