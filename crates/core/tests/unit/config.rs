//! Configuration defaults and JSON overrides.

use rvcall_core::Config;

#[test]
fn defaults_match_the_documented_layout() {
    let config = Config::default();
    assert_eq!(config.layout.code_base, 0x0001_0000);
    assert_eq!(config.layout.data_base, 0x0010_0000);
    assert_eq!(config.layout.heap_base, 0x0100_0000);
    assert_eq!(config.layout.stack_top, 0x7fff_0000);
    assert_eq!(config.layout.initial_capacity, 2 * 1024 * 1024);
    assert_eq!(config.layout.capacity_limit, 0x8000_0000);
    assert_eq!(config.execution.max_instructions, 16 * 1024 * 1024);
    assert!(!config.execution.trace);
}

#[test]
fn empty_document_yields_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.layout.code_base, Config::default().layout.code_base);
    assert_eq!(
        config.execution.max_instructions,
        Config::default().execution.max_instructions
    );
}

#[test]
fn partial_layout_override_keeps_other_defaults() {
    let json = r#"{ "layout": { "stack_top": 8388608, "capacity_limit": 16777216 } }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.layout.stack_top, 0x0080_0000);
    assert_eq!(config.layout.capacity_limit, 16 * 1024 * 1024);
    assert_eq!(config.layout.code_base, 0x0001_0000);
}

#[test]
fn execution_override() {
    let json = r#"{ "execution": { "max_instructions": 1000, "trace": true } }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.execution.max_instructions, 1000);
    assert!(config.execution.trace);
    assert_eq!(config.layout.heap_base, 0x0100_0000);
}
