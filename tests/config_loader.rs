mod common;

use common::{item, temp_config};
use shopcart::config::{Config, ConfigError};
use shopcart::viewmodel::MAX_CHANNEL_CAPACITY;
use std::time::Duration;

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(!config.sync_mutations);
    assert_eq!(config.source.latency_ms, 250);
    assert_eq!(config.source.latency(), Duration::from_millis(250));
    assert!(config.source.fail_with.is_none());
    assert_eq!(config.state.channel_capacity, 64);

    let names: Vec<&str> = config.source.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["T-Shirt", "Pants"]);
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("shopcart/config.toml"));
}

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_empty_file_uses_defaults() {
    let (_dir, path) = temp_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_file_parses() {
    let (_dir, path) = temp_config(
        r#"
sync_mutations = true

[source]
latency_ms = 0
fail_with = "network down"

[[source.items]]
id = "10"
name = "Hat"
price = "15.00"
quantity = 1

[state]
channel_capacity = 8
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert!(config.sync_mutations);
    assert_eq!(config.source.latency_ms, 0);
    assert_eq!(config.source.fail_with.as_deref(), Some("network down"));
    assert_eq!(config.source.items, vec![item("10", "Hat", 1500, 1)]);
    assert_eq!(config.state.channel_capacity, 8);
}

#[test]
fn test_empty_item_list_is_allowed() {
    let (_dir, path) = temp_config("[source]\nitems = []\n");
    let config = Config::load_from(&path).unwrap();
    assert!(config.source.items.is_empty());
}

#[test]
fn test_parse_error_reports_path() {
    let (_dir, path) = temp_config("sync_mutations = \"sometimes\"");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ParseError { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_validation_fails_zero_capacity() {
    let (_dir, path) = temp_config("[state]\nchannel_capacity = 0\n");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("channel_capacity"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_fails_oversized_capacity() {
    let mut config = Config::default();
    config.state.channel_capacity = usize::MAX / 2 + 1;
    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("channel_capacity"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }

    config.state.channel_capacity = MAX_CHANNEL_CAPACITY;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_fails_duplicate_ids() {
    let mut config = Config::default();
    config.source.items.push(item("1", "Another Shirt", 500, 1));
    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("Duplicate cart item id '1'"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_fails_negative_price() {
    let (_dir, path) = temp_config(
        r#"
[[source.items]]
id = "1"
name = "Coupon"
price = "-5.00"
quantity = 1
"#,
    );
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("negative price"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_built_source_honours_fail_with() {
    let mut config = Config::default();
    config.source.latency_ms = 0;
    config.source.fail_with = Some("offline".into());

    use shopcart::cart::CartDataSource;
    let err = config.source.build().get_items().await.unwrap_err();
    assert_eq!(err.to_string(), "offline");
}
