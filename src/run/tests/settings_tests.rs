//! Tests for the settings store

use tempfile::TempDir;

use crate::aligner::{AlignError, AlignmentSettings};
use crate::run::SettingsStore;

#[test]
fn test_missing_file_gives_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = SettingsStore::load(dir.path().join("alignment.toml")).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("alignment.toml");

    let mut store = SettingsStore::new();
    store.set("run1", AlignmentSettings::new(0, 0, 12, -4));
    store.set("run2", AlignmentSettings::new(-7, 3, 0, 0).with_transparency(0.25));
    store.save(&path).unwrap();

    let loaded = SettingsStore::load(&path).unwrap();
    assert_eq!(loaded, store);
    assert_eq!(loaded.get("run2").unwrap().transparency, 0.25);
}

#[test]
fn test_missing_keys_use_defaults() {
    let store = SettingsStore::from_str("[run4]\nseries_x = 9\ntransparency = 1\n").unwrap();
    let settings = store.get("run4").unwrap();
    assert_eq!(*settings, AlignmentSettings::new(0, 0, 9, 0).with_transparency(1.0));
}

#[test]
fn test_bad_offset_type() {
    let result = SettingsStore::from_str("[run1]\nseries_x = \"left\"\n");
    assert!(matches!(result, Err(AlignError::ConfigError(_))));
}

#[test]
fn test_extreme_offset_rejected() {
    let result = SettingsStore::from_str("[run1]\nseries_x = -3000000000\n");
    assert!(matches!(result, Err(AlignError::OffsetOutOfRange(-3000000000))));

    let store = SettingsStore::from_str("[run1]\nseries_x = -2147483647\n").unwrap();
    assert_eq!(store.get("run1").unwrap().series_x, -2147483647);
}

#[test]
fn test_reset_and_remove() {
    let mut store = SettingsStore::new();
    store.set("run1", AlignmentSettings::new(1, 2, 3, 4));

    assert_eq!(store.reset("run1"), AlignmentSettings::default());
    assert_eq!(store.get_or_default("run1"), AlignmentSettings::default());
    assert!(store.remove("run1").is_some());
    assert!(!store.contains("run1"));
    assert_eq!(store.get_or_default("run9"), AlignmentSettings::default());
}
