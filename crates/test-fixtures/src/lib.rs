//! Test fixture loader for the story datasets shared by integration tests.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Dataset of the public listing golden test.
pub const API_DATASET: &str = "stories/api_dataset.json";

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Walk up from whichever crate is being tested.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("stories").exists() && !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    if path.join("stories").exists() {
        path
    } else {
        path.join("test-fixtures")
    }
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load the array under `key` of a fixture, one element per item.
pub fn load_fixture_items<T: DeserializeOwned>(relative_path: &str, key: &str) -> Vec<T> {
    let value = load_fixture_value(relative_path);
    let items = value
        .get(key)
        .cloned()
        .unwrap_or_else(|| panic!("Fixture {} has no `{}` key", relative_path, key));
    serde_json::from_value(items)
        .unwrap_or_else(|e| panic!("Failed to parse `{}` in {}: {}", key, relative_path, e))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}
