//! Build settings model.
//!
//! Settings are the immutable configuration data attached to a target: a
//! base key/value dictionary, per-configuration overrides, and a policy
//! controlling which defaults the native build system fills in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder that keeps values contributed by the native build system's
/// own default mechanism at the front of a list-valued setting.
pub const INHERITED_PLACEHOLDER: &str = "$(inherited)";

/// A single build-setting value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// A scalar string value
    String(String),

    /// An ordered list of strings
    Array(Vec<String>),
}

impl SettingValue {
    /// Get the scalar value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(value) => Some(value),
            SettingValue::Array(_) => None,
        }
    }

    /// Get the list value, if this is an array.
    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            SettingValue::String(_) => None,
            SettingValue::Array(values) => Some(values),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(values: Vec<String>) -> Self {
        SettingValue::Array(values)
    }
}

impl From<&[&str]> for SettingValue {
    fn from(values: &[&str]) -> Self {
        SettingValue::Array(values.iter().map(|v| v.to_string()).collect())
    }
}

/// The base dictionary of a settings object.
///
/// Keys are case-sensitive and unique; a `BTreeMap` keeps iteration order
/// deterministic across runs.
pub type SettingsDictionary = BTreeMap<String, SettingValue>;

/// Which defaults the native build system applies on top of these settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultSettings {
    /// The full recommended default set
    Recommended,

    /// Only the defaults required for a working build
    Essential,

    /// No defaults at all
    None,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        DefaultSettings::Recommended
    }
}

/// Build settings for a target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base key/value flags, applied to every configuration
    pub base: SettingsDictionary,

    /// Per-configuration overrides, keyed by configuration name
    pub configurations: BTreeMap<String, SettingsDictionary>,

    /// Default-settings policy
    pub default_settings: DefaultSettings,
}

impl Settings {
    /// Create settings from a base dictionary, with no configuration
    /// overrides and the recommended default policy.
    pub fn with_base(base: SettingsDictionary) -> Self {
        Settings {
            base,
            configurations: BTreeMap::new(),
            default_settings: DefaultSettings::Recommended,
        }
    }

    /// Check whether these settings carry no information at all.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.configurations.is_empty()
    }
}

/// Append groups of entries to the list-valued setting at `key`.
///
/// Each group is a run of strings that stand or fall together (for Swift
/// flags, a passthrough marker plus the flag it prefixes). A group whose
/// final element is already present in the list is skipped, so repeated
/// mapping runs do not stack duplicates.
///
/// An absent key or empty list gains the `$(inherited)` placeholder as its
/// first element; a pre-existing scalar is promoted to the first list
/// element instead, and a pre-existing non-empty list is kept as-is with
/// new entries appended after it.
pub fn append_list_entries(base: &mut SettingsDictionary, key: &str, groups: &[Vec<String>]) {
    let mut list = match base.remove(key) {
        Some(SettingValue::Array(values)) if !values.is_empty() => values,
        Some(SettingValue::String(value)) if !value.is_empty() => vec![value],
        _ => vec![INHERITED_PLACEHOLDER.to_string()],
    };

    for group in groups {
        let Some(marker) = group.last() else {
            continue;
        };
        if list.iter().any(|existing| existing == marker) {
            continue;
        }
        list.extend(group.iter().cloned());
    }

    base.insert(key.to_string(), SettingValue::Array(list));
}
