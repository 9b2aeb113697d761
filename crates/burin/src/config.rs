//! Rule configuration parsed from the host's option list.
//!
//! The host hands options over as a JSON array `[style, settings?]`, the
//! same contract the reporting framework uses for every rule it schedules.
//! Parsing happens once at setup; a malformed configuration aborts the run
//! before any node is checked.

use burin_trace::{CompactString, FxHashSet};
use serde_json::Value;
use thiserror::Error;

/// Attribute hyphenation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HyphenationStyle {
    /// Require hyphenated attribute names: my-prop
    #[default]
    Always,
    /// Forbid hyphens, require camelCase: myProp
    Never,
}

/// Configuration error, fatal at setup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expected at most 2 options, got {0}")]
    TooManyOptions(usize),
    #[error("style option must be a string")]
    StyleNotString,
    #[error("unknown style `{0}`, expected \"always\" or \"never\"")]
    UnknownStyle(String),
    #[error("settings must be an object")]
    SettingsNotObject,
    #[error("unknown setting `{0}`")]
    UnknownSetting(String),
    #[error("`ignore` must be an array")]
    IgnoreNotArray,
    #[error("`ignore` entries must be strings")]
    IgnoreEntryNotString,
}

/// Immutable per-invocation rule configuration
#[derive(Debug, Clone, Default)]
pub struct RuleConfig {
    pub style: HyphenationStyle,
    /// Raw attribute names exempt from the style check, matched exactly
    /// (case-sensitive, without any directive prefix)
    pub ignore: FxHashSet<CompactString>,
}

impl RuleConfig {
    /// Parse the host's `[style, settings?]` option list.
    ///
    /// `style` defaults to `"always"`, `settings.ignore` to the empty set.
    pub fn from_options(options: &[Value]) -> Result<Self, ConfigError> {
        if options.len() > 2 {
            return Err(ConfigError::TooManyOptions(options.len()));
        }

        let style = match options.first() {
            None => HyphenationStyle::Always,
            Some(Value::String(s)) => match s.as_str() {
                "always" => HyphenationStyle::Always,
                "never" => HyphenationStyle::Never,
                other => return Err(ConfigError::UnknownStyle(other.to_string())),
            },
            Some(_) => return Err(ConfigError::StyleNotString),
        };

        let mut ignore = FxHashSet::default();
        if let Some(settings) = options.get(1) {
            let Value::Object(map) = settings else {
                return Err(ConfigError::SettingsNotObject);
            };
            for (key, value) in map {
                if key != "ignore" {
                    return Err(ConfigError::UnknownSetting(key.clone()));
                }
                let Value::Array(entries) = value else {
                    return Err(ConfigError::IgnoreNotArray);
                };
                for entry in entries {
                    let Value::String(name) = entry else {
                        return Err(ConfigError::IgnoreEntryNotString);
                    };
                    ignore.insert(CompactString::from(name.as_str()));
                }
            }
        }

        Ok(Self { style, ignore })
    }

    /// Check whether a raw identifier is exempt per user configuration.
    ///
    /// Exact, case-sensitive, full-string match on the bare name; the
    /// directive prefix spelling is irrelevant.
    #[inline]
    pub fn is_ignored(&self, raw_text: &str) -> bool {
        self.ignore.contains(raw_text)
    }
}
