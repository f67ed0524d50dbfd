//! Configuration types for stampnorm.
//!
//! The sentinel tags and output labels are part of the broadcast report
//! format, so they come only from the embedded TOML below. There is no user
//! config file. [`Config::defaults`] never touches the filesystem.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[tags]
before = "Before"
after  = "After"

[labels]
begin      = "master_begin"
mid_prefix = "mid"
end        = "master_end"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, deserialized from the embedded defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub labels: Labels,
}

/// `[tags]` section: the exact tag text required on the sentinel lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tags {
    #[serde(default = "default_before")]
    pub before: String,
    #[serde(default = "default_after")]
    pub after: String,
}

fn default_before() -> String { "Before".to_string() }
fn default_after() -> String { "After".to_string() }

impl Default for Tags {
    fn default() -> Self {
        Self {
            before: default_before(),
            after: default_after(),
        }
    }
}

/// `[labels]` section: names written in front of each offset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Labels {
    #[serde(default = "default_begin")]
    pub begin: String,
    /// Peer `i` is written as `{mid_prefix}_{i}`.
    #[serde(default = "default_mid_prefix")]
    pub mid_prefix: String,
    #[serde(default = "default_end")]
    pub end: String,
}

fn default_begin() -> String { "master_begin".to_string() }
fn default_mid_prefix() -> String { "mid".to_string() }
fn default_end() -> String { "master_end".to_string() }

impl Default for Labels {
    fn default() -> Self {
        Self {
            begin: default_begin(),
            mid_prefix: default_mid_prefix(),
            end: default_end(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Return the built-in configuration.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
