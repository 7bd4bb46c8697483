//! Shared style-profile loader for the vhdlstyle toolchain.
//!
//! `defaults/vhdlstyle.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`StyleConfig`].

use std::collections::HashMap;
use std::path::Path;

use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

use vhdlstyle_rules::{RuleSetting, Severity};

const DEFAULT_TOML: &str = include_str!("../defaults/vhdlstyle.default.toml");

/// Top-level style profile consumed by vhdlstyle applications.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Per-rule settings keyed by stable rule id (`concurrent_005`).
    pub rules: HashMap<String, RuleConfig>,
}

/// Enable flag and severity for one rule.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub enable: bool,
    pub severity: Severity,
}

impl StyleConfig {
    /// Per-rule settings in the shape the engine consumes.
    pub fn rule_settings(&self) -> HashMap<String, RuleSetting> {
        self.rules
            .iter()
            .map(|(id, rule)| {
                (
                    id.clone(),
                    RuleSetting {
                        enabled: rule.enable,
                        severity: rule.severity,
                    },
                )
            })
            .collect()
    }
}

/// Layers user profiles over the embedded defaults.
#[derive(Debug, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Load the defaults, then the user profile if given.
    pub fn load(&self, user_file: Option<&Path>) -> Result<StyleConfig, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        if let Some(path) = user_file {
            builder = builder.add_source(File::from(path));
        }
        builder.build()?.try_deserialize()
    }
}
