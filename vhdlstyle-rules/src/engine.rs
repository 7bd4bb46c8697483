//! The rule engine.
//!
//! Holds every rule sorted by ascending phase (phase is the sole cross-rule
//! ordering key; registration order breaks ties). Two modes:
//!
//!     analyze   run every enabled rule's analyze against the file snapshot
//!               and report; never mutates
//!     fix       per rule in phase order: analyze against the *current* file
//!               state, then fix; re-derive predicates when a fix changed the
//!               line count
//!
//! Because analyze runs immediately before each rule's fix, no rule ever
//! consumes line numbers from a stale file generation.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use vhdlstyle_parser::vhdl::SourceFile;

use crate::rule::Rule;
use crate::violation::Violation;

/// Severity attached to reports; it never alters engine behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Per-rule configuration consumed from the style profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleSetting {
    pub enabled: bool,
    pub severity: Severity,
}

impl Default for RuleSetting {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Error,
        }
    }
}

/// Everything one rule found in one pass, for the reporting surface.
#[derive(Debug, Clone, Serialize)]
pub struct RuleReport {
    pub rule_id: String,
    pub severity: Severity,
    pub solution: String,
    pub violations: Vec<Violation>,
}

/// Phase-ordered executor over a set of rules.
pub struct Engine {
    rules: Vec<Box<dyn Rule>>,
    settings: HashMap<String, RuleSetting>,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            settings: HashMap::new(),
        }
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        let mut engine = Self::new();
        for rule in rules {
            engine.register(rule);
        }
        engine
    }

    /// Add a rule, keeping the set sorted by phase. The sort is stable, so
    /// rules sharing a phase keep their registration order.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
        self.rules.sort_by_key(|r| r.phase());
    }

    /// Map stable rule ids to settings; unmentioned rules stay enabled at
    /// the default severity. Disabled rules neither analyze nor fix.
    pub fn configure(&mut self, settings: HashMap<String, RuleSetting>) {
        self.settings = settings;
    }

    pub fn rule_ids(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.rule_id()).collect()
    }

    /// Analysis-only mode: report every violation found in one pass.
    pub fn analyze(&mut self, file: &SourceFile) -> Vec<RuleReport> {
        let settings = &self.settings;
        let mut reports = Vec::new();
        for rule in &mut self.rules {
            let rule_id = rule.rule_id();
            let setting = settings.get(&rule_id).copied().unwrap_or_default();
            if !setting.enabled {
                continue;
            }
            rule.clear_violations();
            rule.analyze(file);
            if !rule.violations().is_empty() {
                reports.push(RuleReport {
                    rule_id,
                    severity: setting.severity,
                    solution: rule.solution().to_string(),
                    violations: rule.violations().to_vec(),
                });
            }
        }
        reports
    }

    /// Fix mode: mutate the file to convergence for this pass, returning
    /// what each rule corrected.
    pub fn fix(&mut self, file: &mut SourceFile) -> Vec<RuleReport> {
        let settings = &self.settings;
        let mut reports = Vec::new();
        for rule in &mut self.rules {
            let rule_id = rule.rule_id();
            let setting = settings.get(&rule_id).copied().unwrap_or_default();
            if !setting.enabled {
                continue;
            }
            rule.clear_violations();
            rule.analyze(file);
            if rule.violations().is_empty() {
                continue;
            }
            reports.push(RuleReport {
                rule_id,
                severity: setting.severity,
                solution: rule.solution().to_string(),
                violations: rule.violations().to_vec(),
            });
            let line_count = file.len();
            rule.fix(file);
            if file.len() != line_count {
                // structural change invalidates downstream predicates
                file.rescan();
            }
        }
        reports
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
