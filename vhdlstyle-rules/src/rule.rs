//! The rule contract.

use vhdlstyle_parser::vhdl::SourceFile;

use crate::violation::Violation;

/// A style rule: two operations plus static identity metadata.
///
/// Lifecycle: instantiated once per linting session. `analyze` populates the
/// violation list against a file snapshot; `fix` consumes the list (most
/// recent first wherever a fix may change the line count) and leaves it
/// empty. Violations are cleared only by their owning rule, never by another
/// rule's fix.
pub trait Rule {
    /// Rule family, e.g. `concurrent`.
    fn family(&self) -> &'static str;

    /// Numeric identifier within the family, e.g. `005`.
    fn identifier(&self) -> &'static str;

    /// Execution phase; lower phases run first, across all rules.
    fn phase(&self) -> u32;

    /// Human-readable description of the fix.
    fn solution(&self) -> &str;

    /// Scan the file and collect violations.
    fn analyze(&mut self, file: &SourceFile);

    /// Consume the collected violations, mutating the file.
    fn fix(&mut self, file: &mut SourceFile);

    fn violations(&self) -> &[Violation];

    fn clear_violations(&mut self);

    /// Stable identifier used by configuration and reporting.
    fn rule_id(&self) -> String {
        format!("{}_{}", self.family(), self.identifier())
    }
}
