//! Code analyzer: rule-based lint for Composable Architecture Swift code.
//!
//! Each rule is an independent [`LintRule`] that sees the whole source text
//! and returns its own findings. Rules never observe each other's output.
//! Findings come back grouped by rule in [`rules::RULE_IDS`] order and, within
//! a rule, by ascending line.

pub mod rules;

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use crate::config::schema::TcaMcpConfig;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Style or maintainability issue.
    Warning,
    /// Correctness hazard.
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported issue. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintFinding {
    pub rule: &'static str,
    pub severity: Severity,
    pub message: String,
    pub line: usize,
}

/// A stateless check over a full source text.
pub trait LintRule: Send + Sync {
    /// Stable kebab-case identifier, used in output and config.
    fn id(&self) -> &'static str;

    fn severity(&self) -> Severity;

    /// Findings for `source`, ascending by line.
    fn check(&self, source: &str) -> Vec<LintFinding>;
}

static DEFAULT_RULES: LazyLock<Vec<Box<dyn LintRule>>> = LazyLock::new(rules::default_rules);

/// Runs an ordered subset of the default rules.
pub struct Linter {
    rules: Vec<&'static dyn LintRule>,
}

impl Linter {
    /// Every rule enabled.
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.iter().map(|r| &**r).collect(),
        }
    }

    /// Rules listed in `lint.disabled_rules` are skipped.
    pub fn from_config(config: &TcaMcpConfig) -> Self {
        Self {
            rules: DEFAULT_RULES
                .iter()
                .map(|r| &**r)
                .filter(|r| config.is_rule_enabled(r.id()))
                .collect(),
        }
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn lint(&self, source: &str) -> Vec<LintFinding> {
        if source.is_empty() {
            return Vec::new();
        }
        let findings: Vec<LintFinding> =
            self.rules.iter().flat_map(|r| r.check(source)).collect();
        tracing::debug!(
            rules = self.rules.len(),
            findings = findings.len(),
            "lint complete"
        );
        findings
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lint with every rule enabled.
pub fn lint(source: &str) -> Vec<LintFinding> {
    Linter::new().lint(source)
}

/// Render findings the way the `lint-code` tool reports them.
pub fn format_findings(findings: &[LintFinding]) -> String {
    if findings.is_empty() {
        return "No issues found.".to_string();
    }
    let mut out = format!("Found {} issue(s):\n", findings.len());
    for f in findings {
        out.push_str(&format!(
            "- [{}] line {}: {} ({})\n",
            f.severity, f.line, f.message, f.rule
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_source_has_no_findings() {
        assert!(lint("").is_empty());
    }

    #[test]
    fn clean_feature_has_no_findings() {
        let source = crate::catalog::get_template("timer").unwrap().code;
        assert_eq!(lint(source), Vec::new());
    }

    #[test]
    fn every_template_lints_clean() {
        for t in crate::catalog::list_templates() {
            let code = crate::catalog::get_template(t.key.as_str()).unwrap().code;
            assert_eq!(lint(code), Vec::new(), "template {}", t.key);
        }
    }

    #[test]
    fn findings_grouped_by_rule_then_line() {
        let source = "\
struct State {
  var a = 0
}
let d = Date()
let s = URLSession.shared
let u = UUID()
";
        let findings = lint(source);
        let got: Vec<_> = findings.iter().map(|f| (f.rule, f.line)).collect();
        assert_eq!(
            got,
            vec![
                ("state-not-equatable", 1),
                ("direct-network-call", 5),
                ("uncontrolled-dependency", 4),
                ("uncontrolled-dependency", 6),
            ]
        );
    }

    #[test]
    fn disabled_rules_are_skipped_without_affecting_others() {
        let mut config = TcaMcpConfig::default();
        config.lint.disabled_rules = vec!["uncontrolled-dependency".into()];
        let linter = Linter::from_config(&config);
        assert!(!linter.rule_ids().contains(&"uncontrolled-dependency"));

        let source = "let d = Date()\nlet s = URLSession.shared\n";
        let findings = linter.lint(source);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "direct-network-call");
    }

    #[test]
    fn format_empty_says_no_issues() {
        assert_eq!(format_findings(&[]), "No issues found.");
    }

    #[test]
    fn format_lists_each_finding() {
        let findings = vec![LintFinding {
            rule: "direct-network-call",
            severity: Severity::Error,
            message: "bad".into(),
            line: 3,
        }];
        assert_eq!(
            format_findings(&findings),
            "Found 1 issue(s):\n- [error] line 3: bad (direct-network-call)\n"
        );
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Severity::Warning).unwrap(),
            serde_json::json!("warning")
        );
    }
}
