//! Built-in lint rules.
//!
//! | id | severity |
//! |---|---|
//! | `missing-reducer-macro` | warning |
//! | `state-not-equatable` | warning |
//! | `deprecated-view-store` | warning |
//! | `state-mutation-in-effect` | error |
//! | `unstructured-task` | error |
//! | `direct-network-call` | error |
//! | `uncontrolled-dependency` | warning |
//! | `missing-cancellation` | warning |

use regex::Regex;

use super::{LintFinding, LintRule, Severity};

/// Rule ids in evaluation order.
pub const RULE_IDS: &[&str] = &[
    "missing-reducer-macro",
    "state-not-equatable",
    "deprecated-view-store",
    "state-mutation-in-effect",
    "unstructured-task",
    "direct-network-call",
    "uncontrolled-dependency",
    "missing-cancellation",
];

/// Build the default rule set in [`RULE_IDS`] order.
///
/// A rule whose pattern fails to compile is dropped rather than aborting
/// the server; the unit tests pin the full set.
pub fn default_rules() -> Vec<Box<dyn LintRule>> {
    let rules: Vec<Option<Box<dyn LintRule>>> = vec![
        MissingReducerMacro::new().map(boxed),
        LinePatternRule::new(
            "state-not-equatable",
            Severity::Warning,
            r"\bstruct\s+State\b",
            Some(r"\bEquatable\b"),
            |_| {
                "State does not conform to Equatable; declare `struct State: Equatable` \
                 so TestStore can assert on state changes"
                    .to_string()
            },
        )
        .map(boxed),
        LinePatternRule::new(
            "deprecated-view-store",
            Severity::Warning,
            r"\bWithViewStore\b|\bViewStore\s*\(|\bviewStore\.",
            None,
            |m| {
                format!(
                    "`{}` is deprecated; annotate State with @ObservableState and read \
                     from the store directly",
                    m.trim_end_matches(['(', '.'])
                )
            },
        )
        .map(boxed),
        StateMutationInEffect::new().map(boxed),
        LinePatternRule::new(
            "unstructured-task",
            Severity::Error,
            r"\bTask\s*\{|\bTask\.detached\b|\bDispatchQueue\.",
            None,
            |m| {
                format!(
                    "`{}` escapes the effect system and cannot be tested or cancelled; \
                     return a .run effect instead",
                    m.trim_end_matches(['{', '.', ' '])
                )
            },
        )
        .map(boxed),
        LinePatternRule::new(
            "direct-network-call",
            Severity::Error,
            r"\bURLSession\.shared\b",
            None,
            |_| {
                "URLSession.shared called directly; move networking into a dependency \
                 client and access it with @Dependency"
                    .to_string()
            },
        )
        .map(boxed),
        LinePatternRule::new(
            "uncontrolled-dependency",
            Severity::Warning,
            r"\bDate\(\)|\bUUID\(\)|\bTask\.sleep\(",
            Some(r"@Dependency"),
            |m| {
                let replacement = match m {
                    "Date()" => "@Dependency(\\.date.now)",
                    "UUID()" => "@Dependency(\\.uuid)",
                    _ => "@Dependency(\\.continuousClock)",
                };
                format!("`{m}` is not controllable in tests; use {replacement} instead")
            },
        )
        .map(boxed),
        MissingCancellation::new().map(boxed),
    ];
    rules.into_iter().flatten().collect()
}

fn boxed<R: LintRule + 'static>(rule: R) -> Box<dyn LintRule> {
    Box::new(rule)
}

fn is_comment(line: &str) -> bool {
    let t = line.trim_start();
    t.starts_with("//")
        || t.starts_with("/*")
        || t.starts_with("* ")
        || t.starts_with("*/")
        || t == "*"
}

/// The code part of a line: string literal contents blanked to `""` and any
/// trailing `//` comment removed.
fn code_text(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    let mut in_string = false;
    while let Some(c) = chars.next() {
        if in_string {
            match c {
                '\\' => {
                    chars.next();
                }
                '"' => {
                    in_string = false;
                    out.push('"');
                }
                _ => {}
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push('"');
            }
            '/' if chars.peek() == Some(&'/') => break,
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// LinePatternRule: one finding per matching line
// ---------------------------------------------------------------------------

/// Flags every non-comment line that matches `pattern` and does not match
/// `exclude`. `message` receives the matched text.
pub struct LinePatternRule {
    id: &'static str,
    severity: Severity,
    pattern: Regex,
    exclude: Option<Regex>,
    message: fn(&str) -> String,
}

impl LinePatternRule {
    pub fn new(
        id: &'static str,
        severity: Severity,
        pattern: &str,
        exclude: Option<&str>,
        message: fn(&str) -> String,
    ) -> Option<Self> {
        let pattern = Regex::new(pattern).ok()?;
        let exclude = match exclude {
            Some(p) => Some(Regex::new(p).ok()?),
            None => None,
        };
        Some(Self {
            id,
            severity,
            pattern,
            exclude,
            message,
        })
    }
}

impl LintRule for LinePatternRule {
    fn id(&self) -> &'static str {
        self.id
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, source: &str) -> Vec<LintFinding> {
        source
            .lines()
            .enumerate()
            .filter(|(_, line)| !is_comment(line))
            .filter(|(_, line)| !self.exclude.as_ref().is_some_and(|ex| ex.is_match(line)))
            .filter_map(|(idx, line)| {
                self.pattern.find(line).map(|m| LintFinding {
                    rule: self.id,
                    severity: self.severity,
                    message: (self.message)(m.as_str()),
                    line: idx + 1,
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// MissingReducerMacro
// ---------------------------------------------------------------------------

/// `struct Feature: Reducer` without an `@Reducer` attribute on the line
/// above (or inline).
pub struct MissingReducerMacro {
    declaration: Regex,
}

impl MissingReducerMacro {
    pub fn new() -> Option<Self> {
        Regex::new(r"\bstruct\s+(\w+)\s*:\s*(?:[\w.]+\s*,\s*)*Reducer\b")
            .ok()
            .map(|declaration| Self { declaration })
    }
}

impl LintRule for MissingReducerMacro {
    fn id(&self) -> &'static str {
        "missing-reducer-macro"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, source: &str) -> Vec<LintFinding> {
        let lines: Vec<&str> = source.lines().collect();
        let mut findings = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            if is_comment(line) || line.contains("@Reducer") {
                continue;
            }
            let Some(caps) = self.declaration.captures(line) else {
                continue;
            };
            let previous = lines[..idx]
                .iter()
                .rev()
                .map(|l| l.trim())
                .find(|l| !l.is_empty());
            if previous.is_some_and(|l| l.starts_with("@Reducer")) {
                continue;
            }
            findings.push(LintFinding {
                rule: self.id(),
                severity: self.severity(),
                message: format!(
                    "`{}` conforms to Reducer by hand; annotate it with @Reducer to get \
                     synthesized case paths and observation",
                    &caps[1]
                ),
                line: idx + 1,
            });
        }
        findings
    }
}

// ---------------------------------------------------------------------------
// StateMutationInEffect
// ---------------------------------------------------------------------------

/// Assignment to `state.` inside a `.run { ... }` closure, tracked by brace
/// depth from the opening brace of the closure.
pub struct StateMutationInEffect {
    run_open: Regex,
    assignment: Regex,
}

impl StateMutationInEffect {
    pub fn new() -> Option<Self> {
        Some(Self {
            run_open: Regex::new(r"\.run\s*(?:\([^)]*\))?\s*\{").ok()?,
            assignment: Regex::new(r"\bstate\.[\w.]+\s*(?:=[^=]|=$|[-+*/]=)").ok()?,
        })
    }
}

fn brace_delta(text: &str) -> i64 {
    text.chars().fold(0, |acc, c| match c {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}

impl LintRule for StateMutationInEffect {
    fn id(&self) -> &'static str {
        "state-mutation-in-effect"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, source: &str) -> Vec<LintFinding> {
        let mut findings = Vec::new();
        let mut depth: i64 = 0;
        for (idx, line) in source.lines().enumerate() {
            if is_comment(line) {
                continue;
            }
            let code = code_text(line);
            let body = if depth > 0 {
                code.as_str()
            } else if let Some(m) = self.run_open.find(&code) {
                &code[m.start()..]
            } else {
                continue;
            };
            if self.assignment.is_match(body) {
                findings.push(LintFinding {
                    rule: self.id(),
                    severity: self.severity(),
                    message: "State is mutated inside a .run effect; effects cannot touch \
                              state, send an action back to the reducer instead"
                        .to_string(),
                    line: idx + 1,
                });
            }
            depth = (depth + brace_delta(body)).max(0);
        }
        findings
    }
}

// ---------------------------------------------------------------------------
// MissingCancellation
// ---------------------------------------------------------------------------

/// Long-running effects (`for await`, clock timers, Foundation timers) in a
/// source that never calls `.cancellable(`.
pub struct MissingCancellation {
    long_running: Regex,
}

impl MissingCancellation {
    pub fn new() -> Option<Self> {
        Regex::new(r"\bfor\s+(?:try\s+)?await\b|\.timer\s*\(|\bTimer\.(?:publish|scheduledTimer)\b")
            .ok()
            .map(|long_running| Self { long_running })
    }
}

impl LintRule for MissingCancellation {
    fn id(&self) -> &'static str {
        "missing-cancellation"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, source: &str) -> Vec<LintFinding> {
        let cancelled = source
            .lines()
            .filter(|line| !is_comment(line))
            .any(|line| code_text(line).contains(".cancellable("));
        if cancelled {
            return Vec::new();
        }
        source
            .lines()
            .enumerate()
            .filter(|(_, line)| !is_comment(line) && self.long_running.is_match(line))
            .map(|(idx, _)| LintFinding {
                rule: self.id(),
                severity: self.severity(),
                message: "Long-running effect is never cancelled; add \
                          .cancellable(id:) and return .cancel(id:) when the feature stops"
                    .to_string(),
                line: idx + 1,
            })
            .collect()
    }
}
