//! Validation rule extraction
//!
//! A `validation_rule` cell is free text such as `required|min:5|email`. It is
//! scanned against a fixed, ordered pattern table. Every pattern is tried
//! independently and yields at most one rule, so one string can produce several
//! rules and the output order follows the table rather than the input.
//!
//! The patterns are kept exactly as existing workbooks expect them, overlaps
//! included: `min.*?(\d+)` also fires inside `minLength:3`, and `min` matches
//! inside words such as `admin`.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::types::{RuleKind, RuleValue, ValidationRule};

/// How a matched pattern turns into a rule value
#[derive(Debug, Clone, Copy)]
enum Capture {
    /// No value
    None,
    /// First group parsed as an unsigned integer
    Number,
    /// First group taken verbatim
    Text,
}

/// One row of the pattern table
struct RulePattern {
    kind: RuleKind,
    matcher: Matcher,
    capture: Capture,
}

enum Matcher {
    Regex(Regex),
    /// Case-insensitive substring
    Literal(&'static str),
}

fn pattern(source: &str, case_insensitive: bool) -> Regex {
    RegexBuilder::new(source)
        .case_insensitive(case_insensitive)
        .build()
        .expect("Invalid validation rule pattern")
}

static RULE_TABLE: LazyLock<Vec<RulePattern>> = LazyLock::new(|| {
    let re = |kind, source, capture| RulePattern {
        kind,
        matcher: Matcher::Regex(pattern(source, true)),
        capture,
    };

    vec![
        re(RuleKind::Required, r"\brequired\b", Capture::None),
        re(
            RuleKind::MinLength,
            r"min[_\s-]?length\s*[:=]?\s*(\d+)",
            Capture::Number,
        ),
        re(
            RuleKind::MaxLength,
            r"max[_\s-]?length\s*[:=]?\s*(\d+)",
            Capture::Number,
        ),
        re(RuleKind::Min, r"min.*?(\d+)", Capture::Number),
        re(RuleKind::Max, r"max.*?(\d+)", Capture::Number),
        re(RuleKind::Email, r"\bemail\b", Capture::None),
        re(RuleKind::Url, r"\burl\b", Capture::None),
        RulePattern {
            kind: RuleKind::Regex,
            matcher: Matcher::Regex(pattern(r"regex:/(.+)/", false)),
            capture: Capture::Text,
        },
        RulePattern {
            kind: RuleKind::Unique,
            matcher: Matcher::Literal("unique"),
            capture: Capture::None,
        },
        RulePattern {
            kind: RuleKind::Format,
            matcher: Matcher::Literal("format"),
            capture: Capture::None,
        },
    ]
});

impl RulePattern {
    /// `Some(value)` when the pattern matches; the inner option is the rule value
    fn extract(&self, raw: &str, lowered: &str) -> Option<Option<RuleValue>> {
        match &self.matcher {
            Matcher::Literal(needle) => lowered.contains(needle).then_some(None),
            Matcher::Regex(re) => {
                let caps = re.captures(raw)?;
                match self.capture {
                    Capture::None => Some(None),
                    Capture::Number => {
                        let n = caps.get(1)?.as_str().parse().ok()?;
                        Some(Some(RuleValue::Number(n)))
                    }
                    Capture::Text => Some(Some(RuleValue::Pattern(caps.get(1)?.as_str().to_string()))),
                }
            }
        }
    }
}

fn message(kind: RuleKind, label: &str, value: Option<&RuleValue>) -> String {
    let n = match value {
        Some(RuleValue::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    match kind {
        RuleKind::Required => format!("{label} is required"),
        RuleKind::MinLength => format!("{label} must be at least {n} characters"),
        RuleKind::MaxLength => format!("{label} must be at most {n} characters"),
        RuleKind::Min => format!("{label} must be at least {n}"),
        RuleKind::Max => format!("{label} must be at most {n}"),
        RuleKind::Email => format!("{label} must be a valid email address"),
        RuleKind::Url => format!("{label} must be a valid URL"),
        RuleKind::Regex | RuleKind::Format => format!("{label} has an invalid format"),
        RuleKind::Unique => format!("{label} must be unique"),
    }
}

/// Scan a raw rule string against the pattern table
///
/// Unmatched or malformed text yields no rules; this never fails.
///
/// # Examples
///
/// ```
/// # use panelgen::model::{extract_validation_rules, RuleKind};
/// let rules = extract_validation_rules("email|required", "Email");
/// let kinds: Vec<_> = rules.iter().map(|r| r.kind).collect();
/// assert_eq!(kinds, vec![RuleKind::Required, RuleKind::Email]);
/// assert_eq!(rules[0].message, "Email is required");
/// ```
#[must_use]
pub fn extract_validation_rules(raw: &str, label: &str) -> Vec<ValidationRule> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    let lowered = raw.to_lowercase();

    RULE_TABLE
        .iter()
        .filter_map(|p| {
            let value = p.extract(raw, &lowered)?;
            Some(ValidationRule {
                kind: p.kind,
                message: message(p.kind, label, value.as_ref()),
                value,
            })
        })
        .collect()
}
