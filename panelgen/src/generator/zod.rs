//! Zod schema expressions
//!
//! Each field becomes one chained zod expression. Rules that only make sense
//! for a type are dropped for the others, and `unique`/`format` are checked
//! server-side so they never reach the client schema.

use crate::model::{Field, RuleKind, SemanticType, ValidationRule};

/// Quote a string as a JavaScript literal
pub(crate) fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

fn message_arg(message: &str) -> String {
    format!("{{ message: {} }}", js_string(message))
}

/// Whether the form must reject an empty value
#[must_use]
pub fn is_required(field: &Field) -> bool {
    field.required || field.has_rule(RuleKind::Required)
}

/// Build the zod expression for a field
///
/// # Examples
///
/// ```
/// # use panelgen::generator::zod_chain;
/// # use panelgen::model::{normalize_row, NormalizeOptions};
/// # use panelgen::sheet::RawRow;
/// let row = RawRow {
///     column: Some("email".into()),
///     ui_component: Some("input".into()),
///     validation_rule: Some("email".into()),
///     ..RawRow::default()
/// };
/// let field = normalize_row(&row, &NormalizeOptions::default()).unwrap();
/// assert_eq!(
///     zod_chain(&field),
///     r#"z.string().email({ message: "Email must be a valid email address" }).optional()"#
/// );
/// ```
#[must_use]
pub fn zod_chain(field: &Field) -> String {
    let required = is_required(field);

    let mut chain = match (field.ui_widget.is_choice(), field.options.as_deref()) {
        (true, Some(options)) if !options.is_empty() => {
            let values: Vec<String> = options.iter().map(|o| js_string(o)).collect();
            format!("z.enum([{}])", values.join(", "))
        }
        _ => typed_chain(field, required),
    };

    if !required {
        chain.push_str(".optional()");
    }
    chain
}

fn typed_chain(field: &Field, required: bool) -> String {
    match field.semantic_type {
        SemanticType::String => {
            let mut chain = String::from("z.string()");
            if required {
                let message = field
                    .validation_rules
                    .iter()
                    .find(|r| r.kind == RuleKind::Required)
                    .map_or_else(|| format!("{} is required", field.label), |r| r.message.clone());
                chain.push_str(&format!(".min(1, {})", message_arg(&message)));
            }
            for rule in &field.validation_rules {
                chain.push_str(&string_rule(rule));
            }
            chain
        }
        SemanticType::Number => {
            let mut chain = String::from("z.coerce.number()");
            for rule in &field.validation_rules {
                chain.push_str(&number_rule(rule));
            }
            chain
        }
        SemanticType::Boolean => String::from("z.boolean()"),
        SemanticType::Date => String::from("z.coerce.date()"),
        SemanticType::Any => String::from("z.any()"),
    }
}

fn string_rule(rule: &ValidationRule) -> String {
    let message = message_arg(&rule.message);
    match (rule.kind, rule.number(), rule.pattern()) {
        (RuleKind::MinLength | RuleKind::Min, Some(n), _) => format!(".min({n}, {message})"),
        (RuleKind::MaxLength | RuleKind::Max, Some(n), _) => format!(".max({n}, {message})"),
        (RuleKind::Email, ..) => format!(".email({message})"),
        (RuleKind::Url, ..) => format!(".url({message})"),
        (RuleKind::Regex, _, Some(pattern)) => {
            format!(".regex(new RegExp({}), {message})", js_string(pattern))
        }
        _ => String::new(),
    }
}

fn number_rule(rule: &ValidationRule) -> String {
    let message = message_arg(&rule.message);
    match (rule.kind, rule.number()) {
        (RuleKind::Min, Some(n)) => format!(".min({n}, {message})"),
        (RuleKind::Max, Some(n)) => format!(".max({n}, {message})"),
        _ => String::new(),
    }
}
