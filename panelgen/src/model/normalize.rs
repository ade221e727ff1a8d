//! Row and sheet normalization
//!
//! All interpretation of raw cell text happens here, once. Per-row anomalies
//! never fail: a row without a `column` is dropped and unknown widgets fall
//! back to a text input.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::extract_validation_rules;
use super::types::{Field, ModelConfig, SemanticType, UiWidget};
use crate::config::{GeneratorSettings, MissingWidgetPolicy};
use crate::sheet::{RawRow, RawSheet};

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([a-z])([A-Z])").expect("Invalid camel boundary pattern"));

static OPTION_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"=>\s*['"]?([^,'"]+)['"]?"#).expect("Invalid option pattern")
});

/// Knobs that change how rows become fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Policy for rows with an empty `ui_component`
    pub missing_widget: MissingWidgetPolicy,
}

impl From<&GeneratorSettings> for NormalizeOptions {
    fn from(settings: &GeneratorSettings) -> Self {
        Self {
            missing_widget: settings.missing_widget,
        }
    }
}

/// Human-readable label for a field name
///
/// A trailing `_id` is dropped, then the name is split on underscores and
/// camelCase boundaries and every word is capitalized.
///
/// # Examples
///
/// ```
/// # use panelgen::model::create_label;
/// assert_eq!(create_label("first_name"), "First Name");
/// assert_eq!(create_label("role_id"), "Role");
/// assert_eq!(create_label("createdAt"), "Created At");
/// ```
#[must_use]
pub fn create_label(field_name: &str) -> String {
    let base = match field_name.strip_suffix("_id") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => field_name,
    };

    let spaced = CAMEL_BOUNDARY.replace_all(&base.replace('_', " "), "$1 $2").into_owned();
    spaced
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Parse `key => value` pairs from a comments cell into option values
///
/// Returns `None` when the text has no `=>` or no value could be captured.
///
/// # Examples
///
/// ```
/// # use panelgen::model::parse_options_from_comments;
/// assert_eq!(
///     parse_options_from_comments("Y => Active, N => Inactive"),
///     Some(vec!["Active".to_string(), "Inactive".to_string()])
/// );
/// assert_eq!(parse_options_from_comments("Shown on the profile page"), None);
/// ```
#[must_use]
pub fn parse_options_from_comments(comment: &str) -> Option<Vec<String>> {
    if !comment.contains("=>") {
        return None;
    }

    let options: Vec<String> = OPTION_VALUE
        .captures_iter(comment)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect();

    (!options.is_empty()).then_some(options)
}

/// Infer the client-side type from the database type and widget
///
/// Precedence: numeric database types, then boolean widgets, then dates,
/// then file uploads, then plain strings. Widgets can turn a column into a
/// boolean or date but never override a numeric type.
#[must_use]
pub fn infer_semantic_type(data_type: &str, widget: UiWidget) -> SemanticType {
    let data_type = data_type.trim().to_lowercase();

    if ["int", "decimal", "double"].iter().any(|t| data_type.contains(t)) {
        SemanticType::Number
    } else if matches!(widget, UiWidget::Switch | UiWidget::Checkbox) {
        SemanticType::Boolean
    } else if matches!(data_type.as_str(), "date" | "datetime" | "timestamp" | "time")
        || widget == UiWidget::Datepicker
    {
        SemanticType::Date
    } else if widget == UiWidget::File {
        SemanticType::Any
    } else {
        SemanticType::String
    }
}

fn is_flag(value: Option<&str>, expected: &str) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case(expected))
}

fn trimmed(value: Option<&String>) -> &str {
    value.map_or("", |v| v.trim())
}

/// Convert one raw row into a field
///
/// Returns `None` when the row has no `column` value, or when it has no
/// `ui_component` and the policy is [`MissingWidgetPolicy::Omit`].
#[must_use]
pub fn normalize_row(row: &RawRow, options: &NormalizeOptions) -> Option<Field> {
    let field_name = trimmed(row.column.as_ref());
    if field_name.is_empty() {
        return None;
    }

    let component = trimmed(row.ui_component.as_ref());
    if component.is_empty() && options.missing_widget == MissingWidgetPolicy::Omit {
        tracing::debug!(field = field_name, "Omitting field without ui_component");
        return None;
    }

    let ui_widget = UiWidget::from_component(component);
    let data_type = trimmed(row.data_type.as_ref()).to_lowercase();
    let semantic_type = infer_semantic_type(&data_type, ui_widget);
    let label = create_label(field_name);

    let comments = trimmed(row.comments.as_ref());
    let parsed_options = parse_options_from_comments(comments);
    let description = (parsed_options.is_none() && !comments.is_empty()).then(|| comments.to_string());

    let validation_rules = extract_validation_rules(trimmed(row.validation_rule.as_ref()), &label);

    Some(Field {
        field_name: field_name.to_string(),
        placeholder: format!("Enter {label}..."),
        label,
        data_type,
        semantic_type,
        ui_widget,
        required: is_flag(row.is_null.as_deref(), "N"),
        options: parsed_options,
        description,
        validation_rules,
        sortable: is_flag(row.sortable.as_deref(), "Y"),
        hidden: is_flag(row.hidden.as_deref(), "Y"),
        is_in_listing: is_flag(row.is_in_listing.as_deref(), "Y"),
        is_remove_in_edit_form: is_flag(row.is_remove_in_edit_form.as_deref(), "Y"),
    })
}

/// Assemble a model from a loaded sheet
///
/// Returns `None`, with a warning, when no row produced a field.
#[must_use]
pub fn build_model(sheet: &RawSheet, options: &NormalizeOptions) -> Option<ModelConfig> {
    let fields: Vec<Field> = sheet
        .rows
        .iter()
        .filter_map(|row| normalize_row(row, options))
        .collect();

    if fields.is_empty() {
        tracing::warn!(
            model = %sheet.display_name,
            "No valid 'column' values found. No form will be generated for this model."
        );
        return None;
    }

    tracing::info!(
        model = %sheet.display_name,
        fields = fields.len(),
        is_popup = sheet.flags.is_popup,
        "Parsed model"
    );

    Some(ModelConfig {
        name: sheet.display_name.clone(),
        sheet_name: sheet.sheet_name.clone(),
        fields,
        is_popup: sheet.flags.is_popup,
        no_crud: sheet.flags.no_crud,
    })
}
