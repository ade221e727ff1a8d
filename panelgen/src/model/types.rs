//! Normalized model types consumed by every generator

use std::fmt;

use serde::{Deserialize, Serialize};

/// Client-side value type, used to pick zod schemas and TypeScript types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    /// Free text
    String,
    /// Integer or decimal number
    Number,
    /// True/false
    Boolean,
    /// Date or timestamp
    Date,
    /// Opaque value, used for file uploads
    Any,
}

impl SemanticType {
    /// Get the lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Any => "any",
        }
    }

    /// TypeScript type used for list rows and form values
    ///
    /// Dates travel as ISO strings.
    #[must_use]
    pub const fn ts_type(self) -> &'static str {
        match self {
            Self::String | Self::Date => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input control kind rendered for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiWidget {
    /// Single-line text input
    Input,
    /// Multi-line text area or rich text editor
    Textarea,
    /// Dropdown
    Select,
    /// Checkbox
    Checkbox,
    /// Radio group
    Radio,
    /// File picker
    File,
    /// Color picker
    Color,
    /// Date picker
    Datepicker,
    /// Toggle switch
    Switch,
}

impl UiWidget {
    /// Map a raw `ui_component` cell to a widget
    ///
    /// Unrecognized values map to [`UiWidget::Input`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use panelgen::model::UiWidget;
    /// assert_eq!(UiWidget::from_component("dropdown"), UiWidget::Select);
    /// assert_eq!(UiWidget::from_component(" TinyMCE "), UiWidget::Textarea);
    /// assert_eq!(UiWidget::from_component("text"), UiWidget::Input);
    /// ```
    #[must_use]
    pub fn from_component(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "dropdown" | "select" => Self::Select,
            "radio" => Self::Radio,
            "switch" => Self::Switch,
            "checkbox" => Self::Checkbox,
            "file_upload" | "file" => Self::File,
            "tinymce" | "textarea" => Self::Textarea,
            "color_picker" | "color" => Self::Color,
            "datepicker" | "date_picker" => Self::Datepicker,
            _ => Self::Input,
        }
    }

    /// Get the lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::File => "file",
            Self::Color => "color",
            Self::Datepicker => "datepicker",
            Self::Switch => "switch",
        }
    }

    /// Whether the widget offers a fixed set of choices
    #[must_use]
    pub const fn is_choice(self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }
}

impl fmt::Display for UiWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value attached to a validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// Length or bound
    Number(u64),
    /// Regular expression source
    Pattern(String),
}

/// Kind of a validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    /// Value must be present
    Required,
    /// Minimum string length
    MinLength,
    /// Maximum string length
    MaxLength,
    /// Minimum numeric value or length
    Min,
    /// Maximum numeric value or length
    Max,
    /// Email address
    Email,
    /// URL
    Url,
    /// Custom regular expression
    Regex,
    /// Server-side uniqueness
    Unique,
    /// Server-side format check
    Format,
}

impl RuleKind {
    /// Get the camelCase name used in generated code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Min => "min",
            Self::Max => "max",
            Self::Email => "email",
            Self::Url => "url",
            Self::Regex => "regex",
            Self::Unique => "unique",
            Self::Format => "format",
        }
    }
}

/// One validation rule extracted from a `validation_rule` cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    /// Rule kind
    #[serde(rename = "type")]
    pub kind: RuleKind,
    /// Bound or pattern, when the rule carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<RuleValue>,
    /// User-facing error message
    pub message: String,
}

impl ValidationRule {
    /// Numeric value, if any
    #[must_use]
    pub const fn number(&self) -> Option<u64> {
        match self.value {
            Some(RuleValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// Pattern value, if any
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match &self.value {
            Some(RuleValue::Pattern(p)) => Some(p),
            _ => None,
        }
    }
}

/// One form field derived from one spreadsheet row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Identifier from the `column` cell
    pub field_name: String,
    /// Human-readable label
    pub label: String,
    /// Lower-cased database type, informational
    pub data_type: String,
    /// Client-side value type
    #[serde(rename = "zodType")]
    pub semantic_type: SemanticType,
    /// Input control kind
    #[serde(rename = "uiType")]
    pub ui_widget: UiWidget,
    /// `is_null = N`
    pub required: bool,
    /// Choices parsed from `key => value` comments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Comments that did not carry options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Input placeholder
    pub placeholder: String,
    /// Rules in pattern-table order
    pub validation_rules: Vec<ValidationRule>,
    /// Column can be sorted in the data table
    pub sortable: bool,
    /// Field is not shown in forms
    pub hidden: bool,
    /// Column appears in the data table
    pub is_in_listing: bool,
    /// Field is left out of the edit form
    pub is_remove_in_edit_form: bool,
}

impl Field {
    /// Whether the rules contain the given kind
    #[must_use]
    pub fn has_rule(&self, kind: RuleKind) -> bool {
        self.validation_rules.iter().any(|r| r.kind == kind)
    }
}

/// One spreadsheet sheet turned into a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    /// Display name (`B1` or sheet name)
    pub name: String,
    /// Source sheet name
    pub sheet_name: String,
    /// Fields in row order
    pub fields: Vec<Field>,
    /// Create and edit open in a dialog instead of their own routes
    pub is_popup: bool,
    /// Always false for models that reach the generator; kept for reporting
    pub no_crud: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_table() {
        let cases = [
            ("dropdown", UiWidget::Select),
            ("radio", UiWidget::Radio),
            ("switch", UiWidget::Switch),
            ("checkbox", UiWidget::Checkbox),
            ("file_upload", UiWidget::File),
            ("tinymce", UiWidget::Textarea),
            ("textarea", UiWidget::Textarea),
            ("color_picker", UiWidget::Color),
            ("datepicker", UiWidget::Datepicker),
            ("date_picker", UiWidget::Datepicker),
            ("text", UiWidget::Input),
            ("", UiWidget::Input),
            ("slider", UiWidget::Input),
        ];
        for (raw, expected) in cases {
            assert_eq!(UiWidget::from_component(raw), expected, "component {raw:?}");
        }
    }

    #[test]
    fn test_field_serializes_with_js_names() {
        let field = Field {
            field_name: "name".to_string(),
            label: "Name".to_string(),
            data_type: "varchar".to_string(),
            semantic_type: SemanticType::String,
            ui_widget: UiWidget::Input,
            required: true,
            options: None,
            description: None,
            placeholder: "Enter Name...".to_string(),
            validation_rules: vec![ValidationRule {
                kind: RuleKind::MinLength,
                value: Some(RuleValue::Number(3)),
                message: "Name must be at least 3 characters".to_string(),
            }],
            sortable: false,
            hidden: false,
            is_in_listing: true,
            is_remove_in_edit_form: false,
        };

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["fieldName"], "name");
        assert_eq!(json["zodType"], "string");
        assert_eq!(json["uiType"], "input");
        assert_eq!(json["validationRules"][0]["type"], "minLength");
        assert_eq!(json["validationRules"][0]["value"], 3);
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_ts_types() {
        assert_eq!(SemanticType::Date.ts_type(), "string");
        assert_eq!(SemanticType::Number.ts_type(), "number");
        assert_eq!(SemanticType::Any.to_string(), "any");
    }
}
