//! Field/model normalization
//!
//! Turns [`RawSheet`]s into the [`ModelSet`] every generator reads from.
//! [`parse_workbook`] runs the loader and normalizer together.

mod normalize;
mod rules;
mod types;

use std::path::Path;

use indexmap::IndexMap;

use crate::error::Result;
use crate::generator::TemplateHelpers;
use crate::sheet::{self, RawSheet};

pub use normalize::{
    build_model, create_label, infer_semantic_type, normalize_row, parse_options_from_comments,
    NormalizeOptions,
};
pub use rules::extract_validation_rules;
pub use types::{Field, ModelConfig, RuleKind, RuleValue, SemanticType, UiWidget, ValidationRule};

/// Models keyed by display name, in workbook sheet order
pub type ModelSet = IndexMap<String, ModelConfig>;

/// Normalize loaded sheets into a model set
///
/// Models are identified by their component name, since every output path
/// is derived from it. A later sheet whose name converts to the same
/// component name replaces the earlier model but keeps its position. Models
/// whose name has no usable characters are skipped.
#[must_use]
pub fn build_model_set(sheets: &[RawSheet], options: &NormalizeOptions) -> ModelSet {
    let mut models = ModelSet::new();
    for sheet in sheets {
        let Some(model) = build_model(sheet, options) else {
            continue;
        };

        let component = TemplateHelpers::to_pascal_case(&model.name);
        if component.is_empty() {
            tracing::warn!(
                model = %model.name,
                sheet = %sheet.sheet_name,
                "Model name has no letters or digits; sheet skipped"
            );
            continue;
        }

        let clash = models
            .keys()
            .position(|name| TemplateHelpers::to_pascal_case(name) == component);
        let Some((index, (_, previous))) =
            clash.and_then(|index| Some((index, models.shift_remove_index(index)?)))
        else {
            models.insert(model.name.clone(), model);
            continue;
        };

        tracing::warn!(
            model = %model.name,
            component = %component,
            replaced_model = %previous.name,
            replaced_sheet = %previous.sheet_name,
            sheet = %sheet.sheet_name,
            "Duplicate model name; later sheet wins"
        );
        models.shift_insert(index, model.name.clone(), model);
    }
    models
}

/// Parse a workbook into models
///
/// # Errors
///
/// Returns an error if the workbook does not exist or cannot be read. An
/// empty result is not an error here; callers decide what zero models mean.
pub fn parse_workbook(path: &Path, options: &NormalizeOptions) -> Result<ModelSet> {
    let sheets = sheet::load_workbook(path)?;
    let models = build_model_set(&sheets, options);
    tracing::info!(
        models = models.len(),
        names = %models.keys().cloned().collect::<Vec<_>>().join(", "),
        "Workbook parsed"
    );
    Ok(models)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{RawRow, SheetFlags};

    fn sheet(sheet_name: &str, display_name: &str, columns: &[&str]) -> RawSheet {
        RawSheet {
            sheet_name: sheet_name.to_string(),
            display_name: display_name.to_string(),
            flags: SheetFlags::default(),
            rows: columns
                .iter()
                .map(|c| RawRow {
                    column: Some((*c).to_string()),
                    ..RawRow::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_model_set_keeps_sheet_order() {
        let sheets = vec![
            sheet("s1", "Product", &["title"]),
            sheet("s2", "Category", &["name"]),
            sheet("s3", "Brand", &["label"]),
        ];
        let models = build_model_set(&sheets, &NormalizeOptions::default());
        let names: Vec<_> = models.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Product", "Category", "Brand"]);
    }

    #[test]
    fn test_duplicate_name_later_wins_in_place() {
        let sheets = vec![
            sheet("s1", "User", &["name"]),
            sheet("s2", "Role", &["title"]),
            sheet("s3", "User", &["email", "phone"]),
        ];
        let models = build_model_set(&sheets, &NormalizeOptions::default());
        assert_eq!(models.len(), 2);
        assert_eq!(models.get_index(0).unwrap().0, "User");
        assert_eq!(models["User"].sheet_name, "s3");
        assert_eq!(models["User"].fields.len(), 2);
    }

    #[test]
    fn test_same_component_name_later_wins_in_place() {
        let sheets = vec![
            sheet("s1", "Order Item", &["sku"]),
            sheet("s2", "Customer", &["name"]),
            sheet("s3", "order_item", &["sku", "quantity"]),
        ];
        let models = build_model_set(&sheets, &NormalizeOptions::default());
        let names: Vec<_> = models.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["order_item", "Customer"]);
        assert_eq!(models["order_item"].sheet_name, "s3");
        assert_eq!(models["order_item"].fields.len(), 2);
    }

    #[test]
    fn test_unnameable_model_skipped() {
        let sheets = vec![sheet("s1", "!!!", &["title"]), sheet("s2", "Tag", &["name"])];
        let models = build_model_set(&sheets, &NormalizeOptions::default());
        let names: Vec<_> = models.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Tag"]);
    }

    #[test]
    fn test_empty_models_dropped() {
        let sheets = vec![sheet("s1", "Blank", &["", " "]), sheet("s2", "Tag", &["name"])];
        let models = build_model_set(&sheets, &NormalizeOptions::default());
        assert!(!models.contains_key("Blank"));
        assert!(models.contains_key("Tag"));
    }
}
