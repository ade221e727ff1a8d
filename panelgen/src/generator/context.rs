//! Template contexts
//!
//! Templates only see JSON built here. All naming, route and listing
//! decisions are made once so the templates stay free of logic.

use serde_json::{json, Map, Value};

use super::helpers::TemplateHelpers;
use super::zod::{is_required, zod_chain};
use crate::config::GeneratorSettings;
use crate::model::{Field, ModelConfig, ModelSet, SemanticType, UiWidget};

/// Columns shown when no field is flagged `is_in_listing`
pub const DEFAULT_LISTING_COLUMNS: usize = 7;

/// Rows of mock data rendered into each data table
pub const SAMPLE_ROWS: usize = 13;

fn language_name(code: &str) -> String {
    match code {
        "en" => "English".to_string(),
        "fr" => "Français".to_string(),
        "ar" => "العربية".to_string(),
        "es" => "Español".to_string(),
        "de" => "Deutsch".to_string(),
        other => other.to_uppercase(),
    }
}

fn is_id(field: &Field) -> bool {
    field.field_name.eq_ignore_ascii_case("id")
}

/// Initial form value as a TypeScript expression
fn default_value(field: &Field) -> &'static str {
    if field.ui_widget.is_choice() && field.options.is_some() {
        return "undefined";
    }
    match field.semantic_type {
        SemanticType::String => "\"\"",
        SemanticType::Boolean => "false",
        SemanticType::Number | SemanticType::Date | SemanticType::Any => "undefined",
    }
}

fn sample_value(field: &Field, row: usize) -> Value {
    if let Some(options) = field.options.as_deref().filter(|o| !o.is_empty()) {
        return Value::String(options[(row - 1) % options.len()].clone());
    }
    match field.semantic_type {
        SemanticType::Number => json!(row + 9),
        SemanticType::Boolean => json!(row % 2 == 1),
        SemanticType::Date => json!(format!("2024-01-{:02}", (row - 1) % 28 + 1)),
        SemanticType::Any => Value::Null,
        SemanticType::String => json!(format!("{} {row}", field.label)),
    }
}

/// Context for a single field
#[must_use]
pub fn field_context(field: &Field) -> Value {
    let widget = field.ui_widget;
    let options = field.options.clone().unwrap_or_default();
    json!({
        "name": field.field_name,
        "ident": TemplateHelpers::to_identifier(&field.field_name),
        "label": field.label,
        "placeholder": field.placeholder,
        "description": field.description,
        "data_type": field.data_type,
        "semantic_type": field.semantic_type.as_str(),
        "ts_type": if is_id(field) { "number | string" } else { field.semantic_type.ts_type() },
        "widget": widget.as_str(),
        "zod": zod_chain(field),
        "default_value": default_value(field),
        "required": is_required(field),
        "is_id": is_id(field),
        "is_input": widget == UiWidget::Input,
        "is_number": widget == UiWidget::Input && field.semantic_type == SemanticType::Number,
        "is_textarea": widget == UiWidget::Textarea,
        "is_select": widget == UiWidget::Select,
        "is_checkbox": widget == UiWidget::Checkbox,
        "is_radio": widget == UiWidget::Radio,
        "is_file": widget == UiWidget::File,
        "is_color": widget == UiWidget::Color,
        "is_datepicker": widget == UiWidget::Datepicker,
        "is_switch": widget == UiWidget::Switch,
        "has_options": !options.is_empty(),
        "options": options,
        "sortable": field.sortable,
        "hidden": field.hidden,
        "is_in_listing": field.is_in_listing,
        "is_remove_in_edit_form": field.is_remove_in_edit_form,
    })
}

/// Fields shown as data table columns
///
/// Flagged fields win; without flags the first few non-id fields are used.
#[must_use]
pub fn listing_fields(model: &ModelConfig) -> Vec<&Field> {
    let flagged: Vec<&Field> = model
        .fields
        .iter()
        .filter(|f| f.is_in_listing && !is_id(f))
        .collect();
    if !flagged.is_empty() {
        return flagged;
    }
    model
        .fields
        .iter()
        .filter(|f| !is_id(f))
        .take(DEFAULT_LISTING_COLUMNS)
        .collect()
}

/// Field the data table filters and titles cards by
///
/// A field called `name` wins, then the second field, then the first.
#[must_use]
pub fn primary_field(model: &ModelConfig) -> Option<&Field> {
    model
        .fields
        .iter()
        .find(|f| f.field_name.eq_ignore_ascii_case("name"))
        .or_else(|| model.fields.get(1))
        .or_else(|| model.fields.first())
}

/// Mock rows for the data table; every row has an `id`
fn sample_rows(model: &ModelConfig) -> Vec<Value> {
    (1..=SAMPLE_ROWS)
        .map(|row| {
            let mut values = Map::new();
            values.insert("id".to_string(), json!(row));
            for field in model.fields.iter().filter(|f| !is_id(f)) {
                values.insert(
                    TemplateHelpers::to_identifier(&field.field_name),
                    sample_value(field, row),
                );
            }
            Value::Object(values)
        })
        .collect()
}

/// Names and routes shared by model summaries and model contexts
fn model_names(model: &ModelConfig) -> Value {
    let component_name = TemplateHelpers::to_pascal_case(&model.name);
    let record_path = TemplateHelpers::to_record_path(&model.name);
    let create_path = (!model.is_popup).then(|| format!("{record_path}/create"));
    let edit_path = (!model.is_popup).then(|| format!("{record_path}/edit"));

    json!({
        "model_name": model.name,
        "component_name": component_name,
        "model_snake": TemplateHelpers::to_snake_case(&model.name),
        "model_camel": TemplateHelpers::to_camel_case(&model.name),
        "model_plural_camel": TemplateHelpers::to_camel_case(&TemplateHelpers::pluralize(&model.name)),
        "title": TemplateHelpers::to_title(&model.name),
        "plural_title": TemplateHelpers::to_plural_title(&model.name),
        "list_path": TemplateHelpers::to_route_path(&model.name),
        "api_path": TemplateHelpers::to_route_path(&model.name),
        "create_path": create_path,
        "edit_path": edit_path,
        "is_popup": model.is_popup,
        "icon": TemplateHelpers::icon_for_model(&model.name),
        "slice_name": TemplateHelpers::to_camel_case(&model.name),
    })
}

fn merge(target: &mut Value, extra: Value) {
    if let (Value::Object(target), Value::Object(extra)) = (target, extra) {
        target.extend(extra);
    }
}

/// Context for one model's artifacts
#[must_use]
pub fn model_context(model: &ModelConfig, models: &ModelSet, settings: &GeneratorSettings) -> Value {
    let fields: Vec<Value> = model.fields.iter().map(field_context).collect();
    let form_fields: Vec<Value> = model
        .fields
        .iter()
        .filter(|f| !f.hidden && !is_id(f))
        .map(field_context)
        .collect();
    let create_only: Vec<String> = model
        .fields
        .iter()
        .filter(|f| !f.hidden && !is_id(f) && f.is_remove_in_edit_form)
        .map(|f| TemplateHelpers::to_identifier(&f.field_name))
        .collect();
    let listing: Vec<Value> = listing_fields(model).into_iter().map(field_context).collect();
    let primary = primary_field(model).map(field_context);
    let has_id = model.fields.iter().any(is_id);

    let mut context = model_names(model);
    merge(
        &mut context,
        json!({
            "project_name": settings.project_name,
            "fields": fields,
            "form_fields": form_fields,
            "create_only_fields": create_only,
            "listing_fields": listing,
            "primary_field": primary,
            "has_id": has_id,
            "has_options": model.fields.iter().any(|f| f.options.is_some()),
            "has_file": model.fields.iter().any(|f| f.ui_widget == UiWidget::File),
            "sample_rows": sample_rows(model),
            "all_models": models.values().map(model_names).collect::<Vec<_>>(),
        }),
    );
    context
}

fn nav_items(models: &ModelSet) -> Value {
    let mut items = vec![json!({ "label": "Dashboard", "href": "/", "icon": "Home" })];
    for model in models.values() {
        let title = TemplateHelpers::to_title(&model.name);
        let mut children = vec![json!({
            "label": format!("All {}", TemplateHelpers::to_plural_title(&model.name)),
            "href": TemplateHelpers::to_route_path(&model.name),
        })];
        if !model.is_popup {
            children.push(json!({
                "label": format!("Create {title}"),
                "href": format!("{}/create", TemplateHelpers::to_record_path(&model.name)),
            }));
        }
        items.push(json!({
            "label": title,
            "icon": TemplateHelpers::icon_for_model(&model.name),
            "children": children,
        }));
    }
    Value::Array(items)
}

fn dashboard_items(models: &ModelSet) -> Value {
    models
        .values()
        .map(|model| {
            json!({
                "label": TemplateHelpers::to_plural_title(&model.name),
                "href": TemplateHelpers::to_route_path(&model.name),
                "icon": TemplateHelpers::icon_for_model(&model.name),
            })
        })
        .collect()
}

/// Context for global artifacts
#[must_use]
pub fn global_context(models: &ModelSet, settings: &GeneratorSettings) -> Value {
    let languages: Vec<Value> = settings
        .languages
        .iter()
        .map(|code| {
            json!({
                "code": code,
                "name": language_name(code),
                "rtl": settings.is_rtl(code),
                "ident": TemplateHelpers::to_identifier(code),
            })
        })
        .collect();

    json!({
        "project_name": settings.project_name,
        "default_language": settings.default_language,
        "languages": languages,
        "rtl_languages": settings.rtl_languages,
        "models": models.values().map(model_names).collect::<Vec<_>>(),
        "nav_items": nav_items(models),
        "dashboard_items": dashboard_items(models),
        "icons": TemplateHelpers::all_icons(),
    })
}

/// Translation resources for one language
///
/// Every language starts from the English strings; per-model labels are
/// keyed by field identifier, so a repeated field name keeps its last label.
#[must_use]
pub fn translations(models: &ModelSet, settings: &GeneratorSettings) -> Value {
    let mut model_entries = Map::new();
    for model in models.values() {
        let mut fields = Map::new();
        for field in &model.fields {
            fields.insert(
                TemplateHelpers::to_identifier(&field.field_name),
                Value::String(field.label.clone()),
            );
        }
        model_entries.insert(
            TemplateHelpers::to_camel_case(&model.name),
            json!({
                "title": TemplateHelpers::to_title(&model.name),
                "plural": TemplateHelpers::to_plural_title(&model.name),
                "fields": fields,
            }),
        );
    }

    json!({
        "common": {
            "appName": settings.project_name,
            "save": "Save Changes",
            "cancel": "Cancel",
            "create": "New",
            "edit": "Edit",
            "delete": "Delete",
            "view": "View",
            "actions": "Actions",
            "noResults": "No results.",
            "logout": "Log out",
        },
        "sidebar": { "dashboard": "Dashboard" },
        "table": {
            "filter": "Filter...",
            "recordsPerPage": "Records per page",
            "import": "Import",
            "export": "Export",
        },
        "form": { "selectOption": "Select an option" },
        "login": {
            "title": "Login",
            "description": "Enter your credentials to access the dashboard.",
            "usernameLabel": "Username",
            "passwordLabel": "Password",
            "signInButton": "Sign in",
        },
        "models": model_entries,
    })
}

/// Context for one per-language artifact
#[must_use]
pub fn language_context(lang: &str, models: &ModelSet, settings: &GeneratorSettings) -> Value {
    json!({
        "lang": lang,
        "rtl": settings.is_rtl(lang),
        "translations": translations(models, settings),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{normalize_row, NormalizeOptions};
    use crate::sheet::RawRow;

    fn field(name: &str, widget: &str) -> Field {
        let row = RawRow {
            column: Some(name.to_string()),
            ui_component: Some(widget.to_string()),
            ..RawRow::default()
        };
        normalize_row(&row, &NormalizeOptions::default()).unwrap()
    }

    fn model(name: &str, fields: Vec<Field>) -> ModelConfig {
        ModelConfig {
            name: name.to_string(),
            sheet_name: name.to_string(),
            fields,
            is_popup: false,
            no_crud: false,
        }
    }

    #[test]
    fn test_primary_field_prefers_name() {
        let m = model("User", vec![field("id", ""), field("email", ""), field("name", "")]);
        assert_eq!(primary_field(&m).unwrap().field_name, "name");

        let m = model("Tag", vec![field("id", ""), field("label", "")]);
        assert_eq!(primary_field(&m).unwrap().field_name, "label");

        let m = model("Single", vec![field("title", "")]);
        assert_eq!(primary_field(&m).unwrap().field_name, "title");
    }

    #[test]
    fn test_listing_defaults_to_first_seven() {
        let mut fields = vec![field("id", "")];
        fields.extend((0..10).map(|i| field(&format!("col{i}"), "")));
        let m = model("Wide", fields);

        let names: Vec<_> = listing_fields(&m).iter().map(|f| f.field_name.clone()).collect();
        assert_eq!(names.len(), DEFAULT_LISTING_COLUMNS);
        assert_eq!(names[0], "col0");
    }

    #[test]
    fn test_listing_uses_flags() {
        let mut flagged = field("email", "");
        flagged.is_in_listing = true;
        let m = model("User", vec![field("name", ""), flagged]);

        let names: Vec<_> = listing_fields(&m).iter().map(|f| f.field_name.clone()).collect();
        assert_eq!(names, vec!["email"]);
    }

    #[test]
    fn test_popup_model_has_no_form_routes() {
        let mut m = model("Brand", vec![field("name", "")]);
        m.is_popup = true;
        let mut models = ModelSet::new();
        models.insert(m.name.clone(), m.clone());

        let ctx = model_context(&m, &models, &GeneratorSettings::default());
        assert_eq!(ctx["list_path"], "/brands");
        assert!(ctx["create_path"].is_null());

        let nav = nav_items(&models);
        assert_eq!(nav[1]["children"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_sample_rows_sanitize_keys() {
        let m = model("Product", vec![field("unit price", ""), field("status", "select")]);
        let rows = sample_rows(&m);
        assert_eq!(rows.len(), SAMPLE_ROWS);
        assert_eq!(rows[0]["id"], 1);
        assert_eq!(rows[0]["unit_price"], "Unit Price 1");
    }

    #[test]
    fn test_translations_last_label_wins() {
        let mut second = field("name", "");
        second.label = "Full Name".to_string();
        let m = model("User", vec![field("name", ""), second]);
        let mut models = ModelSet::new();
        models.insert(m.name.clone(), m);

        let t = translations(&models, &GeneratorSettings::default());
        assert_eq!(t["models"]["user"]["fields"]["name"], "Full Name");
        assert_eq!(t["models"]["user"]["plural"], "Users");
    }

    #[test]
    fn test_global_context_languages() {
        let ctx = global_context(&ModelSet::new(), &GeneratorSettings::default());
        assert_eq!(ctx["languages"][2]["code"], "ar");
        assert_eq!(ctx["languages"][2]["rtl"], true);
        assert_eq!(ctx["nav_items"][0]["label"], "Dashboard");
    }
}
