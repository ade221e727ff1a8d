//! Full workbook-to-tree generation

mod common;

use std::fs;
use std::path::Path;

use common::{shop_workbook, user_sheet, write_workbook, SheetFixture, USER_HEADERS};
use panelgen::config::PanelgenConfig;
use panelgen::pipeline::{generate_from_workbook, generate_models};
use panelgen::templates::BUILTIN_TEMPLATES;
use panelgen::{model::ModelSet, Error};
use tempfile::TempDir;

fn config_for(output: &Path) -> PanelgenConfig {
    let mut config = PanelgenConfig::default();
    config.generator.output_dir = output.to_path_buf();
    config.generator.project_name = "Shop Admin".to_string();
    config
}

fn read(root: &Path, path: &str) -> String {
    fs::read_to_string(root.join(path))
        .unwrap_or_else(|e| panic!("{path} should have been generated: {e}"))
}

#[test]
fn test_output_layout() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let workbook = shop_workbook(input.path());

    let report = generate_from_workbook(&workbook, &config_for(output.path())).unwrap();

    assert_eq!(report.models, vec!["User", "Brand"]);
    assert_eq!(report.output_dir, output.path());
    // 4 per model, 18 global, 1 per language
    assert_eq!(report.files.len(), 4 * 2 + 18 + 3);

    for path in [
        "src/pages/User/UserDataTable.tsx",
        "src/pages/Brand/BrandDataTable.tsx",
        "src/components/forms/User/UserForm.tsx",
        "src/components/forms/User/UserSchema.ts",
        "src/store/slices/userSlice.ts",
        "src/store/slices/brandSlice.ts",
        "src/routes/routes.tsx",
        "src/layout/Sidebar.tsx",
        "src/i18n/index.ts",
        "src/i18n/locales/en/translation.json",
        "src/i18n/locales/fr/translation.json",
        "src/i18n/locales/ar/translation.json",
        ".env.example",
        "src/main.tsx",
    ] {
        assert!(output.path().join(path).is_file(), "missing {path}");
    }
    assert!(report.files.iter().all(|f| f.starts_with(output.path())));
}

#[test]
fn test_models_sharing_a_component_name_write_once() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let first = SheetFixture::new("items")
        .title("Order Item")
        .headers(USER_HEADERS)
        .row(&["sku", "varchar", "text", "N", ""]);
    let second = SheetFixture::new("items_v2")
        .title("order_item")
        .headers(USER_HEADERS)
        .row(&["sku", "varchar", "text", "N", ""])
        .row(&["quantity", "int", "text", "", ""]);
    let workbook = write_workbook(input.path(), "orders.xlsx", &[first, second]);

    let report = generate_from_workbook(&workbook, &config_for(output.path())).unwrap();

    assert_eq!(report.models, vec!["order_item"]);
    assert_eq!(report.files.len(), 4 + 18 + 3);

    let schema = read(output.path(), "src/components/forms/OrderItem/OrderItemSchema.ts");
    assert!(schema.contains("quantity:"));

    let store = read(output.path(), "src/store/store.ts");
    assert_eq!(store.matches("orderItem: orderItemReducer").count(), 1);
}

#[test]
fn test_popup_model_has_no_record_routes() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let workbook = shop_workbook(input.path());

    generate_from_workbook(&workbook, &config_for(output.path())).unwrap();

    let routes = read(output.path(), "src/routes/routes.tsx");
    assert!(routes.contains(r#"{ path: "/users", element: <UserDataTable /> },"#));
    assert!(routes.contains(r#"{ path: "/user/create", element: <UserForm /> },"#));
    assert!(routes.contains(r#"{ path: "/user/edit/:id", element: <UserForm /> },"#));
    assert!(routes.contains(r#"{ path: "/brands", element: <BrandDataTable /> },"#));
    assert!(!routes.contains("/brand/create"));
    assert!(!routes.contains("/brand/edit"));

    let table = read(output.path(), "src/pages/Brand/BrandDataTable.tsx");
    assert!(table.contains("<BrandForm"));
}

#[test]
fn test_form_respects_field_flags() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let workbook = shop_workbook(input.path());

    generate_from_workbook(&workbook, &config_for(output.path())).unwrap();

    let form = read(output.path(), "src/components/forms/User/UserForm.tsx");
    assert!(!form.contains(r#"name="id""#));
    assert!(form.contains(r#"name="first_name""#));
    assert!(form.contains("<Switch"));
    assert!(form.contains("<Textarea"));
    assert!(form.contains("!isEdit &&"));

    let schema = read(output.path(), "src/components/forms/User/UserSchema.ts");
    assert!(schema.contains(".email("));
    assert!(schema.contains(r#"z.enum(["Active", "Inactive"])"#));
}

#[test]
fn test_create_only_fields_relaxed_in_edit_schema() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let workbook = shop_workbook(input.path());

    generate_from_workbook(&workbook, &config_for(output.path())).unwrap();

    let schema = read(output.path(), "src/components/forms/User/UserSchema.ts");
    assert!(schema.contains(r#"password: z.string().min(1, { message: "Password is required" })"#));
    assert!(schema.contains(
        "export const userEditSchema = userSchema.partial({\n  password: true,\n});"
    ));

    let form = read(output.path(), "src/components/forms/User/UserForm.tsx");
    assert!(form.contains("isEdit ? userEditSchema : userSchema"));

    let brand = read(output.path(), "src/components/forms/Brand/BrandSchema.ts");
    assert!(brand.contains("export const brandEditSchema = brandSchema;"));
}

#[test]
fn test_translations_carry_labels() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let workbook = shop_workbook(input.path());

    generate_from_workbook(&workbook, &config_for(output.path())).unwrap();

    let raw = read(output.path(), "src/i18n/locales/fr/translation.json");
    let translations: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(translations["common"]["appName"], "Shop Admin");
    assert_eq!(translations["models"]["user"]["fields"]["first_name"], "First Name");
    assert_eq!(translations["models"]["brand"]["plural"], "Brands");

    let i18n = read(output.path(), "src/i18n/index.ts");
    assert!(i18n.contains(r#"const rtlLanguages: string[] = ["#));
    assert!(i18n.contains(r#""ar""#));
}

#[test]
fn test_template_override_replaces_builtin() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let overrides = TempDir::new().unwrap();
    fs::write(
        overrides.path().join("model_form.hbs"),
        "// custom form for {{model_name}}\n",
    )
    .unwrap();

    let workbook = write_workbook(input.path(), "models.xlsx", &[user_sheet()]);
    let mut config = config_for(output.path());
    config.generator.template_dir = Some(overrides.path().to_path_buf());

    generate_from_workbook(&workbook, &config).unwrap();

    assert_eq!(
        read(output.path(), "src/components/forms/User/UserForm.tsx"),
        "// custom form for User\n"
    );
    // Other artifacts keep the built-in template
    assert!(read(output.path(), "src/pages/User/UserDataTable.tsx").contains("UserDataTable"));
}

#[test]
fn test_empty_model_set_is_rejected() {
    let output = TempDir::new().unwrap();
    let err = generate_models(&ModelSet::new(), &config_for(output.path())).unwrap_err();

    assert!(matches!(err, Error::NoModels));
    assert!(fs::read_dir(output.path()).unwrap().next().is_none());
}

#[test]
fn test_every_builtin_renders() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let workbook = shop_workbook(input.path());

    let report = generate_from_workbook(&workbook, &config_for(output.path())).unwrap();

    for path in &report.files {
        let content = fs::read_to_string(path).unwrap();
        assert!(!content.trim().is_empty(), "{} is empty", path.display());
        assert!(!content.contains("{{"), "{} has unrendered tags", path.display());
    }
    assert!(BUILTIN_TEMPLATES.len() >= 20);
}
