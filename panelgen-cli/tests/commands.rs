//! Command-level tests against temp dirs

use std::fs;
use std::path::{Path, PathBuf};

use panelgen::config::MissingWidgetPolicy;
use panelgen::templates::BUILTIN_TEMPLATES;
use panelgen_cli_lib::commands::templates::{
    customized_templates, export_templates, override_path, template_diff,
};
use panelgen_cli_lib::{GenerateCommand, InspectCommand, ServeCommand};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

fn product_workbook(dir: &Path) -> PathBuf {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("products").unwrap();
    sheet.write_string(0, 1, "Product").unwrap();
    for (col, header) in ["column", "type", "ui_component", "is_null"].iter().enumerate() {
        sheet.write_string(1, u16::try_from(col).unwrap(), *header).unwrap();
    }
    sheet.write_string(2, 0, "id").unwrap();
    sheet.write_string(2, 1, "bigint").unwrap();
    sheet.write_string(3, 0, "title").unwrap();
    sheet.write_string(3, 1, "varchar").unwrap();
    sheet.write_string(3, 2, "text").unwrap();
    sheet.write_string(3, 3, "N").unwrap();
    sheet.write_string(4, 0, "price").unwrap();
    sheet.write_string(4, 1, "decimal(8,2)").unwrap();
    sheet.write_string(4, 2, "text").unwrap();

    let path = dir.join("products.xlsx");
    workbook.save(&path).unwrap();
    path
}

/// A config path that does not exist, so only defaults apply
fn no_config(dir: &Path) -> Option<PathBuf> {
    Some(dir.join("absent.toml"))
}

#[test]
fn test_generate_writes_tree() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let cmd = GenerateCommand {
        file: product_workbook(input.path()),
        output: Some(output.path().to_path_buf()),
        config: no_config(input.path()),
        omit_missing_widget: false,
        yes: true,
    };
    let report = cmd.run().unwrap();

    assert_eq!(report.models, vec!["Product"]);
    assert!(output.path().join("src/pages/Product/ProductDataTable.tsx").is_file());
    assert!(output.path().join("src/store/slices/productSlice.ts").is_file());
}

#[test]
fn test_generate_without_models_writes_nothing() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "no_crud").unwrap();
    sheet.write_string(1, 0, "column").unwrap();
    sheet.write_string(2, 0, "code").unwrap();
    let file = input.path().join("lookup.xlsx");
    workbook.save(&file).unwrap();

    let cmd = GenerateCommand {
        file,
        output: Some(output.path().to_path_buf()),
        config: no_config(input.path()),
        omit_missing_widget: false,
        yes: true,
    };
    let err = cmd.run().unwrap_err();

    assert!(err.to_string().starts_with("No models found in"));
    assert!(fs::read_dir(output.path()).unwrap().next().is_none());
}

#[test]
fn test_generate_applies_flags_to_config() {
    let input = TempDir::new().unwrap();
    let cmd = GenerateCommand {
        file: input.path().join("models.xlsx"),
        output: Some(PathBuf::from("out/panel")),
        config: no_config(input.path()),
        omit_missing_widget: true,
        yes: false,
    };

    let config = cmd.resolve_config().unwrap();
    assert_eq!(config.generator.output_dir, PathBuf::from("out/panel"));
    assert_eq!(config.generator.missing_widget, MissingWidgetPolicy::Omit);
}

#[test]
fn test_generate_reports_missing_workbook() {
    let input = TempDir::new().unwrap();
    let cmd = GenerateCommand {
        file: input.path().join("missing.xlsx"),
        output: Some(input.path().join("out")),
        config: no_config(input.path()),
        omit_missing_widget: false,
        yes: true,
    };

    let err = cmd.run().unwrap_err();
    assert!(format!("{err:#}").contains("File not found"));
}

#[test]
fn test_inspect_honors_omit_flag() {
    let input = TempDir::new().unwrap();
    let file = product_workbook(input.path());

    let all = InspectCommand {
        file: file.clone(),
        config: no_config(input.path()),
        omit_missing_widget: false,
    }
    .models()
    .unwrap();
    assert_eq!(all["Product"].fields.len(), 3);

    let omitted = InspectCommand {
        file,
        config: no_config(input.path()),
        omit_missing_widget: true,
    }
    .models()
    .unwrap();
    let names: Vec<_> = omitted["Product"]
        .fields
        .iter()
        .map(|f| f.field_name.as_str())
        .collect();
    assert_eq!(names, vec!["title", "price"]);
}

#[test]
fn test_serve_overrides() {
    let input = TempDir::new().unwrap();
    let cmd = ServeCommand {
        host: Some("0.0.0.0".to_string()),
        port: Some(8088),
        config: no_config(input.path()),
    };

    let config = cmd.resolve_config().unwrap();
    assert_eq!(config.server.bind_address(), "0.0.0.0:8088");
}

#[test]
fn test_export_keeps_existing_files() {
    let dir = TempDir::new().unwrap();

    let first = export_templates(dir.path(), false).unwrap();
    assert_eq!(first.len(), BUILTIN_TEMPLATES.len());
    assert_eq!(customized_templates(dir.path()).len(), BUILTIN_TEMPLATES.len());

    fs::write(override_path(dir.path(), "main"), "edited\n").unwrap();
    let second = export_templates(dir.path(), false).unwrap();
    assert!(second.is_empty());
    assert_eq!(
        fs::read_to_string(override_path(dir.path(), "main")).unwrap(),
        "edited\n"
    );

    let forced = export_templates(dir.path(), true).unwrap();
    assert_eq!(forced.len(), BUILTIN_TEMPLATES.len());
    assert_ne!(
        fs::read_to_string(override_path(dir.path(), "main")).unwrap(),
        "edited\n"
    );
}

#[test]
fn test_exported_templates_diff_clean() {
    let dir = TempDir::new().unwrap();
    export_templates(dir.path(), false).unwrap();

    for template in BUILTIN_TEMPLATES {
        let custom = fs::read_to_string(override_path(dir.path(), template.name)).unwrap();
        assert!(template_diff(template.name, template.source, &custom).is_none());
    }
}

#[test]
fn test_customized_templates_only_lists_known_artifacts() {
    let dir = TempDir::new().unwrap();
    fs::write(override_path(dir.path(), "sidebar"), "custom").unwrap();
    fs::write(override_path(dir.path(), "not_an_artifact"), "custom").unwrap();

    let names: Vec<_> = customized_templates(dir.path()).iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["sidebar"]);
}
