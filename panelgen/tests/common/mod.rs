//! Workbook fixtures shared by the integration tests
//!
//! Sheets follow the loader contract: `B1` holds the model name, row 2 the
//! headers and data starts on row 3.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

/// Headers used by most fixtures
pub const USER_HEADERS: &[&str] = &["column", "type", "ui_component", "is_null", "comments"];

/// One sheet to write
#[derive(Debug, Clone)]
pub struct SheetFixture {
    name: String,
    cells: Vec<(u32, u16, String)>,
    next_row: u32,
}

impl SheetFixture {
    /// Empty sheet with a workbook tab name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cells: Vec::new(),
            next_row: 2,
        }
    }

    /// Set the display name in `B1`
    pub fn title(self, title: &str) -> Self {
        self.cell(0, 1, title)
    }

    /// Put a raw value anywhere, typically a flag token
    pub fn cell(mut self, row: u32, col: u16, value: &str) -> Self {
        self.cells.push((row, col, value.to_string()));
        self
    }

    /// Write the header row
    pub fn headers(mut self, headers: &[&str]) -> Self {
        for (col, header) in headers.iter().enumerate() {
            self.cells.push((1, col_index(col), (*header).to_string()));
        }
        self
    }

    /// Append a data row; empty strings leave the cell blank
    pub fn row(mut self, values: &[&str]) -> Self {
        let row = self.next_row;
        for (col, value) in values.iter().enumerate() {
            if !value.is_empty() {
                self.cells.push((row, col_index(col), (*value).to_string()));
            }
        }
        self.next_row += 1;
        self
    }
}

fn col_index(col: usize) -> u16 {
    u16::try_from(col).unwrap()
}

/// Write the sheets into `dir/file_name` and return the path
pub fn write_workbook(dir: &Path, file_name: &str, sheets: &[SheetFixture]) -> PathBuf {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name).unwrap();
        for (row, col, value) in &sheet.cells {
            worksheet.write_string(*row, *col, value).unwrap();
        }
    }

    let path = dir.join(file_name);
    workbook.save(&path).unwrap();
    path
}

/// The canonical `User` sheet: one required `name` text field
pub fn user_sheet() -> SheetFixture {
    SheetFixture::new("User")
        .title("User")
        .headers(USER_HEADERS)
        .row(&["name", "varchar", "text", "N", ""])
}

/// A realistic two-model workbook plus a `no_crud` lookup sheet
pub fn shop_workbook(dir: &Path) -> PathBuf {
    let headers = &[
        "column",
        "type",
        "ui_component",
        "is_null",
        "comments",
        "validation_rule",
        "sortable",
        "hidden",
        "is_in_listing",
        "is_remove_in_edit_form",
    ];

    let users = SheetFixture::new("users")
        .title("User")
        .headers(headers)
        .row(&["id", "bigint", "", "N", "", "", "Y", "", "", ""])
        .row(&["first_name", "varchar", "text", "N", "", "required|min:2", "Y", "", "Y", ""])
        .row(&["email", "varchar", "text", "N", "", "required|email", "", "", "Y", ""])
        .row(&["bio", "text", "textarea", "", "Short introduction", "", "", "", "", ""])
        .row(&[
            "status",
            "tinyint",
            "dropdown",
            "N",
            "1 => Active, 0 => Inactive",
            "",
            "",
            "",
            "Y",
            "",
        ])
        .row(&["is_admin", "boolean", "switch", "", "", "", "", "", "", ""])
        .row(&["password", "varchar", "text", "N", "", "min_length:8", "", "", "", "Y"]);

    let brands = SheetFixture::new("brands")
        .title("Brand")
        .cell(0, 4, "is_popup")
        .headers(headers)
        .row(&["name", "varchar", "text", "N", "", "required", "Y", "", "", ""])
        .row(&["logo", "varchar", "file_upload", "", "", "", "", "", "", ""]);

    let lookup = SheetFixture::new("lookup")
        .cell(0, 0, "no_crud")
        .headers(USER_HEADERS)
        .row(&["code", "varchar", "text", "N", ""]);

    write_workbook(dir, "shop.xlsx", &[users, brands, lookup])
}
