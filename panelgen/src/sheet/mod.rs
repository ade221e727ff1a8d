//! Spreadsheet loader
//!
//! Reads a workbook into [`RawSheet`]s following the sheet layout contract:
//!
//! | row (1-based) | content                                               |
//! |---------------|-------------------------------------------------------|
//! | 1             | display name in `B1`, flag tokens anywhere            |
//! | 2             | header row (`column`, `type`, `ui_component`, ...), flag tokens |
//! | 3..           | one field per row                                     |
//!
//! Sheets flagged `no_crud` and sheets without data rows never leave this module.
//! No interpretation of cell values happens here; rows are handed on as
//! optional strings for [`crate::model`] to normalize.

mod grid;

use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use serde::Serialize;

use crate::error::{Error, Result};

pub use grid::{cell_text, SheetGrid};

/// Zero-based index of the header row
pub const HEADER_ROW: usize = 1;

/// Number of leading rows scanned for flag tokens
pub const FLAG_SCAN_ROWS: usize = 2;

/// Token that excludes a sheet from generation
pub const NO_CRUD_TOKEN: &str = "no_crud";

/// Token that turns a model's create and edit pages into a dialog
pub const IS_POPUP_TOKEN: &str = "is_popup";

/// Sheet-level configuration flags found in the scan region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SheetFlags {
    /// `no_crud` token present
    pub no_crud: bool,
    /// `is_popup` token present
    pub is_popup: bool,
}

/// One data row with every recognized column as an optional string
///
/// Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawRow {
    /// `column`: field identifier
    pub column: Option<String>,
    /// `type`: database type
    #[serde(rename = "type")]
    pub data_type: Option<String>,
    /// `ui_component`: widget hint
    pub ui_component: Option<String>,
    /// `is_null`: `N` marks the field required
    pub is_null: Option<String>,
    /// `comments`: free text, may carry `key => value` options
    pub comments: Option<String>,
    /// `validation_rule`: free-text rule list
    pub validation_rule: Option<String>,
    /// `sortable`
    pub sortable: Option<String>,
    /// `hidden`
    pub hidden: Option<String>,
    /// `is_in_listing`
    pub is_in_listing: Option<String>,
    /// `is_remove_in_edit_form`
    pub is_remove_in_edit_form: Option<String>,
}

impl RawRow {
    /// Whether the header name is one the loader keeps
    #[must_use]
    pub fn is_known_header(header: &str) -> bool {
        matches!(
            header,
            "column"
                | "type"
                | "ui_component"
                | "is_null"
                | "comments"
                | "validation_rule"
                | "sortable"
                | "hidden"
                | "is_in_listing"
                | "is_remove_in_edit_form"
        )
    }

    fn set(&mut self, header: &str, value: Option<String>) {
        let slot = match header {
            "column" => &mut self.column,
            "type" => &mut self.data_type,
            "ui_component" => &mut self.ui_component,
            "is_null" => &mut self.is_null,
            "comments" => &mut self.comments,
            "validation_rule" => &mut self.validation_rule,
            "sortable" => &mut self.sortable,
            "hidden" => &mut self.hidden,
            "is_in_listing" => &mut self.is_in_listing,
            "is_remove_in_edit_form" => &mut self.is_remove_in_edit_form,
            _ => return,
        };
        *slot = value;
    }
}

/// A sheet that survived loading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawSheet {
    /// Workbook sheet name
    pub sheet_name: String,
    /// Model name: `B1` when set, otherwise the sheet name
    pub display_name: String,
    /// Flags from the scan region
    pub flags: SheetFlags,
    /// Data rows in sheet order
    pub rows: Vec<RawRow>,
}

impl RawSheet {
    /// Apply the sheet layout contract to one decoded sheet
    ///
    /// Returns `None` for sheets that must be skipped: no usable name,
    /// flagged `no_crud`, or no data rows.
    #[must_use]
    pub fn from_grid(sheet_name: &str, grid: &SheetGrid) -> Option<Self> {
        let sheet_name = sheet_name.trim();
        let display_name = match grid.cell(0, 1) {
            "" => sheet_name,
            b1 => b1,
        };
        if display_name.is_empty() {
            tracing::debug!("Skipping unnamed sheet");
            return None;
        }

        let flags = scan_flags(grid);
        if flags.no_crud {
            tracing::info!(sheet = sheet_name, "Sheet is flagged no_crud. Skipping.");
            return None;
        }

        let rows = rows_from_grid(grid);
        if rows.is_empty() {
            tracing::warn!(
                sheet = sheet_name,
                "Sheet is empty or could not be read. Skipping."
            );
            return None;
        }

        tracing::debug!(
            sheet = sheet_name,
            model = display_name,
            rows = rows.len(),
            is_popup = flags.is_popup,
            "Loaded sheet"
        );

        Some(Self {
            sheet_name: sheet_name.to_string(),
            display_name: display_name.to_string(),
            flags,
            rows,
        })
    }
}

/// Look for flag tokens in every cell of the first two rows
///
/// # Examples
///
/// ```
/// # use panelgen::sheet::{scan_flags, SheetGrid};
/// let grid = SheetGrid::from_rows(vec![vec!["Order", "", " IS_POPUP "]]);
/// let flags = scan_flags(&grid);
/// assert!(flags.is_popup);
/// assert!(!flags.no_crud);
/// ```
#[must_use]
pub fn scan_flags(grid: &SheetGrid) -> SheetFlags {
    let mut flags = SheetFlags::default();
    for row in 0..FLAG_SCAN_ROWS {
        for cell in grid.row(row) {
            let token = cell.trim().to_lowercase();
            if token == NO_CRUD_TOKEN {
                flags.no_crud = true;
            } else if token == IS_POPUP_TOKEN {
                flags.is_popup = true;
            }
        }
    }
    flags
}

/// Turn every row after the header into a [`RawRow`]
///
/// Blank rows are skipped. Headers are matched trimmed and lower-cased; the
/// first occurrence of a repeated header wins.
#[must_use]
pub fn rows_from_grid(grid: &SheetGrid) -> Vec<RawRow> {
    let mut columns: HashMap<String, usize> = HashMap::new();
    for (idx, header) in grid.row(HEADER_ROW).iter().enumerate() {
        let header = header.trim().to_lowercase();
        if RawRow::is_known_header(&header) {
            columns.entry(header).or_insert(idx);
        }
    }

    if columns.is_empty() {
        return Vec::new();
    }

    (HEADER_ROW + 1..grid.height())
        .filter(|&row| grid.row(row).iter().any(|c| !c.is_empty()))
        .map(|row| {
            let mut raw = RawRow::default();
            for (header, &col) in &columns {
                let value = grid.cell(row, col);
                raw.set(header, (!value.is_empty()).then(|| value.to_string()));
            }
            raw
        })
        .collect()
}

/// Open a workbook and load every usable sheet in workbook order
///
/// Accepts any format calamine detects from the extension (xlsx, xlsm, xlsb,
/// xls, ods).
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if the path does not exist and
/// [`Error::Workbook`] if the file cannot be opened or a sheet cannot be decoded.
pub fn load_workbook(path: &Path) -> Result<Vec<RawSheet>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names();

    tracing::info!(
        path = %path.display(),
        sheets = %sheet_names.join(", "),
        "Starting workbook parsing"
    );

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for sheet_name in sheet_names {
        let range = workbook.worksheet_range(&sheet_name)?;
        let grid = SheetGrid::from_range(&range);
        if let Some(sheet) = RawSheet::from_grid(&sheet_name, &grid) {
            sheets.push(sheet);
        }
    }

    Ok(sheets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_grid() -> SheetGrid {
        SheetGrid::from_rows(vec![
            vec!["Table", "User"],
            vec!["column", "type", "ui_component", "is_null", "comments"],
            vec!["name", "varchar", "text", "N", ""],
        ])
    }

    #[test]
    fn test_from_grid_uses_b1() {
        let sheet = RawSheet::from_grid("Sheet1", &user_grid()).unwrap();
        assert_eq!(sheet.display_name, "User");
        assert_eq!(sheet.sheet_name, "Sheet1");
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0].column.as_deref(), Some("name"));
        assert_eq!(sheet.rows[0].data_type.as_deref(), Some("varchar"));
        assert_eq!(sheet.rows[0].is_null.as_deref(), Some("N"));
        assert_eq!(sheet.rows[0].comments, None);
    }

    #[test]
    fn test_from_grid_falls_back_to_sheet_name() {
        let grid = SheetGrid::from_rows(vec![
            vec!["Table"],
            vec!["column"],
            vec!["title"],
        ]);
        let sheet = RawSheet::from_grid(" Post ", &grid).unwrap();
        assert_eq!(sheet.display_name, "Post");
    }

    #[test]
    fn test_no_crud_in_either_scan_row() {
        let first = SheetGrid::from_rows(vec![
            vec!["no_crud"],
            vec!["column"],
            vec!["name"],
        ]);
        assert!(RawSheet::from_grid("Audit", &first).is_none());

        let second = SheetGrid::from_rows(vec![
            vec!["Audit"],
            vec!["column", "type", "NO_CRUD"],
            vec!["name"],
        ]);
        assert!(RawSheet::from_grid("Audit", &second).is_none());
    }

    #[test]
    fn test_flag_below_scan_region_is_data() {
        let grid = SheetGrid::from_rows(vec![
            vec!["Log"],
            vec!["column", "comments"],
            vec!["entry", "no_crud"],
        ]);
        let sheet = RawSheet::from_grid("Log", &grid).unwrap();
        assert!(!sheet.flags.no_crud);
        assert_eq!(sheet.rows[0].comments.as_deref(), Some("no_crud"));
    }

    #[test]
    fn test_popup_flag() {
        let grid = SheetGrid::from_rows(vec![
            vec!["Tag", "Tag", "is_popup"],
            vec!["column"],
            vec!["label"],
        ]);
        let sheet = RawSheet::from_grid("Tag", &grid).unwrap();
        assert!(sheet.flags.is_popup);
    }

    #[test]
    fn test_sheet_without_rows_is_skipped() {
        let grid = SheetGrid::from_rows(vec![
            vec!["Empty", "Empty"],
            vec!["column", "type"],
        ]);
        assert!(RawSheet::from_grid("Empty", &grid).is_none());
    }

    #[test]
    fn test_rows_skip_blank_and_handle_header_case() {
        let grid = SheetGrid::from_rows(vec![
            vec!["", ""],
            vec![" Column ", "UI_COMPONENT", "unknown", "column"],
            vec!["email", "", "ignored", "shadowed"],
            vec!["", "", "", ""],
            vec!["", "switch", "", ""],
        ]);
        let rows = rows_from_grid(&grid);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].column.as_deref(), Some("email"));
        assert_eq!(rows[0].ui_component, None);
        assert_eq!(rows[1].column, None);
        assert_eq!(rows[1].ui_component.as_deref(), Some("switch"));
    }

    #[test]
    fn test_rows_without_known_headers() {
        let grid = SheetGrid::from_rows(vec![
            vec!["X"],
            vec!["foo", "bar"],
            vec!["1", "2"],
        ]);
        assert!(rows_from_grid(&grid).is_empty());
    }

    #[test]
    fn test_missing_workbook() {
        let err = load_workbook(Path::new("/nonexistent/models.xlsx")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
