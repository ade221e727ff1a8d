//! Dense cell grid with absolute spreadsheet coordinates

use calamine::{Data, Range};

/// Trimmed cell text addressed by absolute `(row, col)`, row 0 being spreadsheet row 1
///
/// calamine ranges start at the first used cell; the grid pads the leading
/// rows and columns so that `B1` is always `cell(0, 1)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetGrid {
    rows: Vec<Vec<String>>,
}

impl SheetGrid {
    /// Build a grid from already-stringified rows
    ///
    /// # Examples
    ///
    /// ```
    /// # use panelgen::sheet::SheetGrid;
    /// let grid = SheetGrid::from_rows(vec![vec!["", " User "]]);
    /// assert_eq!(grid.cell(0, 1), "User");
    /// assert_eq!(grid.cell(5, 5), "");
    /// ```
    #[must_use]
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.as_ref().trim().to_string()).collect())
            .collect();
        Self { rows }
    }

    /// Decode a calamine range into absolute coordinates
    #[must_use]
    pub fn from_range(range: &Range<Data>) -> Self {
        let (Some((start_row, start_col)), Some((end_row, end_col))) = (range.start(), range.end())
        else {
            return Self::default();
        };

        let rows = (0..=end_row)
            .map(|row| {
                (0..=end_col)
                    .map(|col| {
                        if row < start_row || col < start_col {
                            return String::new();
                        }
                        range.get_value((row, col)).map(cell_text).unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }

    /// Number of rows, counting leading blank rows
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid holds no rows at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Trimmed cell text, empty when out of range
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }

    /// One row's cells, empty when out of range
    #[must_use]
    pub fn row(&self, row: usize) -> &[String] {
        self.rows.get(row).map_or(&[], Vec::as_slice)
    }
}

/// Render a calamine cell as text
///
/// Whole floats print without a fraction so that numeric cells such as a
/// field length read back as `"5"`.
#[must_use]
pub fn cell_text(data: &Data) -> String {
    match data {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        #[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Error(_) | Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::String("  name ".to_string())), "name");
        assert_eq!(cell_text(&Data::Float(5.0)), "5");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Int(12)), "12");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn test_range_keeps_absolute_positions() {
        // Range whose first used cell is B2
        let mut range: Range<Data> = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("column".to_string()));
        range.set_value((2, 1), Data::String("name".to_string()));
        range.set_value((2, 2), Data::String("varchar".to_string()));

        let grid = SheetGrid::from_range(&range);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cell(0, 0), "");
        assert_eq!(grid.cell(1, 1), "column");
        assert_eq!(grid.cell(2, 2), "varchar");
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(SheetGrid::from_range(&range).is_empty());
    }
}
