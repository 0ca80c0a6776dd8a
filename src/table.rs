use std::fmt;

use serde::Serialize;

/// Head-style cap on assembled tables: the title sentinel plus up to
/// four data rows.
pub const MAX_ROWS: usize = 5;

/// Uniform rectangular table built from one schedule page.
///
/// The first row is a sentinel carrying the page title. Columns are
/// named positionally from the header-group count discovered at parse
/// time; every row holds exactly `columns.len()` cells.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Assemble a table from a title and raw data rows.
    ///
    /// Every row is normalized to `column_count` cells: short rows are
    /// right-padded with empty strings, overlong rows truncated. The
    /// result keeps at most [`MAX_ROWS`] rows including the sentinel.
    pub fn assemble(title: String, column_count: usize, data_rows: Vec<Vec<String>>) -> Self {
        let columns = (1..=column_count).map(|i| format!("Col_{i}")).collect();

        let mut rows = Vec::with_capacity(data_rows.len() + 1);
        rows.push(vec![title.clone()]);
        rows.extend(data_rows);
        rows.truncate(MAX_ROWS);
        for row in &mut rows {
            row.resize(column_count, String::new());
        }

        Table {
            title,
            columns,
            rows,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.columns.join("\t"))?;
        for row in &self.rows {
            writeln!(f, "{}", row.join("\t"))?;
        }
        Ok(())
    }
}
