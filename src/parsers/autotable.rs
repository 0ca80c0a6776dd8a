use scraper::{Html, Selector};

use super::{TableParser, element_text};
use crate::error::ParseError;
use crate::table::Table;

/// Table auto-extraction: take the first table on the page wholesale
/// instead of walking the schedule page's landmarks. Header rows come
/// back as data, the way a table-extraction helper returns them.
pub struct AutoTableParser;

impl TableParser for AutoTableParser {
    fn name(&self) -> &str {
        "auto"
    }

    fn parse(&self, html: &str) -> Result<Table, ParseError> {
        let document = Html::parse_document(html);

        let table_sel = Selector::parse("table").unwrap();
        let tr = Selector::parse("tr").unwrap();
        let cell = Selector::parse("th, td").unwrap();
        let caption = Selector::parse("caption").unwrap();
        let h1 = Selector::parse("h1").unwrap();

        let table = document
            .select(&table_sel)
            .next()
            .ok_or(ParseError::MissingElement("table"))?;

        let rows: Vec<Vec<String>> = table
            .select(&tr)
            .map(|row| row.select(&cell).map(element_text).collect())
            .collect();

        // No column group to consult here; the widest row sets the width.
        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);

        // This strategy has no headline contract. Prefer the table's own
        // caption, fall back to the page heading, else leave the title empty.
        let title = table
            .select(&caption)
            .next()
            .or_else(|| document.select(&h1).next())
            .map(element_text)
            .unwrap_or_default();

        Ok(Table::assemble(title, column_count, rows))
    }
}
