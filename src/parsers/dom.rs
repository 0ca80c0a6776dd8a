use scraper::{Html, Selector};

use super::{TableParser, element_text};
use crate::error::ParseError;
use crate::table::Table;

/// Manual DOM traversal over the schedule page's landmarks: the
/// headline element for the title, the column group for the column
/// count, and the table body for the data rows.
pub struct DomParser;

impl TableParser for DomParser {
    fn name(&self) -> &str {
        "dom"
    }

    fn parse(&self, html: &str) -> Result<Table, ParseError> {
        let document = Html::parse_document(html);

        let headline = Selector::parse("h1.headline").unwrap();
        let colgroup = Selector::parse("colgroup").unwrap();
        let col = Selector::parse("col").unwrap();
        let tbody = Selector::parse("tbody").unwrap();
        let tr = Selector::parse("tr").unwrap();
        let td = Selector::parse("td").unwrap();

        let title = document
            .select(&headline)
            .next()
            .map(element_text)
            .ok_or(ParseError::MissingElement("headline"))?;

        // The column group only sizes the column-name list; row widths
        // are normalized against it during assembly.
        let column_count = document
            .select(&colgroup)
            .next()
            .ok_or(ParseError::MissingElement("colgroup"))?
            .select(&col)
            .count();

        let body = document
            .select(&tbody)
            .next()
            .ok_or(ParseError::MissingElement("tbody"))?;

        let rows = body
            .select(&tr)
            .map(|row| row.select(&td).map(element_text).collect())
            .collect();

        Ok(Table::assemble(title, column_count, rows))
    }
}
