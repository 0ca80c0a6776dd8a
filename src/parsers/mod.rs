// Parser variants behind one contract: each turns a page's HTML into
// the same uniform Table shape, differing only in extraction strategy.

mod autotable;
mod dom;

use std::sync::Arc;

pub use autotable::AutoTableParser;
pub use dom::DomParser;
use scraper::ElementRef;

use crate::error::ParseError;
use crate::table::Table;

/// Trait all parser variants implement. Pure CPU work with no
/// suspension; safe to share across workers.
pub trait TableParser: Send + Sync {
    /// Variant name used in logs and timing output.
    fn name(&self) -> &str;

    /// Turn one page's HTML into a table.
    fn parse(&self, html: &str) -> Result<Table, ParseError>;
}

/// Look up a parser variant by registry name.
pub fn get_parser(name: &str) -> Option<Arc<dyn TableParser>> {
    match name {
        "dom" => Some(Arc::new(DomParser)),
        "auto" => Some(Arc::new(AutoTableParser)),
        _ => None,
    }
}

/// Visible text of an element: descendant fragments trimmed and joined
/// with single spaces. Split cells like "Sun," + "Oct 1" keep their
/// separator instead of concatenating into "Sun,Oct 1".
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
