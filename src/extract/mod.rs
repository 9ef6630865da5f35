// src/extract/mod.rs
use crate::error::StructureError;
use crate::process::{Table, Value};
use anyhow::Context;
use scraper::{ElementRef, Html, Selector};
use std::{fs, path::Path};
use tracing::{debug, info};

/// Parse an unclaimed-property HTML export into a [`Table`].
///
/// Columns come from the `<th>` cells of the first `<table>` in the document,
/// rows from the `<td>` cells of each `<tbody>` row. All cell text is trimmed.
/// Every body row must be as wide as the header.
pub fn table_from_html(html: &str) -> Result<Table, StructureError> {
    let table_sel = Selector::parse("table").expect("selector should parse");
    let header_sel = Selector::parse("th").expect("selector should parse");
    let row_sel = Selector::parse("tbody tr").expect("selector should parse");
    let cell_sel = Selector::parse("td").expect("selector should parse");

    let document = Html::parse_document(html);
    let table = document
        .select(&table_sel)
        .next()
        .ok_or(StructureError::MissingTable)?;

    let headers: Vec<String> = table.select(&header_sel).map(|th| cell_text(th)).collect();
    debug!(?headers, "parsed header row");

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (row, tr) in table.select(&row_sel).enumerate() {
        let cells: Vec<Value> = tr
            .select(&cell_sel)
            .map(|td| Value::Text(cell_text(td)))
            .collect();
        if cells.len() != headers.len() {
            return Err(StructureError::RaggedRow {
                row,
                expected: headers.len(),
                found: cells.len(),
            });
        }
        rows.push(cells);
    }

    info!(columns = headers.len(), rows = rows.len(), "extracted table");
    Ok(Table::new(headers, rows))
}

/// Read an export from disk and parse it.
pub fn table_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Table> {
    let path = path.as_ref();
    let html =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    table_from_html(&html).with_context(|| format!("parsing {}", path.display()))
}

fn cell_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
