//! HTML table extraction.
//!
//! Mirrors what the site actually serves: one rendered results table whose
//! header cells name the columns. Parsing is deliberately forgiving — a grid
//! whose row widths disagree with the header count comes back empty instead
//! of failing the run.

use scraper::{Html, Selector};

/// Rectangular grid extracted from a rendered `<table>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableExtract {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableExtract {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of the named column in row order, or `None` when no header
    /// matches.
    pub fn column(&self, name: &str) -> Option<Vec<String>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.get(index).cloned())
                .collect(),
        )
    }
}

/// Parse table markup into a [`TableExtract`].
///
/// Headers come from every `<th>` with non-empty text; body rows from every
/// `<tr>`, keeping only `<td>` cells with non-empty text and collapsing line
/// breaks to spaces. Rows that yield zero cells are dropped. If any surviving
/// row's width disagrees with the header count the whole extract is empty.
pub fn parse_table(html: &str) -> TableExtract {
    let document = Html::parse_fragment(html);
    let th = Selector::parse("th").unwrap();
    let tr = Selector::parse("tr").unwrap();
    let td = Selector::parse("td").unwrap();

    let headers: Vec<String> = document
        .select(&th)
        .map(|cell| collapse_text(cell.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect();

    let mut rows = Vec::new();
    for row in document.select(&tr) {
        let cells: Vec<String> = row
            .select(&td)
            .map(|cell| collapse_text(cell.text().collect::<String>()))
            .filter(|text| !text.is_empty())
            .collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    if rows.iter().any(|row| row.len() != headers.len()) {
        return TableExtract::default();
    }

    TableExtract { headers, rows }
}

fn collapse_text(text: String) -> String {
    text.replace(['\n', '\r'], " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_headers_and_rows() {
        let html = "<table>\
            <tr><th>A</th><th>B</th></tr>\
            <tr><td>x</td><td>y</td></tr>\
            <tr><td>1</td><td>2</td></tr>\
            </table>";
        let table = parse_table(html);
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["x", "y"], vec!["1", "2"]]);
    }

    #[test]
    fn drops_rows_with_no_cell_values() {
        let html = "<table>\
            <tr><th>A</th><th>B</th></tr>\
            <tr><td>x</td><td>y</td></tr>\
            <tr><td></td><td>  </td></tr>\
            </table>";
        let table = parse_table(html);
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["x", "y"]]);
    }

    #[test]
    fn width_mismatch_yields_empty_extract() {
        let html = "<table>\
            <tr><th>A</th><th>B</th></tr>\
            <tr><td>x</td></tr>\
            </table>";
        let table = parse_table(html);
        assert_eq!(table, TableExtract::default());
        assert!(table.is_empty());
    }

    #[test]
    fn missing_headers_never_panic() {
        let html = "<table><tr><td>orphan</td></tr></table>";
        let table = parse_table(html);
        // One cell against zero headers is a mismatch, so the extract is empty.
        assert!(table.headers.is_empty());
        assert!(table.is_empty());

        let table = parse_table("<table></table>");
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn collapses_embedded_line_breaks() {
        let html = "<table>\
            <tr><th>Carta</th></tr>\
            <tr><td>SID\nRWY 17</td></tr>\
            </table>";
        let table = parse_table(html);
        assert_eq!(table.rows, vec![vec!["SID RWY 17"]]);
    }

    #[test]
    fn column_projects_values_in_order() {
        let html = "<table>\
            <tr><th>Carta</th><th>Tipo</th></tr>\
            <tr><td>SID-01</td><td>SID</td></tr>\
            <tr><td>STAR-02</td><td>STAR</td></tr>\
            </table>";
        let table = parse_table(html);
        assert_eq!(
            table.column("Carta"),
            Some(vec!["SID-01".to_string(), "STAR-02".to_string()])
        );
        assert_eq!(table.column("Nope"), None);
    }

    #[test]
    fn non_table_markup_is_harmless() {
        let table = parse_table("<div><p>no tables here</p></div>");
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }
}
