//! HTML-like table markup for rich node labels
//!
//! Graphviz accepts a restricted HTML grammar inside node labels. This module
//! models the subset used for transaction captions, a table of rows of cells,
//! and renders it with [`Table::to_markup`].

/// An HTML-like table label
#[derive(Debug, Clone, Default)]
pub struct Table {
    attrs: Vec<(String, String)>,
    rows: Vec<TableRow>,
}

/// One row of a table label
#[derive(Debug, Clone, Default)]
pub struct TableRow {
    cells: Vec<TableCell>,
}

/// One cell of a table row
///
/// Cell content is emitted verbatim, so it may itself carry markup such as
/// `<b>` or `<br/>`.
#[derive(Debug, Clone, Default)]
pub struct TableCell {
    content: String,
    attrs: Vec<(String, String)>,
    font_attrs: Vec<(String, String)>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `<table>` attribute, keeping insertion order
    pub fn add_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((key.into(), value.into()));
    }

    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Render the table as Graphviz label markup
    pub fn to_markup(&self) -> String {
        let mut markup = String::from("<table");
        for (key, value) in &self.attrs {
            markup.push_str(&format!(" {}=\"{}\"", key, value));
        }
        markup.push('>');

        for row in &self.rows {
            markup.push_str("<tr>");
            for cell in &row.cells {
                markup.push_str("<td");
                for (key, value) in &cell.attrs {
                    markup.push_str(&format!(" {}=\"{}\"", key, value));
                }
                markup.push_str("><font");
                for (key, value) in &cell.font_attrs {
                    markup.push_str(&format!(" {}=\"{}\"", key, value));
                }
                markup.push('>');
                markup.push_str(&cell.content);
                markup.push_str("</font></td>");
            }
            markup.push_str("</tr>");
        }

        markup.push_str("</table>");
        markup
    }
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cell(&mut self, cell: TableCell) {
        self.cells.push(cell);
    }
}

impl TableCell {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            attrs: Vec::new(),
            font_attrs: Vec::new(),
        }
    }

    /// Append a `<td>` attribute, keeping insertion order
    pub fn add_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((key.into(), value.into()));
    }

    /// Append an attribute of the cell's `<font>` wrapper
    pub fn add_font_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.font_attrs.push((key.into(), value.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        assert_eq!(Table::new().to_markup(), "<table></table>");
    }

    #[test]
    fn test_table_attrs_in_order() {
        let mut table = Table::new();
        table.add_attr("border", "0");
        table.add_attr("cellborder", "0");
        assert_eq!(
            table.to_markup(),
            "<table border=\"0\" cellborder=\"0\"></table>"
        );
    }

    #[test]
    fn test_full_table_markup() {
        let mut cell = TableCell::new("TX_0");
        cell.add_attr("bgcolor", "black");
        cell.add_attr("colspan", "2");
        cell.add_font_attr("color", "white");

        let mut row = TableRow::new();
        row.add_cell(cell);

        let mut table = Table::new();
        table.add_attr("border", "0");
        table.add_row(row);

        assert_eq!(
            table.to_markup(),
            "<table border=\"0\"><tr><td bgcolor=\"black\" colspan=\"2\">\
             <font color=\"white\">TX_0</font></td></tr></table>"
        );
    }

    #[test]
    fn test_cell_content_is_verbatim() {
        let mut row = TableRow::new();
        row.add_cell(TableCell::new("<b>From: </b>0xA<br/>"));
        let mut table = Table::new();
        table.add_row(row);

        assert_eq!(
            table.to_markup(),
            "<table><tr><td><font><b>From: </b>0xA<br/></font></td></tr></table>"
        );
    }

    #[test]
    fn test_multiple_rows_and_cells() {
        let mut first = TableRow::new();
        first.add_cell(TableCell::new("a"));
        first.add_cell(TableCell::new("b"));
        let mut second = TableRow::new();
        second.add_cell(TableCell::new("c"));

        let mut table = Table::new();
        table.add_row(first);
        table.add_row(second);

        assert_eq!(
            table.to_markup(),
            "<table><tr><td><font>a</font></td><td><font>b</font></td></tr>\
             <tr><td><font>c</font></td></tr></table>"
        );
    }
}
