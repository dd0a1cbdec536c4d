/*!
 * Text Table
 * Bordered, column-aligned table rendering
 */

use std::io::{self, Write};

/// Simple bordered table with a header, body rows and an optional footer
#[derive(Debug, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    footer: Vec<String>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn set_footer(&mut self, footer: Vec<String>) {
        self.footer = footer;
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();

        for row in self.rows.iter().chain(std::iter::once(&self.footer)) {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }

        widths
    }

    pub fn render<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let widths = self.column_widths();

        write_rule(w, &widths)?;
        write_cells(w, &widths, &self.header)?;
        write_rule(w, &widths)?;
        for row in &self.rows {
            write_cells(w, &widths, row)?;
        }
        write_rule(w, &widths)?;

        if !self.footer.is_empty() {
            write_cells(w, &widths, &self.footer)?;
            write_rule(w, &widths)?;
        }

        Ok(())
    }
}

fn write_rule<W: Write>(w: &mut W, widths: &[usize]) -> io::Result<()> {
    write!(w, "+")?;
    for width in widths {
        write!(w, "{}+", "-".repeat(width + 2))?;
    }
    writeln!(w)
}

fn write_cells<W: Write>(w: &mut W, widths: &[usize], cells: &[String]) -> io::Result<()> {
    write!(w, "|")?;
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        write!(w, " {:<width$} |", cell, width = *width)?;
    }
    writeln!(w)
}
