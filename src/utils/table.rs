//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::pad_right;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: char) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Width of the rule lines: every padded column plus its trailing space,
    /// without the space after the last column.
    fn rule_width(&self) -> usize {
        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        total.saturating_sub(1)
    }

    fn push_line(&self, out: &mut String, cells: &[&str]) {
        let last = self.columns.len().saturating_sub(1);
        let mut line = String::new();

        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            if i == last {
                // last column is never padded
                line.push_str(cell);
            } else {
                line.push_str(&pad_right(cell, col.width));
                line.push(' ');
            }
        }

        out.push_str(line.trim_end());
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule: String = std::iter::repeat_n(self.separator, self.rule_width()).collect();

        // Header
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        self.push_line(&mut out, &headers);
        out.push_str(&rule);
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            self.push_line(&mut out, &cells);
        }

        out.push_str(&rule);
        out.push('\n');
        out
    }
}
