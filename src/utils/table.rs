//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with column widths sized to the widest cell.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        push_line(&mut out, &self.headers, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }

        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.width());
                }
            }
        }
        widths
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        let pad = widths.get(i).copied().unwrap_or(0).saturating_sub(cell.width());
        out.push_str(cell);
        out.push_str(&" ".repeat(pad + 2));
    }
    // trim trailing padding
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_to_widest_cell() {
        let mut t = Table::new(vec!["Date", "N"]);
        t.add_row(vec!["2024-01-10".to_string(), "3".to_string()]);
        t.add_row(vec!["2024-01-11".to_string(), "12".to_string()]);

        let rendered = t.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        // "N" column starts at the same offset on every line
        let col = lines[1].find('3').unwrap();
        assert_eq!(lines[2].find("12").unwrap(), col);
    }

    #[test]
    fn renders_header_only_when_empty() {
        let t = Table::new(vec!["Date", "Attendance", "Origin"]);
        assert_eq!(t.render().lines().count(), 1);
    }
}
