//! Terminal UI utilities.
//!
//! A content-sized table with Unicode box-drawing characters, used by the
//! splash screen and `arl info`.

use colored::*;
use std::cmp;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    pub fn print(&self) {
        if self.headers.is_empty() {
            return;
        }

        // Column widths track the visible width, not the byte length,
        // so colored cells line up.
        let mut col_widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| console::measure_text_width(h))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let clean = sanitize_content(cell);
                col_widths[i] = cmp::max(col_widths[i], console::measure_text_width(&clean));
            }
        }

        let make_sep = |left: &str, mid: &str, right: &str| -> String {
            let mut s = String::new();
            s.push_str("  ");
            s.push_str(left);
            for (i, width) in col_widths.iter().enumerate() {
                s.push_str(&"─".repeat(width + 2));
                if i < col_widths.len() - 1 {
                    s.push_str(mid);
                }
            }
            s.push_str(right);
            s
        };

        println!("{}", make_sep("┌", "┬", "┐"));

        print!("  │");
        for (i, header) in self.headers.iter().enumerate() {
            let padding = col_widths[i].saturating_sub(console::measure_text_width(header));
            print!(" {} {}│", header.bold(), " ".repeat(padding));
        }
        println!();

        println!("{}", make_sep("├", "┼", "┤"));

        for row in &self.rows {
            print!("  │");
            for (i, cell) in row.iter().enumerate() {
                let clean = sanitize_content(cell);
                let padding = col_widths[i].saturating_sub(console::measure_text_width(&clean));
                print!(" {} {}│", clean, " ".repeat(padding));
            }
            println!();
        }

        println!("{}", make_sep("└", "┴", "┘"));
    }
}

fn sanitize_content(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            _ => c,
        })
        .collect()
}
