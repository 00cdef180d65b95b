// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Column-aligned text tables for list commands.

use std::io::Write;

use crate::color;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tone {
    Plain,
    Muted,
}

pub struct Column {
    name: &'static str,
    tone: Tone,
}

impl Column {
    pub fn left(name: &'static str) -> Self {
        Self { name, tone: Tone::Plain }
    }

    /// Column whose cells render in the muted color (ids, hashes).
    pub fn muted(name: &'static str) -> Self {
        Self { name, tone: Tone::Muted }
    }
}

pub struct Table {
    cols: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(cols: Vec<Column>) -> Self {
        Self { cols, rows: Vec::new() }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        self.cols
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(col.name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Write the table. Padding is computed on plain text so colors never
    /// skew alignment; the last column is not padded.
    pub fn render(&self, out: &mut (impl Write + ?Sized)) {
        let widths = self.widths();
        let last = self.cols.len().saturating_sub(1);

        let header: Vec<String> = self
            .cols
            .iter()
            .enumerate()
            .map(|(i, col)| pad(&color::header(col.name), col.name, widths[i], i == last))
            .collect();
        let _ = writeln!(out, "{}", header.join("  "));

        for row in &self.rows {
            let cells: Vec<String> = self
                .cols
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let text = row.get(i).map(String::as_str).unwrap_or("");
                    let styled = match col.tone {
                        Tone::Muted => color::muted(text),
                        Tone::Plain => text.to_string(),
                    };
                    pad(&styled, text, widths[i], i == last)
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join("  "));
        }
    }
}

fn pad(styled: &str, plain: &str, width: usize, last: bool) -> String {
    if last {
        return styled.to_string();
    }
    let fill = width.saturating_sub(plain.chars().count());
    format!("{}{}", styled, " ".repeat(fill))
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
