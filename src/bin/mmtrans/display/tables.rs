use std::io::{self, Write};

use mmic_translator::{Axis, CapabilityMaps};

use super::Context;
use crate::util::text::truncate;

const INDENT: &str = "  ";

const BOX_INNER_WIDTH: usize = 76;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub struct PluginRow {
    pub plugin: String,
    pub toolkit: String,
    pub installed: bool,
    pub models: String,
}

pub fn print_plugins(rows: &[PluginRow], ctx: Context) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !ctx.interactive {
        for row in rows {
            let _ = writeln!(
                out,
                "{}\t{}\t{}\t{}",
                row.plugin,
                row.toolkit,
                if row.installed { "installed" } else { "missing" },
                row.models
            );
        }
        return;
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.plugin.clone(),
                row.toolkit.clone(),
                if row.installed { "✓" } else { "✗" }.to_string(),
                if row.models.is_empty() {
                    "-".to_string()
                } else {
                    row.models.clone()
                },
            ]
        })
        .collect();

    let installed = rows.iter().filter(|r| r.installed).count();
    let title = format!("Translators ({installed}/{} installed)", rows.len());
    print_table(
        &mut out,
        &title,
        &["Plugin", "Toolkit", "Inst.", "Models"],
        &cells,
    );
}

pub fn print_capability_maps(axis: Axis, maps: &CapabilityMaps, ctx: Context) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut cells = Vec::new();
    for (plugin, map) in maps.iter() {
        for (ext, format) in map.iter() {
            cells.push(vec![ext.clone(), format.to_string(), plugin.to_string()]);
        }
    }

    if !ctx.interactive {
        for row in &cells {
            let _ = writeln!(out, "{}", row.join("\t"));
        }
        return;
    }

    if cells.is_empty() {
        let _ = writeln!(out, "{INDENT}No installed translator declares {axis} extensions.");
        return;
    }

    let title = format!("{axis} extensions");
    print_table(&mut out, &title, &["Extension", "Format", "Plugin"], &cells);
}

pub fn print_resolution(axis: Axis, extension: &str, plugin: &str, toolkit: &str, ctx: Context) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !ctx.interactive {
        let _ = writeln!(out, "{plugin}");
        return;
    }

    let rows = vec![
        vec!["Axis".to_string(), axis.to_string()],
        vec!["Extension".to_string(), extension.to_string()],
        vec!["Translator".to_string(), plugin.to_string()],
        vec!["Toolkit".to_string(), toolkit.to_string()],
    ];
    print_table(&mut out, "Resolution", &["Field", "Value"], &rows);
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    // Each column costs 3 extra chars ("│ " + " "), plus the leading border.
    let budget = SAFE_TABLE_WIDTH.saturating_sub(3 * widths.len() + 1);
    let total: usize = widths.iter().sum();
    if total > budget {
        if let Some(last) = widths.last_mut() {
            let others = total - *last;
            *last = budget.saturating_sub(others).max(4);
        }
    }
    widths
}

fn border(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{INDENT}{left}{}{right}", segments.join(mid))
}

fn row_text<'s>(widths: &[usize], cells: impl IntoIterator<Item = &'s str>) -> String {
    let mut text = format!("{INDENT}│");
    for (cell, w) in cells.into_iter().zip(widths) {
        let cell = truncate(cell, *w);
        let pad = w.saturating_sub(cell.chars().count());
        text.push(' ');
        text.push_str(&cell);
        text.push_str(&" ".repeat(pad));
        text.push_str(" │");
    }
    text
}

fn print_table(out: &mut impl Write, title: &str, headers: &[&str], rows: &[Vec<String>]) {
    let widths = column_widths(headers, rows);

    let _ = writeln!(out, "{INDENT}┌─ {} ─┐", truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(out, "{}", border(&widths, "┌", "┬", "┐"));
    let _ = writeln!(out, "{}", row_text(&widths, headers.iter().copied()));
    let _ = writeln!(out, "{}", border(&widths, "├", "┼", "┤"));
    for row in rows {
        let _ = writeln!(out, "{}", row_text(&widths, row.iter().map(String::as_str)));
    }
    let _ = writeln!(out, "{}", border(&widths, "└", "┴", "┘"));
}
