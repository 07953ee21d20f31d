//! Display surfaces that render table rows to text.

use std::fmt::{self, Write as _};

use tracing::warn;

use crate::config::{DisplayConfig, DisplayFormat};

use super::rows::TableRow;

/// Something that can render the roster table.
pub trait DisplaySurface {
    /// Renders the given rows. Called again after every roster mutation.
    fn render(&self, rows: &[TableRow]) -> String;
}

/// Builds the surface selected by the display configuration.
pub fn surface_for(config: &DisplayConfig) -> Box<dyn DisplaySurface> {
    match config.format {
        DisplayFormat::Table => Box::new(TextTable::new(
            config.title.clone(),
            config.pay_decimal_places,
        )),
        DisplayFormat::Json => Box::new(JsonTable),
    }
}

/// A fixed-width text table with Name, ID and Pay columns.
#[derive(Debug, Clone)]
pub struct TextTable {
    title: String,
    decimal_places: usize,
}

impl TextTable {
    const NAME_HEADER: &'static str = "Name";
    const ID_HEADER: &'static str = "ID";
    const PAY_HEADER: &'static str = "Pay";

    /// Creates a table with a title line and the given pay precision.
    pub fn new(title: impl Into<String>, decimal_places: usize) -> Self {
        Self {
            title: title.into(),
            decimal_places,
        }
    }
}

impl Default for TextTable {
    fn default() -> Self {
        let config = DisplayConfig::default();
        Self::new(config.title, config.pay_decimal_places)
    }
}

impl TextTable {
    fn write_table(&self, out: &mut String, rows: &[TableRow]) -> fmt::Result {
        let cells: Vec<(String, String, String)> = rows
            .iter()
            .map(|row| {
                (
                    row.name.clone(),
                    row.id.to_string(),
                    format!("{:.*}", self.decimal_places, row.pay),
                )
            })
            .collect();

        let name_width = cells
            .iter()
            .map(|c| c.0.chars().count())
            .chain([Self::NAME_HEADER.len()])
            .max()
            .unwrap_or_default();
        let id_width = cells
            .iter()
            .map(|c| c.1.len())
            .chain([Self::ID_HEADER.len()])
            .max()
            .unwrap_or_default();
        let pay_width = cells
            .iter()
            .map(|c| c.2.len())
            .chain([Self::PAY_HEADER.len()])
            .max()
            .unwrap_or_default();

        writeln!(out, "{}", self.title)?;
        writeln!(
            out,
            "  # | {:<name_width$} | {:>id_width$} | {:>pay_width$}",
            Self::NAME_HEADER,
            Self::ID_HEADER,
            Self::PAY_HEADER,
        )?;
        writeln!(
            out,
            "----+-{}-+-{}-+-{}",
            "-".repeat(name_width),
            "-".repeat(id_width),
            "-".repeat(pay_width),
        )?;

        if cells.is_empty() {
            writeln!(out, "    (no employees)")?;
        }

        for (index, (row, (name, id, pay))) in rows.iter().zip(&cells).enumerate() {
            let marker = if row.selected { '>' } else { ' ' };
            writeln!(
                out,
                "{}{:>2} | {:<name_width$} | {:>id_width$} | {:>pay_width$}",
                marker,
                index + 1,
                name,
                id,
                pay,
            )?;
        }

        Ok(())
    }
}

impl DisplaySurface for TextTable {
    fn render(&self, rows: &[TableRow]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_table(&mut out, rows);
        out
    }
}

/// Renders rows as a pretty-printed JSON array.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTable;

impl DisplaySurface for JsonTable {
    fn render(&self, rows: &[TableRow]) -> String {
        match serde_json::to_string_pretty(rows) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(err) => {
                warn!(error = %err, "Failed to serialize roster rows");
                "[]\n".to_string()
            }
        }
    }
}
