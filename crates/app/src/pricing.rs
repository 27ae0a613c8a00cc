use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{AppError, Result};
use dashboard_core::{PriceEntry, PriceRow};

/// Read-only mapping from model identifier to its per-1k unit prices.
///
/// Lookups are fallible on purpose: a model with no entry is a
/// configuration gap the caller must account for, not a NaN waiting to
/// happen.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    entries: HashMap<String, PriceEntry>,
}

impl PriceTable {
    /// The compiled-in default table.
    pub fn builtin() -> Result<Self> {
        let data = include_str!("../initial-pricing.json");
        let rows: Vec<PriceRow> = serde_json::from_str(data)?;
        Ok(Self::from_rows(&rows))
    }

    pub fn from_rows(rows: &[PriceRow]) -> Self {
        let entries = rows
            .iter()
            .map(|row| {
                (
                    row.model.clone(),
                    PriceEntry {
                        input_per_1k: row.input_per_1k,
                        output_per_1k: row.output_per_1k,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn entry(&self, model: &str) -> Option<&PriceEntry> {
        self.entries.get(model)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load a pricing table: the override file when given, otherwise the
/// compiled-in defaults.
pub fn load_table(override_path: Option<&Path>) -> Result<PriceTable> {
    match override_path {
        Some(path) => {
            let rows = load_price_rows(path)?;
            if rows.is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "pricing file {} has no entries",
                    path.display()
                )));
            }
            Ok(PriceTable::from_rows(&rows))
        }
        None => PriceTable::builtin(),
    }
}

pub fn load_price_rows(path: &Path) -> Result<Vec<PriceRow>> {
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(AppError::from)
}

pub fn write_price_rows(path: &Path, rows: &[PriceRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, rows).map_err(AppError::from)
}
