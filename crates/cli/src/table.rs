//! Sweep tables: one row per sampled frame, written as CSV or Parquet.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tetrabook::sweep::Sample;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(TableFormat::Csv),
            Some("parquet") => Ok(TableFormat::Parquet),
            other => bail!("unsupported table extension {:?} (use .csv or .parquet)", other),
        }
    }
}

/// Columns: angle, facing, tip_x/y/z, vol_c0, vol_c1, deviation, inadvertent (null when skipped).
pub fn samples_frame(samples: &[Sample]) -> PolarsResult<DataFrame> {
    let angle: Vec<f64> = samples.iter().map(|s| s.angle).collect();
    let facing: Vec<String> = samples.iter().map(|s| s.facing.to_string()).collect();
    let tip_x: Vec<f64> = samples.iter().map(|s| s.tip.x).collect();
    let tip_y: Vec<f64> = samples.iter().map(|s| s.tip.y).collect();
    let tip_z: Vec<f64> = samples.iter().map(|s| s.tip.z).collect();
    let vol_c0: Vec<f64> = samples.iter().map(|s| s.complementary[0]).collect();
    let vol_c1: Vec<f64> = samples.iter().map(|s| s.complementary[1]).collect();
    let deviation: Vec<f64> = samples.iter().map(Sample::relative_deviation).collect();
    let inadvertent: Vec<Option<f64>> = samples.iter().map(|s| s.inadvertent).collect();
    df!(
        "angle" => angle,
        "facing" => facing,
        "tip_x" => tip_x,
        "tip_y" => tip_y,
        "tip_z" => tip_z,
        "vol_c0" => vol_c0,
        "vol_c1" => vol_c1,
        "deviation" => deviation,
        "inadvertent" => inadvertent
    )
}

/// Write `samples` to `path`, picking the format from the extension.
pub fn write_table(samples: &[Sample], path: &Path) -> Result<TableFormat> {
    let format = TableFormat::from_path(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating table dir {}", parent.display()))?;
        }
    }
    let mut df = samples_frame(samples)?;
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        TableFormat::Csv => {
            CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        }
        TableFormat::Parquet => {
            ParquetWriter::new(file).finish(&mut df)?;
        }
    }
    Ok(format)
}
