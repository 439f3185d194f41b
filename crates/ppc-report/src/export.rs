use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use serde::Serialize;
use tracing::info;

use ppc_core::{AnalysisResult, CannibalizationReport, HarvestReport};

use crate::error::{ReportError, Result};
use crate::frames::{action_plan_frame, harvest_frame};

pub const ACTION_PLAN_FILE: &str = "cannibalization_fix.csv";
pub const HARVEST_FILE: &str = "harvest_keywords.csv";

/// Files written by [`write_outputs`]; `None` when the analysis was empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportPaths {
    pub action_plan: Option<PathBuf>,
    pub harvest_list: Option<PathBuf>,
}

/// Writes a frame as comma-delimited text with a header row.
pub fn write_frame_csv<W: Write>(frame: &mut DataFrame, writer: W) -> Result<()> {
    CsvWriter::new(writer).include_header(true).finish(frame)?;
    Ok(())
}

fn write_frame_file(frame: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    write_frame_csv(frame, file)
}

pub fn write_action_plan(report: &CannibalizationReport, output_dir: &Path) -> Result<Option<PathBuf>> {
    if report.is_clean() {
        return Ok(None);
    }
    let path = output_dir.join(ACTION_PLAN_FILE);
    let mut frame = action_plan_frame(&report.actions)?;
    write_frame_file(&mut frame, &path)?;
    info!(path = %path.display(), rows = frame.height(), "wrote action plan");
    Ok(Some(path))
}

pub fn write_harvest_list(report: &HarvestReport, output_dir: &Path) -> Result<Option<PathBuf>> {
    if report.is_empty() {
        return Ok(None);
    }
    let path = output_dir.join(HARVEST_FILE);
    let mut frame = harvest_frame(&report.candidates)?;
    write_frame_file(&mut frame, &path)?;
    info!(path = %path.display(), rows = frame.height(), "wrote harvest list");
    Ok(Some(path))
}

/// Exports both tables into `output_dir`, creating it when needed.
pub fn write_outputs(result: &AnalysisResult, output_dir: &Path) -> Result<ExportPaths> {
    fs::create_dir_all(output_dir).map_err(|source| ReportError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    Ok(ExportPaths {
        action_plan: write_action_plan(&result.cannibalization, output_dir)?,
        harvest_list: write_harvest_list(&result.harvest, output_dir)?,
    })
}
