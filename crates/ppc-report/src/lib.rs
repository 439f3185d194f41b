//! Export of the cannibalization action plan and the harvest list.
//!
//! Both tables are materialized as polars frames and written as CSV, so
//! column order and names stay identical between file and in-memory use.

mod error;
mod export;
mod frames;

pub use error::{ReportError, Result};
pub use export::{
    ACTION_PLAN_FILE, ExportPaths, HARVEST_FILE, write_action_plan, write_frame_csv,
    write_harvest_list, write_outputs,
};
pub use frames::{ACTION_PLAN_COLUMNS, HARVEST_COLUMNS, action_plan_frame, harvest_frame};
