pub mod error;
pub mod mapping;
pub mod output;
pub mod schedule;
pub mod venue;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub use error::ScheduleError;
pub use mapping::{load_team_ids, TeamIdMap};
pub use output::{Game, OutputRow, ScheduleWriter, OUTPUT_FILE_NAME, OUTPUT_HEADER};
pub use schedule::{open_schedule, transform_schedule, RunSummary};
pub use venue::Division;

/// Load the team codes, then convert `schedule` into the platform import at `output`.
pub fn export_schedule(
    division: Division,
    schedule: &Path,
    mapping_codes: &Path,
    output: &Path,
) -> Result<RunSummary> {
    let teams = load_team_ids(mapping_codes)
        .with_context(|| format!("loading team codes from {}", mapping_codes.display()))?;

    let schedule_file = open_schedule(schedule)
        .with_context(|| format!("opening schedule {}", schedule.display()))?;

    info!("writing {}", output.display());
    let mut out = ScheduleWriter::create(output)?;
    let summary = transform_schedule(division, schedule_file, schedule, &teams, &mut out)
        .with_context(|| format!("converting schedule {}", schedule.display()))?;
    Ok(summary)
}
