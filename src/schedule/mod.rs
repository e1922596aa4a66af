// src/schedule/mod.rs

pub mod datetime;

use csv::{ReaderBuilder, StringRecord, Trim};
use std::{fs::File, io::Read, io::Write, path::Path};
use tracing::{debug, info};

use crate::{
    error::{Result, ScheduleError},
    mapping::TeamIdMap,
    output::{Game, OutputRow, ScheduleWriter},
    venue::{self, Division},
};

/// The only header layout the league schedule is exported with.
pub const SCHEDULE_HEADER: [&str; 5] = ["Date", "Time", "Home", "Away", "Field"];

const DATE: usize = 0;
const TIME: usize = 1;
const HOME: usize = 2;
const AWAY: usize = 3;
const FIELD: usize = 4;

/// What a finished run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_written: u64,
    pub byes_skipped: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingHeader,
    ReadingRows,
}

/// Open the raw schedule for reading. Done before the output is created so a bad
/// path leaves any earlier export untouched.
pub fn open_schedule(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert the schedule read from `schedule` into platform rows on `out`.
/// `schedule_path` only labels errors.
///
/// `out` is flushed whether or not the run succeeds, so rows written before a
/// failure stay in the file.
pub fn transform_schedule<R: Read, W: Write>(
    division: Division,
    schedule: R,
    schedule_path: &Path,
    teams: &TeamIdMap,
    out: &mut ScheduleWriter<W>,
) -> Result<RunSummary> {
    let result = transform_reader(division, schedule, schedule_path, teams, out);
    let flushed = out.flush();
    let summary = result?;
    flushed?;
    info!(
        division = %division,
        rows = summary.rows_written,
        byes = summary.byes_skipped,
        "schedule converted"
    );
    Ok(summary)
}

fn transform_reader<R: Read, W: Write>(
    division: Division,
    reader: R,
    path: &Path,
    teams: &TeamIdMap,
    out: &mut ScheduleWriter<W>,
) -> Result<RunSummary> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut state = State::AwaitingHeader;
    let mut summary = RunSummary::default();

    for result in rdr.records() {
        let record = result.map_err(|source| ScheduleError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = line_of(&record);

        match state {
            State::AwaitingHeader => {
                if record.iter().ne(SCHEDULE_HEADER) {
                    return Err(ScheduleError::Format {
                        path: path.to_path_buf(),
                        line,
                        message: format!(
                            "expected header {:?}, found {:?}",
                            SCHEDULE_HEADER.join(","),
                            record.iter().collect::<Vec<_>>().join(",")
                        ),
                    });
                }
                out.write_header()?;
                state = State::ReadingRows;
            }
            State::ReadingRows => {
                if record.get(HOME).map_or(false, str::is_empty) {
                    debug!(line, "bye, skipping");
                    summary.byes_skipped += 1;
                    continue;
                }
                if record.len() < SCHEDULE_HEADER.len() {
                    return Err(ScheduleError::Format {
                        path: path.to_path_buf(),
                        line,
                        message: format!(
                            "expected {} fields, found {}",
                            SCHEDULE_HEADER.len(),
                            record.len()
                        ),
                    });
                }
                let row = build_row(division, &record, line, teams)?;
                out.write_row(&row)?;
                summary.rows_written += 1;
            }
        }
    }

    if state == State::AwaitingHeader {
        return Err(ScheduleError::Format {
            path: path.to_path_buf(),
            line: 1,
            message: "schedule is empty, header row missing".to_string(),
        });
    }
    Ok(summary)
}

/// Derive one platform row from a game line.
fn build_row(
    division: Division,
    record: &StringRecord,
    line: u64,
    teams: &TeamIdMap,
) -> Result<OutputRow> {
    let date = datetime::parse_date(&record[DATE]).ok_or_else(|| ScheduleError::Parse {
        line,
        field: "date",
        value: record[DATE].to_string(),
    })?;
    let time = datetime::parse_time(&record[TIME]).ok_or_else(|| ScheduleError::Parse {
        line,
        field: "time",
        value: record[TIME].to_string(),
    })?;

    let start = date.and_time(datetime::normalize_start(time));
    let end = datetime::game_end(start);

    let home_id = team_id(teams, &record[HOME], line)?;
    let away_id = team_id(teams, &record[AWAY], line)?;

    let field = &record[FIELD];
    let url = venue::location_url(field).ok_or_else(|| ScheduleError::Lookup {
        line,
        table: "venue url",
        key: field.to_string(),
    })?;
    let detail = venue::field_detail(division, field).ok_or_else(|| ScheduleError::Lookup {
        line,
        table: match division {
            Division::Bantam => "Bantam field detail",
            Division::Midget => "Midget field detail",
        },
        key: field.to_string(),
    })?;

    Ok(OutputRow::from(Game {
        start_date: datetime::format_date(start.date()),
        start_time: datetime::format_time(start.time()),
        end_date: datetime::format_date(end.date()),
        end_time: datetime::format_time(end.time()),
        venue: field,
        venue_url: url,
        venue_details: detail,
        home_id,
        away_id,
    }))
}

fn team_id<'a>(teams: &'a TeamIdMap, name: &str, line: u64) -> Result<&'a str> {
    teams.get(name).ok_or_else(|| ScheduleError::Lookup {
        line,
        table: "team id",
        key: name.to_string(),
    })
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}
