// src/output.rs

use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::error::{Result, ScheduleError};

/// Where the platform import file is written, relative to the working directory.
pub const OUTPUT_FILE_NAME: &str = "SE Schedule.csv";

/// Column order of the platform's schedule import.
pub const OUTPUT_HEADER: [&str; 28] = [
    "Start_Date",
    "Start_Time",
    "End_Date",
    "End_Time",
    "Title",
    "Description",
    "Location",
    "Location_URL",
    "Location_Details",
    "All_Day_Event",
    "Event_Type",
    "Tags",
    "Team1_ID",
    "Team1_Division_ID",
    "Team1_Is_Home",
    "Team2_ID",
    "Team2_Division_ID",
    "Team2_Name",
    "Custom_Opponent",
    "Event_ID",
    "Game_ID",
    "Affects_Standings",
    "Points_Win",
    "Points_Loss",
    "Points_Tie",
    "Points_OT_Win",
    "Points_OT_Loss",
    "Division_Override",
];

/// One game in the platform's import layout. Field order must match `OUTPUT_HEADER`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub location_url: String,
    pub location_details: String,
    pub all_day_event: u8,
    pub event_type: &'static str,
    pub tags: String,
    pub team1_id: String,
    pub team1_division_id: String,
    pub team1_is_home: u8,
    pub team2_id: String,
    pub team2_division_id: String,
    pub team2_name: String,
    pub custom_opponent: String,
    pub event_id: String,
    pub game_id: String,
    pub affects_standings: u8,
    pub points_win: String,
    pub points_loss: String,
    pub points_tie: String,
    pub points_ot_win: String,
    pub points_ot_loss: String,
    pub division_override: String,
}

/// The per-game values of an import row, named so home and away cannot trade places.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub venue: &'a str,
    pub venue_url: &'a str,
    pub venue_details: &'a str,
    pub home_id: &'a str,
    pub away_id: &'a str,
}

impl From<Game<'_>> for OutputRow {
    /// Home team goes in the Team1 slot; everything the platform fills in itself stays blank.
    fn from(game: Game<'_>) -> Self {
        Self {
            start_date: game.start_date,
            start_time: game.start_time,
            end_date: game.end_date,
            end_time: game.end_time,
            title: String::new(),
            description: String::new(),
            location: game.venue.to_string(),
            location_url: game.venue_url.to_string(),
            location_details: game.venue_details.to_string(),
            all_day_event: 0,
            event_type: "Game",
            tags: String::new(),
            team1_id: game.home_id.to_string(),
            team1_division_id: String::new(),
            team1_is_home: 1,
            team2_id: game.away_id.to_string(),
            team2_division_id: String::new(),
            team2_name: String::new(),
            custom_opponent: String::new(),
            event_id: String::new(),
            game_id: String::new(),
            affects_standings: 1,
            points_win: String::new(),
            points_loss: String::new(),
            points_tie: String::new(),
            points_ot_win: String::new(),
            points_ot_loss: String::new(),
            division_override: String::new(),
        }
    }
}

/// Line-at-a-time CSV sink. Every field, `Location_URL` included, goes through the
/// same rule: quoted only when it holds a comma, quote or line break.
pub struct ScheduleWriter<W: Write> {
    inner: csv::Writer<W>,
    path: PathBuf,
}

impl ScheduleWriter<File> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file, path))
    }
}

impl<W: Write> ScheduleWriter<W> {
    /// `path` is only used to label errors.
    pub fn new(writer: W, path: &Path) -> Self {
        let inner = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .from_writer(writer);
        Self {
            inner,
            path: path.to_path_buf(),
        }
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.inner
            .write_record(OUTPUT_HEADER)
            .map_err(|source| self.csv_error(source))
    }

    pub fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        self.inner
            .serialize(row)
            .map_err(|source| self.csv_error(source))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(|source| ScheduleError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        let path = self.path;
        self.inner
            .into_inner()
            .map_err(|e| ScheduleError::Io {
                path,
                source: e.into_error(),
            })
    }

    fn csv_error(&self, source: csv::Error) -> ScheduleError {
        ScheduleError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}
