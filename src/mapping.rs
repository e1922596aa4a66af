// src/mapping.rs

use csv::{ReaderBuilder, Trim};
use std::{
    collections::{hash_map::Entry, HashMap},
    io::Read,
    path::Path,
};
use tracing::{debug, info};

use crate::error::{Result, ScheduleError};

/// Record kind marking a team row in the platform's mapping-code export.
const TEAM_KIND: &str = "Team";

/// Team display name → platform team ID. Filled once by the loader, then only read.
#[derive(Debug, Default, Clone)]
pub struct TeamIdMap {
    ids: HashMap<String, String>,
}

impl TeamIdMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.ids.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Build the team map from the mapping-codes file at `path`.
pub fn load_team_ids(path: &Path) -> Result<TeamIdMap> {
    let file = std::fs::File::open(path).map_err(|source| ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map = read_team_ids(file, path)?;
    info!(teams = map.len(), "loaded team ids from {}", path.display());
    Ok(map)
}

/// Only `name,Team,id` rows count; every other shape is skipped.
fn read_team_ids<R: Read>(reader: R, path: &Path) -> Result<TeamIdMap> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut map = TeamIdMap::default();
    for result in rdr.records() {
        let record = result.map_err(|source| ScheduleError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.len() != 3 || &record[1] != TEAM_KIND {
            continue;
        }

        match map.ids.entry(record[0].to_string()) {
            Entry::Occupied(e) => {
                return Err(ScheduleError::DuplicateKey {
                    path: path.to_path_buf(),
                    line: record.position().map_or(0, |p| p.line()),
                    name: e.key().clone(),
                });
            }
            Entry::Vacant(e) => {
                debug!(team = %e.key(), id = %&record[2], "mapped team");
                e.insert(record[2].to_string());
            }
        }
    }
    Ok(map)
}
