use crate::domain::errors::LookupError;
use crate::domain::player::{LookupOutcome, PlayerSummary, split_player_name};
use crate::domain::ports::PlayerStatsProvider;
use csv::StringRecord;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Career span used when the register has no usable debut/final years.
pub const FALLBACK_CAREER_RANGE: (i32, i32) = (2000, 2020);

const WAR_COLUMN: &str = "WAR";

/// Row of the player register (one per player; extra columns ignored).
#[derive(Debug, Clone, Deserialize)]
struct RegisterRecord {
    name_first: String,
    name_last: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    mlb_played_first: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    mlb_played_last: Option<f64>,
}

impl RegisterRecord {
    fn matches(&self, first: &str, last: &str) -> bool {
        self.name_first.trim().eq_ignore_ascii_case(first)
            && self.name_last.trim().eq_ignore_ascii_case(last)
    }

    fn career_range(&self) -> (i32, i32) {
        let year = |v: Option<f64>| v.filter(|y| y.is_finite()).map(|y| y as i32);
        match (year(self.mlb_played_first), year(self.mlb_played_last)) {
            (Some(debut), Some(last)) => (debut, last),
            _ => FALLBACK_CAREER_RANGE,
        }
    }
}

/// Row of the season batting table (one per player season).
#[derive(Debug, Clone, Deserialize)]
struct BattingRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Season")]
    season: i32,
    #[serde(rename = "WAR", default, deserialize_with = "csv::invalid_option")]
    war: Option<f64>,
}

/// Resolves career WAR from a local player register and season batting
/// table. HOFm and JAWS are not derivable from these tables and are always
/// reported as absent.
///
/// WAR is absent only when the batting table has no `WAR` column; blank
/// season values count as zero.
#[derive(Debug, Clone)]
pub struct CsvPlayerStatsProvider {
    register: Vec<RegisterRecord>,
    batting: Vec<BattingRecord>,
    has_war_column: bool,
}

impl CsvPlayerStatsProvider {
    pub fn from_paths(register: &Path, batting: &Path) -> Result<Self, LookupError> {
        let provider = Self::load(
            open(register)?,
            &register.display().to_string(),
            open(batting)?,
            &batting.display().to_string(),
        )?;
        info!(
            "Loaded {} register rows from {:?} and {} batting rows from {:?}",
            provider.register.len(),
            register,
            provider.batting.len(),
            batting
        );
        Ok(provider)
    }

    pub fn from_readers<R1: Read, R2: Read>(register: R1, batting: R2) -> Result<Self, LookupError> {
        Self::load(register, "register", batting, "batting")
    }

    fn load<R1: Read, R2: Read>(
        register: R1,
        register_name: &str,
        batting: R2,
        batting_name: &str,
    ) -> Result<Self, LookupError> {
        let (_, register) = read_records(register, register_name)?;
        let (headers, batting) = read_records(batting, batting_name)?;
        Ok(Self {
            register,
            batting,
            has_war_column: headers.iter().any(|h| h.trim() == WAR_COLUMN),
        })
    }
}

impl PlayerStatsProvider for CsvPlayerStatsProvider {
    fn fetch_player_summary(&self, name: &str) -> LookupOutcome {
        let Some((first, last)) = split_player_name(name) else {
            debug!("Cannot split {:?} into first and last name", name);
            return LookupOutcome::NotFound;
        };

        let Some(player) = self.register.iter().find(|r| r.matches(first, last)) else {
            debug!("No register entry for {} {}", first, last);
            return LookupOutcome::NotFound;
        };

        let (debut, final_season) = player.career_range();
        let wanted = name.trim();
        let seasons: Vec<&BattingRecord> = self
            .batting
            .iter()
            .filter(|row| (debut..=final_season).contains(&row.season))
            .filter(|row| row.name.trim() == wanted)
            .collect();

        if seasons.is_empty() {
            debug!(
                "No batting seasons for {} between {} and {}",
                wanted, debut, final_season
            );
            return LookupOutcome::NotFound;
        }

        let war = self
            .has_war_column
            .then(|| seasons.iter().filter_map(|row| row.war).sum::<f64>());

        debug!(
            "{}: {} seasons {}-{}, career WAR {:?}",
            wanted,
            seasons.len(),
            debut,
            final_season,
            war
        );

        LookupOutcome::Found(PlayerSummary {
            war,
            hofm: None,
            jaws: None,
        })
    }

    fn name(&self) -> &str {
        "csv"
    }
}

fn open(path: &Path) -> Result<BufReader<File>, LookupError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LookupError::SourceUnavailable {
            source_name: path.display().to_string(),
            reason: e.to_string(),
        })
}

fn read_records<T: DeserializeOwned, R: Read>(
    reader: R,
    source_name: &str,
) -> Result<(StringRecord, Vec<T>), LookupError> {
    let malformed = |e: csv::Error| LookupError::MalformedRecord {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    };

    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers().map_err(malformed)?.clone();
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: T = result.map_err(malformed)?;
        records.push(record);
    }
    Ok((headers, records))
}
