//! Miniseed data freshness check.
//!
//! The recorder writes files named like
//! `XX_MSS01_00_HHZ_20220315T081200.msd`; the part after the last `_` is
//! the file's timestamp. The data is fresh when the newest timestamp is at
//! most `max_data_age_secs` old.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::config::MssConfig;
use crate::error::{MssError, Result};
use crate::remote::{run_remote, RemoteSession};

use super::{CheckKind, CheckOutcome};

const DATETIME_FORMATS: &[&str] = &[
    "%Y%m%dT%H%M%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H%M%S%.f",
    "%Y%m%d%H%M%S",
];

const DATE_FORMATS: &[&str] = &["%Y%m%d", "%Y-%m-%d"];

/// Outcome of the data freshness check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFileStatus {
    /// The newest file is recent enough
    pub updated: bool,
    /// Timestamp of the newest file
    pub latest: Option<DateTime<Utc>>,
    /// Most recent files, oldest first
    pub recent_files: Vec<String>,
}

impl DataFileStatus {
    /// Convert into a generic check outcome.
    pub fn outcome(&self, now: DateTime<Utc>) -> CheckOutcome {
        match self.latest {
            None => CheckOutcome::fail(CheckKind::DataFiles, "No miniseed data files found", vec![]),
            Some(latest) => {
                let age = now.signed_duration_since(latest).num_seconds();
                if self.updated {
                    CheckOutcome::pass(
                        CheckKind::DataFiles,
                        format!("Latest data file is {}s old", age),
                        self.recent_files.clone(),
                    )
                } else {
                    CheckOutcome::fail(
                        CheckKind::DataFiles,
                        format!("Miniseed data is outdated (latest {})", latest.to_rfc3339()),
                        self.recent_files.clone(),
                    )
                }
            }
        }
    }
}

/// Command listing the data files.
pub fn listing_command(config: &MssConfig) -> String {
    format!(
        "ls {}/*.{}",
        config.paths.data_dir, config.paths.data_extension
    )
}

/// Parse a UTC timestamp as embedded in data file names.
///
/// Accepts ISO 8601 basic (`20220315T081200`) and extended
/// (`2022-03-15T08:12:00`) forms with optional fraction and trailing `Z`,
/// and plain dates.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();
    let text = text.strip_suffix('Z').unwrap_or(text);

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(date.and_time(NaiveTime::default()).and_utc());
        }
    }

    Err(MssError::parse(
        "data file timestamp",
        format!("'{}' is not a recognised date", text),
    ))
}

/// Extract the timestamp from a data file path.
pub fn parse_file_timestamp(path: &str) -> Result<DateTime<Utc>> {
    let file_name = path.trim().rsplit('/').next().unwrap_or(path);
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    let stamp = stem.rsplit('_').next().unwrap_or(stem);

    parse_timestamp(stamp).map_err(|_| {
        MssError::parse(
            "data file timestamp",
            format!("cannot read a date from '{}'", path.trim()),
        )
    })
}

/// Evaluate a data file listing against the current time.
///
/// `recent_files` holds the last `keep` files by timestamp, oldest first,
/// whether or not the data is fresh.
pub fn evaluate_datafiles(
    listing: &[String],
    now: DateTime<Utc>,
    max_age: TimeDelta,
    keep: usize,
) -> Result<DataFileStatus> {
    let mut files: Vec<String> = listing
        .iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();
    files.sort();

    let mut dated = Vec::with_capacity(files.len());
    for file in files {
        let stamp = parse_file_timestamp(&file)?;
        dated.push((file, stamp));
    }

    let Some(latest) = dated.iter().map(|(_, stamp)| *stamp).max() else {
        return Ok(DataFileStatus {
            updated: false,
            latest: None,
            recent_files: Vec::new(),
        });
    };

    let updated = now.signed_duration_since(latest) <= max_age;

    dated.sort_by_key(|(_, stamp)| *stamp);
    let skip = dated.len().saturating_sub(keep);
    let recent_files = dated.into_iter().skip(skip).map(|(file, _)| file).collect();

    Ok(DataFileStatus {
        updated,
        latest: Some(latest),
        recent_files,
    })
}

/// Run the data freshness check on the station.
pub fn check_datafiles(
    session: &mut dyn RemoteSession,
    config: &MssConfig,
    now: DateTime<Utc>,
) -> Result<DataFileStatus> {
    tracing::info!("Checking the miniseed data.");

    let output = run_remote(session, &listing_command(config));
    let max_age = config
        .checks
        .max_data_age()
        .ok_or_else(|| MssError::ConfigValidationError {
            message: format!(
                "checks.max_data_age_secs {} is out of range",
                config.checks.max_data_age_secs
            ),
        })?;
    let status = evaluate_datafiles(&output.stdout, now, max_age, config.checks.recent_files)?;

    match status.latest {
        None => {
            tracing::error!("No data files found in the mseed folder.");
        }
        Some(latest) if status.updated => {
            tracing::info!("Found up-to-date miniseed data. mss_record is writing data files.");
            tracing::info!(
                "The latest {} data files:\n{}",
                status.recent_files.len(),
                status.recent_files.join("\n")
            );
            tracing::debug!("Latest data file timestamp: {}", latest);
        }
        Some(latest) => {
            tracing::error!(
                "No up-to-date miniseed files found. now: {}; last_file: {};",
                now,
                latest
            );
            tracing::error!("The miniseed data is outdated. mss_record is not writing miniseed data.");
            tracing::info!(
                "The latest {} data files:\n{}",
                status.recent_files.len(),
                status.recent_files.join("\n")
            );
        }
    }

    Ok(status)
}
