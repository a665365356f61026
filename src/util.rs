// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::Fault;
use chrono::{Local, NaiveDateTime};
use eyre::{bail, ensure, Result};
use std::fmt::Write;


/// Base name used for output files unless the caller overrides it.
pub const DEFAULT_BASE_NAME: &str = "track_times";

/// Timestamp format used for output files unless the caller overrides it.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H%M";


/// Renders a millisecond duration as `minutes:seconds.millis`, e.g.
/// `305657` as `"5:5.657"`. None of the three fields is padded. Negative
/// durations are refused with `Fault::NegativeDuration`.
pub fn human_readable(millis: i64) -> Result<String> {
  if millis < 0 {
    bail!(Fault::NegativeDuration { millis });
  }

  Ok(format!("{}:{}.{}",
             millis / 60_000,
             (millis / 1_000) % 60,
             millis % 1_000))
}

/// Produces a default output filename of the form `<base>_<timestamp>.csv`
/// from the local wall clock, e.g. `track_times_2021-03-14_1509.csv`.
pub fn generate_filename(base: Option<&str>,
                         timestamp_format: Option<&str>)
                         -> Result<String> {
  generate_filename_at(base.unwrap_or(DEFAULT_BASE_NAME),
                       timestamp_format.unwrap_or(DEFAULT_TIMESTAMP_FORMAT),
                       &Local::now().naive_local())
}

/// Same as `generate_filename`, but with the timestamp passed in
/// explicitly instead of read off the wall clock.
pub fn generate_filename_at(base: &str,
                            timestamp_format: &str,
                            datetime: &NaiveDateTime)
                            -> Result<String> {
  let mut timestamp = String::new();
  if write!(timestamp, "{}", datetime.format(timestamp_format)).is_err() {
    bail!("timestamp format '{}' is not renderable", timestamp_format);
  }

  // a format like '%x %X' renders the date with slashes in it
  ensure!(!timestamp.contains('/') && !timestamp.contains('\\'),
          "timestamp format '{}' would place a path separator in the \
           filename",
          timestamp_format);

  Ok(format!("{}_{}.csv", base, timestamp))
}
