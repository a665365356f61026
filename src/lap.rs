// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Jonas Reitemeyer <alumni@bmc-labs.com>
//   Florian Eich <florian@bmc-labs.com>

use super::util;
use eyre::Result;
use getset::CopyGetters;
use serde::{Deserialize, Serialize};


/// Holds one completed lap: its lap number (1-based), the counter reading
/// which closed it and its duration in milliseconds.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Lap {
  number:   usize,
  reading:  i64,
  duration: i64,
}

impl Lap {
  pub fn new(number: usize, reading: i64, duration: i64) -> Self {
    Self { number,
           reading,
           duration }
  }

  /// Lap duration rendered as `minutes:seconds.millis`.
  pub fn human_readable(&self) -> Result<String> {
    util::human_readable(self.duration)
  }

  /// One CSV row of the form `<number>,<duration in ms>,<human readable
  /// duration>`, terminated by a newline.
  pub fn csv_row(&self) -> Result<String> {
    Ok(format!("{},{},{}\n",
               self.number,
               self.duration,
               self.human_readable()?))
  }
}
