// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Jonas Reitemeyer <alumni@bmc-labs.com>
//   Florian Eich <florian@bmc-labs.com>

use super::Lap;
use getset::Getters;
use serde::{Deserialize, Serialize};


/// Holds all laps captured during one recording session, in the order
/// they were completed.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Getters)]
#[getset(get = "pub")]
pub struct Recording {
  laps: Vec<Lap>,
}

impl Recording {
  pub fn new(laps: Vec<Lap>) -> Self {
    Self { laps }
  }

  pub fn number_of_laps(&self) -> usize {
    self.laps.len()
  }

  /// Total session time in milliseconds, i.e. the sum of all lap
  /// durations. Equal to the last counter reading of the session.
  pub fn total_time(&self) -> i64 {
    self.laps.iter().map(|lap| lap.duration()).sum()
  }

  /// The fastest lap of the session, or `None` for an empty session.
  pub fn best_lap(&self) -> Option<Lap> {
    self.laps.iter().min_by_key(|lap| lap.duration()).copied()
  }
}


#[cfg(test)]
mod tests {
  use super::{super::Lap, *};
  use pretty_assertions::assert_eq;


  #[test]
  fn recording_test() {
    let laps = vec![Lap::new(1, 103217, 103217),
                    Lap::new(2, 217456, 114239),
                    Lap::new(3, 298011, 80555),];
    let recording = Recording::new(laps.clone());

    assert_eq!(&laps, recording.laps());
    assert_eq!(3, recording.number_of_laps());
    assert_eq!(298011, recording.total_time());
    assert_eq!(Some(Lap::new(3, 298011, 80555)), recording.best_lap());
  }

  #[test]
  fn empty_recording_test() {
    let recording = Recording::default();

    assert_eq!(0, recording.number_of_laps());
    assert_eq!(0, recording.total_time());
    assert_eq!(None, recording.best_lap());
  }
}
