// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use serde::Deserialize;
use std::{error, fmt};


/// Classifies everything that can cut a capture session short.
///
/// A `Fault` travels inside `eyre::Report` wherever this crate returns a
/// `Result`. Callers which need to tell fault classes apart - retry a
/// dropped connection vs discard an overflowed session, say - recover it
/// with `report.downcast_ref::<Fault>()`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub enum Fault {
  /// A raw line could not be decoded and parsed as a base 10 counter
  /// reading.
  Malformed { line: String },
  /// The device reported a negative counter reading, i.e. its internal
  /// counter has wrapped around. All subsequent readings of this session
  /// are untrustworthy.
  CounterOverflow { reading: i64 },
  /// A positive reading came in below its predecessor. The timeline is no
  /// longer monotonic, so every delta from here on would be wrong.
  NonMonotonic { reading: i64, previous: i64 },
  /// The transport closed before the device sent the terminal `0`.
  StreamClosed,
  /// A duration handed to the formatter was negative.
  NegativeDuration { millis: i64 },
}

/// The following traits - `fmt::Display` and `error::Error` - are required
/// in addition to deriving the `Debug` trait for `Fault` to implement the
/// `error::Error` trait fully.
impl fmt::Display for Fault {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Malformed { line } => {
        write!(f, "line '{}' is not a counter reading", line)
      }
      Self::CounterOverflow { reading } => {
        write!(f, "device counter overflowed (reading {})", reading)
      }
      Self::NonMonotonic { reading, previous } => {
        write!(f,
               "reading {} is below its predecessor {}",
               reading, previous)
      }
      Self::StreamClosed => {
        write!(f, "input stream closed before the terminal reading")
      }
      Self::NegativeDuration { millis } => {
        write!(f, "durations must be non-negative (got {}ms)", millis)
      }
    }
  }
}

impl error::Error for Fault {}


#[cfg(test)]
mod tests {
  use super::Fault;
  use pretty_assertions::assert_eq;


  #[test]
  fn fault_display_test() {
    assert_eq!("line 'warblgarbl' is not a counter reading",
               &format!("{}",
                        Fault::Malformed { line: "warblgarbl".to_string() }));
    assert_eq!("device counter overflowed (reading -21)",
               &format!("{}", Fault::CounterOverflow { reading: -21 }));
    assert_eq!("reading 3000 is below its predecessor 5000",
               &format!("{}",
                        Fault::NonMonotonic { reading:  3000,
                                              previous: 5000, }));
    assert_eq!("input stream closed before the terminal reading",
               &format!("{}", Fault::StreamClosed));
    assert_eq!("durations must be non-negative (got -3ms)",
               &format!("{}", Fault::NegativeDuration { millis: -3 }));
  }

  #[test]
  fn fault_downcast_test() {
    let report = eyre::Report::new(Fault::StreamClosed);
    assert_eq!(Some(&Fault::StreamClosed), report.downcast_ref::<Fault>());
  }
}
