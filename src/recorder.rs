// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::{Fault, Lap, Recording};
use eyre::{bail, Result};
use std::{cmp::Ordering,
          io::{self, BufRead, Write},
          str};


/// Records lap times from `input` until the device reports the terminal
/// `0` reading, writing one CSV row per completed lap to `sink`. With
/// `verbose` set, progress text goes to standard error.
///
/// `input` is anything which can deliver raw lines, blocking until one is
/// available - in production the serial handle of the lap trigger device.
/// `sink` is anything which accepts text, usually the output CSV file.
/// Returns the completed `Recording` on normal termination.
pub fn record<R, W>(input: &mut R,
                    sink: &mut W,
                    verbose: bool)
                    -> Result<Recording>
  where R: BufRead,
        W: Write
{
  record_with(input, sink, &mut io::stderr(), verbose)
}

/// Same as `record`, but with the diagnostic stream passed in explicitly.
///
/// With `verbose` set, every loop iteration performs exactly two writes to
/// `diagnostics`: one announcing the raw reading received, one announcing
/// the completed lap (or, on the terminal reading, the end of the
/// session). Without `verbose`, `diagnostics` is never written to.
pub fn record_with<R, W, D>(input: &mut R,
                            sink: &mut W,
                            diagnostics: &mut D,
                            verbose: bool)
                            -> Result<Recording>
  where R: BufRead,
        W: Write,
        D: Write
{
  // the whole session state: the reading which closed the previous lap.
  // lap 1 is measured against the device clock epoch, i.e. reading 0.
  let mut previous_reading = 0_i64;
  let mut laps: Vec<Lap> = Vec::new();

  loop {
    let reading = next_reading(input)?;
    if verbose {
      let text = format!("reading received: {}\n", reading);
      diagnostics.write_all(text.as_bytes())?;
    }

    match reading.cmp(&0) {
      Ordering::Less => bail!(Fault::CounterOverflow { reading }),
      Ordering::Equal => {
        if verbose {
          diagnostics.write_all(b"no further laps, recording complete\n")?;
        }
        return Ok(Recording::new(laps));
      }
      Ordering::Greater => {
        if reading < previous_reading {
          bail!(Fault::NonMonotonic { reading,
                                      previous: previous_reading, });
        }

        let lap =
          Lap::new(laps.len() + 1, reading, reading - previous_reading);
        previous_reading = reading;

        sink.write_all(lap.csv_row()?.as_bytes())?;
        if verbose {
          let text = format!("lap {}: {} ({}ms)\n",
                             lap.number(),
                             lap.human_readable()?,
                             lap.duration());
          diagnostics.write_all(text.as_bytes())?;
        }
        laps.push(lap);
      }
    }
  }
}

/// Reads one raw line from `input`, blocking until the transport delivers
/// it, and parses it as a base 10 counter reading. The line terminator and
/// surrounding whitespace are ignored, so `\r\n` terminated lines from the
/// usual serial firmware parse the same as bare `\n` ones.
fn next_reading<R>(input: &mut R) -> Result<i64>
  where R: BufRead
{
  let mut raw = Vec::new();
  if input.read_until(b'\n', &mut raw)? == 0 {
    bail!(Fault::StreamClosed);
  }

  let line = match str::from_utf8(&raw) {
    Ok(text) => text.trim(),
    Err(_) => {
      let lossy = String::from_utf8_lossy(&raw).trim().to_string();
      bail!(Fault::Malformed { line: lossy });
    }
  };

  match line.parse() {
    Ok(reading) => Ok(reading),
    Err(_) => bail!(Fault::Malformed { line: line.to_string() }),
  }
}
