// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Author: Florian Eich <florian@bmc-labs.com>

mod fault;
mod lap;
mod recorder;
mod recording;
mod util;

pub use fault::Fault;
pub use lap::Lap;
pub use recorder::{record, record_with};
pub use recording::Recording;
pub use util::{generate_filename,
               generate_filename_at,
               human_readable,
               DEFAULT_BASE_NAME,
               DEFAULT_TIMESTAMP_FORMAT};
