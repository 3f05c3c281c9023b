//! Logger setup for the console.
//!
//! Command output goes to stdout with `println!`; the logger carries
//! diagnostics only. Verbosity follows `RUST_LOG`, defaulting to `info`.

pub mod formats;

use flexi_logger::Logger;

use crate::Error;

pub fn init() -> Result<(), Error> {
    Logger::try_with_env_or_str("info")?
        .format(formats::cli_format)
        .log_to_stdout()
        .start()?;

    Ok(())
}
