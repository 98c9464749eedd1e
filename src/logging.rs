//! Logger construction.
//!
//! Every record goes to stdout and to a per-run log file in the format
//! `[timestamp] [target] [level] > message`. The file is truncated on each
//! run. The logger is built explicitly by the entry point; library modules
//! only use the `log` facade.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::clients::errors::Result;

// Writes every record to stdout and to the run log file
struct DualSink {
    file: File,
}

impl Write for DualSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

/// Install the process-wide logger. `RUST_LOG` filters as usual; the
/// default level is `info`.
pub fn init(log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir)?;
    let file = File::create(log_dir.join("run.log"))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}] > {}",
                buf.timestamp_seconds(),
                record.target(),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(DualSink { file })))
        .init();
    Ok(())
}
