use std::io::Write;

use flexi_logger::{DeferredNow, style};
use log::Record;

/// `HH:MM:SS LEVEL target: message`, level coloured.
pub fn cli_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let level = record.level();
    write!(
        w,
        "{} {} {}: {}",
        now.format("%H:%M:%S"),
        style(level).paint(format!("{level:<5}")),
        record.target(),
        record.args()
    )
}
