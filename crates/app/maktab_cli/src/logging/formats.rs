use flexi_logger::DeferredNow;
use flexi_logger::style;
use log::Record;

/// Terminal format: colored level tag followed by the message.
pub fn cli_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let level = record.level();
    write!(
        w,
        "{} {}",
        style(level).paint(level.to_string()),
        record.args()
    )
}
