//! # CSV Export
//!
//! Writes the filtered view as a spreadsheet-friendly CSV file.
//!
//! ## Format
//!
//! ```text
//! <BOM>Name,Department,Status,Start Date,End Date,Location,Program,Notes
//! "Dr. Lim","JLKTD","External Assignment","2025-11-11","2025-11-13","","",""
//! ```
//!
//! - The header row is plain, fixed labels.
//! - Every data field is quoted, always, with embedded quotes doubled
//!   (`He said "hi"` → `"He said ""hi"""`).
//! - Empty optional fields are written as `""`, never as a null marker.
//! - Rows are joined by `\n`; there is no trailing newline.
//! - The file starts with a UTF-8 byte-order mark so spreadsheet tools pick the right
//!   encoding for names with non-ASCII characters.
//!
//! The file is named `attendance_report_<start>_to_<end>.csv` after the window it covers.

use crate::commands::{filter, CmdMessage, CmdResult};
use crate::error::{Result, RollcallError};
use crate::model::{AttendanceRecord, FilterWindow};
use crate::store::RecordStore;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs;
use std::path::Path;

pub const BOM: &str = "\u{feff}";
pub const MIME_TYPE: &str = "text/csv";
pub const HEADER: [&str; 8] = [
    "Name",
    "Department",
    "Status",
    "Start Date",
    "End Date",
    "Location",
    "Program",
    "Notes",
];

pub fn report_filename(window: &FilterWindow) -> String {
    format!(
        "attendance_report_{}_to_{}.csv",
        window.range_start, window.range_end
    )
}

/// Renders the CSV text, without the byte-order mark.
pub fn to_csv(records: &[AttendanceRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for r in records {
        let start = r.start_date.to_string();
        let end = r.end_date.to_string();
        writer.write_record([
            r.person_name.as_str(),
            r.department_code.as_str(),
            r.status.label(),
            start.as_str(),
            end.as_str(),
            r.location.as_str(),
            r.program_name.as_str(),
            r.notes.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RollcallError::Io(e.into_error()))?;
    let body = String::from_utf8_lossy(&bytes).into_owned();

    let mut out = HEADER.join(",");
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body.strip_suffix('\n').unwrap_or(body.as_str()));
    }
    Ok(out)
}

/// The exact bytes of the report file: BOM followed by the CSV text.
pub fn encode(records: &[AttendanceRecord]) -> Result<Vec<u8>> {
    let csv = to_csv(records)?;
    let mut bytes = Vec::with_capacity(BOM.len() + csv.len());
    bytes.extend_from_slice(BOM.as_bytes());
    bytes.extend_from_slice(csv.as_bytes());
    Ok(bytes)
}

/// Filters the store by `window` and writes the report file into `dir`.
pub fn run<S: RecordStore>(store: &S, window: &FilterWindow, dir: &Path) -> Result<CmdResult> {
    let view = filter::run(store.list(), window);
    let bytes = encode(&view)?;

    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(report_filename(window));
    fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), rows = view.len(), "Exported attendance report");

    let mut result = CmdResult::default();
    if view.is_empty() {
        result.add_message(CmdMessage::info(
            "No records in this window; the file only has the header row.",
        ));
    }
    let noun = if view.len() == 1 { "record" } else { "records" };
    result.add_message(CmdMessage::success(format!(
        "Exported {} {} to {}",
        view.len(),
        noun,
        path.display()
    )));
    Ok(result.with_records(view).with_export_path(path))
}
