//! Teacher spreadsheet export.
//!
//! Builds the CSV handed back by the bulk-export endpoint from the mirror
//! store's documents. The column set, ordering, and quoting are a stable
//! contract with the teachers' spreadsheet tooling; in particular the
//! trailing poster-link column is intentionally duplicated.

use crate::types::Timestamp;

/// Header row, in column order.
pub const EXPORT_HEADERS: [&str; 7] = [
    "Student Name",
    "Class",
    "Project Title",
    "Status",
    "Submission Date",
    "Cloudinary Poster Link",
    "PDF Link",
];

/// Sentinel for records without a published poster.
pub const NOT_UPLOADED: &str = "Not uploaded";

/// Filter value meaning "no class filter".
pub const ALL_CLASSES: &str = "All";

/// The slice of a mirror document the export consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRecord {
    pub student_name: String,
    pub class_group: String,
    pub project_title: String,
    /// Absent or empty means the record never left draft.
    pub status: Option<String>,
    /// Mirror sync timestamp in unix milliseconds.
    pub synced_at_millis: Option<i64>,
    pub poster_url: Option<String>,
}

/// Build the export spreadsheet for the given records.
///
/// `class_filter` of `None` or `"All"` includes everything; any other
/// value restricts to records whose class matches exactly. Rows are
/// sorted by `(class, student name)` ascending, case-insensitively.
pub fn build_spreadsheet(records: Vec<ExportRecord>, class_filter: Option<&str>) -> String {
    let mut rows: Vec<ExportRecord> = match class_filter {
        None => records,
        Some(ALL_CLASSES) => records,
        Some(class) => records
            .into_iter()
            .filter(|r| r.class_group == class)
            .collect(),
    };

    rows.sort_by_cached_key(|r| (r.class_group.to_lowercase(), r.student_name.to_lowercase()));

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(EXPORT_HEADERS.join(","));
    for row in &rows {
        lines.push(format_row(row));
    }
    lines.join("\n")
}

fn format_row(record: &ExportRecord) -> String {
    let status = match record.status.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => "draft",
    };
    let poster_link = match record.poster_url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => NOT_UPLOADED,
    };
    let date = submission_date(record.synced_at_millis);

    [
        record.student_name.as_str(),
        record.class_group.as_str(),
        record.project_title.as_str(),
        status,
        date.as_str(),
        poster_link,
        // The final column repeats the poster link verbatim.
        poster_link,
    ]
    .iter()
    .map(|value| csv_cell(value))
    .collect::<Vec<_>>()
    .join(",")
}

/// Human-readable submission date (`M/D/YYYY`) from the sync timestamp,
/// or `N/A` when the mirror never recorded one.
fn submission_date(synced_at_millis: Option<i64>) -> String {
    synced_at_millis
        .and_then(Timestamp::from_timestamp_millis)
        .map(|ts| ts.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Enclose a value in double quotes, doubling any embedded quotes.
fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
