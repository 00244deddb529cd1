//! Filename and folder naming conventions.
//!
//! Covers the uploads directory filenames, the image-host folder path
//! components, and the export attachment filename.

/// Prefix for the export attachment filename and the image-host folder tree.
pub const EXPORT_FILENAME_PREFIX: &str = "makerfest-posters";

/// Sanitize a folder path component for the image host.
///
/// Anything outside `[A-Za-z0-9]` becomes an underscore, so student and
/// class names produce safe, predictable folder paths.
pub fn sanitize_component(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Filename for a stored form upload: `{millis}-{original with spaces -> _}`.
pub fn upload_filename(stamp_millis: i64, original: &str) -> String {
    format!("{stamp_millis}-{}", original.replace(' ', "_"))
}

/// Suggested filename for a spreadsheet export download.
///
/// Convention: `makerfest-posters-{classFilter}-{unixMillis}.csv`.
pub fn export_filename(class_filter: &str, stamp_millis: i64) -> String {
    format!("{EXPORT_FILENAME_PREFIX}-{class_filter}-{stamp_millis}.csv")
}
