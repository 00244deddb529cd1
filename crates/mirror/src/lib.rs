//! Best-effort mirror of canonical project records.
//!
//! The teacher dashboard and the spreadsheet export read from a realtime
//! document service rather than the canonical database. This crate writes
//! project documents to that service after every canonical commit and
//! reads the full document set back for exports.
//!
//! The mirror is never authoritative: writes happen strictly after the
//! canonical write, failures are logged and swallowed by callers, and no
//! retry or backoff is attempted, so a mirror reader may observe stale or
//! absent documents for an unbounded window.

mod document;
mod store;

pub use document::MirrorDocument;
pub use store::{MirrorError, MirrorStore};
