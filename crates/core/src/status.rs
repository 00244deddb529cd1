//! Project lifecycle status.
//!
//! A project is either a work-in-progress draft or has been sent to the
//! teacher. Submission is not a lock: owners may keep editing and re-submit,
//! so the status is freely re-settable.

/// Lifecycle status stored in the `projects.status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Draft,
    Submitted,
}

impl ProjectStatus {
    /// Database/wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
        }
    }

    /// Parse a caller-supplied status, treating anything that is not
    /// exactly `"submitted"` as a draft.
    pub fn parse_or_draft(value: &str) -> Self {
        match value {
            "submitted" => Self::Submitted,
            _ => Self::Draft,
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
