//! Well-known role name constants.
//!
//! Roles arrive with the session cookie; there is no role table.

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_TEACHER: &str = "teacher";
