//! Cookie-session helpers.
//!
//! Authentication is a trusted cookie pair set at login: `user_email`
//! carries the identity, `user_role` the derived role. There are no
//! passwords or tokens; the deployment sits behind the school network and
//! the cookies are HttpOnly. Everything downstream treats the identity as
//! already authenticated.

use makerfest_core::roles::{ROLE_STUDENT, ROLE_TEACHER};

/// Identity cookie name.
pub const EMAIL_COOKIE: &str = "user_email";

/// Role cookie name.
pub const ROLE_COOKIE: &str = "user_role";

/// Session lifetime: one week.
pub const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 7;

/// Derive the role for a logging-in email.
///
/// Teachers are recognized by the `teacher` prefix on the address or by
/// membership in the configured allow-list; everyone else is a student.
pub fn resolve_role(email: &str, teacher_emails: &[String]) -> &'static str {
    let is_teacher = email.to_lowercase().starts_with("teacher")
        || teacher_emails.iter().any(|t| t.eq_ignore_ascii_case(email));
    if is_teacher {
        ROLE_TEACHER
    } else {
        ROLE_STUDENT
    }
}

/// Build a `Set-Cookie` value for a session cookie.
pub fn session_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; HttpOnly; Path=/; Max-Age={SESSION_MAX_AGE_SECS}")
}

/// Build a `Set-Cookie` value that clears a session cookie.
pub fn clear_cookie(name: &str) -> String {
    format!("{name}=; HttpOnly; Path=/; Max-Age=0")
}

/// Extract a cookie value from a `Cookie` request header.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}
