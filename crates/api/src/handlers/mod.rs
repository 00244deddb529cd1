pub mod auth;
pub mod poster;
pub mod project;
pub mod teacher;
pub mod themes;
