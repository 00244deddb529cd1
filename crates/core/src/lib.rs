//! Domain logic for the MakerFest Portfolio platform.
//!
//! Everything in this crate is pure: no I/O, no clocks beyond values the
//! caller passes in, no mutable globals. The db, mirror, media, and api
//! crates layer persistence and transport on top of these types.

pub mod error;
pub mod export;
pub mod hashing;
pub mod naming;
pub mod poster;
pub mod roles;
pub mod status;
pub mod themes;
pub mod types;
pub mod validation;
