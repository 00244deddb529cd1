//! Write orchestration for the two-store persistence model.
//!
//! The canonical database commit always happens first; the mirror and
//! image-host side effects follow and are best-effort. Nothing in this
//! module ever rolls back a committed canonical write.

pub mod publish;
pub mod upsert;
