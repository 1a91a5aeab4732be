//! atrio-reports: time-scoped visibility for the closing-report inbox.
//!
//! The inbox lists monthly closing reports grouped by year. Owners hide
//! whole years or individual months from the syndic view; a hidden year
//! wins over any per-month flag, and everything unset is visible. Render
//! decisions go through the same gate as the flat feature overrides.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod period;
pub mod visibility;

pub use period::*;
pub use visibility::*;
