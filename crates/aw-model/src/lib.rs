//! Data model and pure view transforms for the ApiWatch dashboard.
//!
//! Everything in this crate is presentation-side and free of I/O: the wire
//! types mirroring the backend JSON, calendar-month selection with the
//! server-fallback reconciliation policy, trace-log day grouping, cosmetic
//! log-message cleanup, chart point shaping, and the controls-panel save
//! validation. The frontend crate renders what these functions return.

pub mod chart;
pub mod clean;
pub mod controls;
pub mod format;
pub mod period;
pub mod trace;
pub mod types;
