//! AutoStyle library surface.
//!
//! Exposes the application modules so integration tests can exercise the
//! config store, rule applier, and i18n tables without a running GUI.

pub mod app;
pub mod ui;
