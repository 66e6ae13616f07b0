//! Admitted-students dashboard.
//!
//! The [`data`] module is the pure core: load once, then filter, aggregate and
//! resolve dependent dropdown options over the immutable dataset. Everything
//! else is the egui shell that calls into it on every selection change.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
