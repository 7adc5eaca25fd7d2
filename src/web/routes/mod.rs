//! Route handlers

pub mod api;
pub mod charts;
pub mod dashboard;
pub mod health;
