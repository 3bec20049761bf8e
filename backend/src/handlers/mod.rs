//! HTTP handlers for the Field Monitoring Sync Platform

pub mod dashboard;
pub mod farm;
pub mod health;
pub mod heatmap;
pub mod infestation;
pub mod monitoring;
pub mod report;

pub use dashboard::*;
pub use farm::*;
pub use health::*;
pub use heatmap::*;
pub use infestation::*;
pub use monitoring::*;
pub use report::*;
