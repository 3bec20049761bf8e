//! Domain models for the Field Monitoring Sync Platform

mod dashboard;
mod farm;
mod heatmap;
mod monitoring;
mod plot;
mod sync;

pub use dashboard::*;
pub use farm::*;
pub use heatmap::*;
pub use monitoring::*;
pub use plot::*;
pub use sync::*;
