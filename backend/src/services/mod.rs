//! Business logic services for the Field Monitoring Sync Platform

pub mod dashboard;
pub mod farm;
pub mod heatmap;
pub mod infestation;
pub mod monitoring;
pub mod report;

pub use dashboard::DashboardService;
pub use farm::FarmService;
pub use heatmap::HeatmapService;
pub use infestation::InfestationService;
pub use monitoring::MonitoringService;
pub use report::ReportService;
