pub mod analytics_service;
pub mod link_service;
pub mod scan_logger;

pub use analytics_service::AnalyticsService;
pub use link_service::{CreateLinkRequest, LinkService};
pub use scan_logger::ScanLogger;
