// Errors that abort a dashboard run
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Failed to list services for cluster '{cluster}': {message}")]
    ServiceListing { cluster: String, message: String },
    #[error("Failed to describe target group '{name}': {message}")]
    TargetGroupLookup { name: String, message: String },
    #[error("Failed to render dashboard template '{template}': {message}")]
    Render { template: String, message: String },
    #[error("Failed to publish dashboard '{dashboard}': {message}")]
    Publish { dashboard: String, message: String },
}

pub type DashboardResult<T> = Result<T, DashboardError>;
