// Capability traits for the cloud services a dashboard run talks to
use crate::application::error::{DashboardError, DashboardResult};
use crate::domain::dashboard::DashboardEntry;
use crate::domain::target_group::TargetGroupRecord;
use async_trait::async_trait;

/// One page of a service listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServicePage {
    pub service_arns: Vec<String>,
    pub next_token: Option<String>,
}

/// Outcome of an exact-name target group query
#[derive(Debug)]
pub enum TargetGroupLookup {
    Found(TargetGroupRecord),
    /// Expected for services without a load balancer
    NotFound,
    Failed(DashboardError),
}

impl TargetGroupLookup {
    /// Keep `Found`/`NotFound` local, surface everything else.
    pub fn into_result(self) -> DashboardResult<Option<TargetGroupRecord>> {
        match self {
            TargetGroupLookup::Found(record) => Ok(Some(record)),
            TargetGroupLookup::NotFound => Ok(None),
            TargetGroupLookup::Failed(err) => Err(err),
        }
    }
}

#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    /// Fetch one page of service ARNs for a cluster
    async fn list_services(
        &self,
        cluster_name: &str,
        next_token: Option<String>,
    ) -> DashboardResult<ServicePage>;
}

#[async_trait]
pub trait TargetGroupDirectory: Send + Sync {
    /// Look up a target group by exact name
    async fn describe_target_group(&self, name: &str) -> TargetGroupLookup;
}

#[async_trait]
pub trait DashboardRenderer: Send + Sync {
    /// Turn the ordered entries into a dashboard document body
    async fn render(&self, template_name: &str, entries: &[DashboardEntry])
        -> DashboardResult<String>;
}

#[async_trait]
pub trait DashboardPublisher: Send + Sync {
    /// Create or overwrite the named dashboard
    async fn put_dashboard(&self, name: &str, body: &str) -> DashboardResult<()>;
}
