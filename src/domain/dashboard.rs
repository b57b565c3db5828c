// Dashboard domain model
use serde::Serialize;

const DASHBOARD_NAME_SUFFIX: &str = "-ecs-services-list-dashboard";

/// One service row on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardEntry {
    pub target_group_id: String,
    pub ecs_cluster_name: String,
    pub ecs_service: String,
    pub region: String,
    pub layout_index: usize,
    pub load_balancer: String,
}

/// Name the dashboard is published under for a cluster
pub fn dashboard_name(cluster_name: &str) -> String {
    format!("{}{}", cluster_name, DASHBOARD_NAME_SUFFIX)
}

/// Completion payload returned to whatever triggered the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationResult {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResult {
    pub fn success() -> Self {
        Self {
            status_code: 200,
            // JSON-encoded string, matching what the invoking environment expects
            body: "\"Ended correctly\"".to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            body: message.into(),
        }
    }
}
