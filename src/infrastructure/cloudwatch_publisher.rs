// CloudWatch adapter - Publishes the dashboard body, overwriting any previous version
use crate::application::cloud_repository::DashboardPublisher;
use crate::application::error::{DashboardError, DashboardResult};
use async_trait::async_trait;
use aws_sdk_cloudwatch::error::DisplayErrorContext;

#[derive(Debug, Clone)]
pub struct CloudWatchPublisher {
    client: aws_sdk_cloudwatch::Client,
}

impl CloudWatchPublisher {
    pub fn new(client: aws_sdk_cloudwatch::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardPublisher for CloudWatchPublisher {
    async fn put_dashboard(&self, name: &str, body: &str) -> DashboardResult<()> {
        let output = self
            .client
            .put_dashboard()
            .dashboard_name(name)
            .dashboard_body(body)
            .send()
            .await
            .map_err(|e| DashboardError::Publish {
                dashboard: name.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        // Accepted dashboards can still come back with warnings
        for message in output.dashboard_validation_messages.unwrap_or_default() {
            tracing::warn!(
                "Dashboard {} validation at {}: {}",
                name,
                message.data_path.as_deref().unwrap_or("-"),
                message.message.as_deref().unwrap_or_default()
            );
        }

        Ok(())
    }
}
