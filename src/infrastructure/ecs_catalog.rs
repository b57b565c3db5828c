// ECS adapter - Lists the services of a cluster one page at a time
use crate::application::cloud_repository::{ServiceCatalog, ServicePage};
use crate::application::error::{DashboardError, DashboardResult};
use async_trait::async_trait;
use aws_sdk_ecs::error::DisplayErrorContext;

#[derive(Debug, Clone)]
pub struct EcsServiceCatalog {
    client: aws_sdk_ecs::Client,
}

impl EcsServiceCatalog {
    pub fn new(client: aws_sdk_ecs::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ServiceCatalog for EcsServiceCatalog {
    async fn list_services(
        &self,
        cluster_name: &str,
        next_token: Option<String>,
    ) -> DashboardResult<ServicePage> {
        let output = self
            .client
            .list_services()
            .cluster(cluster_name)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| DashboardError::ServiceListing {
                cluster: cluster_name.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(ServicePage {
            service_arns: output.service_arns.unwrap_or_default(),
            next_token: output.next_token,
        })
    }
}
