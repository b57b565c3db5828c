// Dashboard service - Discover services, resolve target groups, publish the dashboard
use crate::application::cloud_repository::{
    DashboardPublisher, DashboardRenderer, ServiceCatalog, TargetGroupDirectory,
};
use crate::application::correlator::correlate;
use crate::application::error::DashboardResult;
use crate::application::service_collector::{collect_all_services, filter_short_names};
use crate::domain::dashboard::{DashboardEntry, dashboard_name};
use crate::domain::service::ServiceShortName;
use crate::domain::target_group::TargetGroupRecord;
use crate::infrastructure::config::DashboardConfig;
use std::sync::Arc;

/// What a successful run published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedDashboard {
    pub name: String,
    pub entry_count: usize,
}

#[derive(Clone)]
pub struct DashboardService {
    catalog: Arc<dyn ServiceCatalog>,
    target_groups: Arc<dyn TargetGroupDirectory>,
    renderer: Arc<dyn DashboardRenderer>,
    publisher: Arc<dyn DashboardPublisher>,
    config: DashboardConfig,
}

impl DashboardService {
    pub fn new(
        catalog: Arc<dyn ServiceCatalog>,
        target_groups: Arc<dyn TargetGroupDirectory>,
        renderer: Arc<dyn DashboardRenderer>,
        publisher: Arc<dyn DashboardPublisher>,
        config: DashboardConfig,
    ) -> Self {
        Self {
            catalog,
            target_groups,
            renderer,
            publisher,
            config,
        }
    }

    /// Run the whole pipeline once. Nothing is published unless every step succeeds.
    pub async fn refresh(&self) -> DashboardResult<PublishedDashboard> {
        let entries = self.build_entries().await?;
        let body = self
            .renderer
            .render(&self.config.template_name, &entries)
            .await?;

        let name = dashboard_name(&self.config.ecs_cluster);
        self.publisher.put_dashboard(&name, &body).await?;

        tracing::info!(
            "Published dashboard {} with {} services",
            name,
            entries.len()
        );

        Ok(PublishedDashboard {
            name,
            entry_count: entries.len(),
        })
    }

    /// Discover services and correlate them with their target groups
    pub async fn build_entries(&self) -> DashboardResult<Vec<DashboardEntry>> {
        let cluster = &self.config.ecs_cluster;

        let service_arns = collect_all_services(self.catalog.as_ref(), cluster).await?;
        let short_names = filter_short_names(&service_arns);
        tracing::info!(
            "Found {} services in cluster {}, {} with usable names",
            service_arns.len(),
            cluster,
            short_names.len()
        );

        let target_groups = self.resolve_target_groups(&short_names).await?;

        Ok(correlate(
            cluster,
            &self.config.ecs_region_name,
            &short_names,
            &target_groups,
        ))
    }

    async fn resolve_target_groups(
        &self,
        short_names: &[ServiceShortName],
    ) -> DashboardResult<Vec<TargetGroupRecord>> {
        let mut records = Vec::new();

        for name in short_names {
            let lookup = self
                .target_groups
                .describe_target_group(name.as_str())
                .await;

            match lookup.into_result()? {
                Some(record) => records.push(record),
                None => {
                    tracing::debug!("No target group for service {}", name);
                }
            }
        }

        Ok(records)
    }
}
