// In-memory capability doubles shared by the unit tests
use crate::application::cloud_repository::{
    DashboardPublisher, DashboardRenderer, ServiceCatalog, ServicePage, TargetGroupDirectory,
    TargetGroupLookup,
};
use crate::application::error::{DashboardError, DashboardResult};
use crate::domain::dashboard::DashboardEntry;
use crate::domain::target_group::TargetGroupRecord;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub struct FakeCatalog {
    pages: Vec<ServicePage>,
    requested: Mutex<Vec<Option<String>>>,
    fail_after: Option<usize>,
}

impl FakeCatalog {
    pub fn new(pages: Vec<ServicePage>) -> Self {
        Self {
            pages,
            requested: Mutex::new(Vec::new()),
            fail_after: None,
        }
    }

    /// Fail every request after the first `pages` succeed
    pub fn fail_after(mut self, pages: usize) -> Self {
        self.fail_after = Some(pages);
        self
    }

    pub fn requested_tokens(&self) -> Vec<Option<String>> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ServiceCatalog for FakeCatalog {
    async fn list_services(
        &self,
        cluster_name: &str,
        next_token: Option<String>,
    ) -> DashboardResult<ServicePage> {
        let index = {
            let mut requested = self.requested.lock().unwrap();
            requested.push(next_token);
            requested.len() - 1
        };

        if self.fail_after.is_some_and(|limit| index >= limit) {
            return Err(DashboardError::ServiceListing {
                cluster: cluster_name.to_string(),
                message: "ThrottlingException: Rate exceeded".to_string(),
            });
        }

        Ok(self.pages.get(index).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct FakeTargetGroups {
    records: HashMap<String, TargetGroupRecord>,
    failing: HashSet<String>,
    queried: Mutex<Vec<String>>,
}

impl FakeTargetGroups {
    pub fn with_record(mut self, record: TargetGroupRecord) -> Self {
        self.records.insert(record.name.clone(), record);
        self
    }

    pub fn failing_for(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl TargetGroupDirectory for FakeTargetGroups {
    async fn describe_target_group(&self, name: &str) -> TargetGroupLookup {
        self.queried.lock().unwrap().push(name.to_string());

        if self.failing.contains(name) {
            return TargetGroupLookup::Failed(DashboardError::TargetGroupLookup {
                name: name.to_string(),
                message: "AccessDenied".to_string(),
            });
        }

        match self.records.get(name) {
            Some(record) => TargetGroupLookup::Found(record.clone()),
            None => TargetGroupLookup::NotFound,
        }
    }
}

/// Renders entries as plain JSON and remembers what it was given
#[derive(Default)]
pub struct JsonRenderer {
    pub rendered: Mutex<Vec<Vec<DashboardEntry>>>,
}

#[async_trait]
impl DashboardRenderer for JsonRenderer {
    async fn render(
        &self,
        _template_name: &str,
        entries: &[DashboardEntry],
    ) -> DashboardResult<String> {
        self.rendered.lock().unwrap().push(entries.to_vec());
        serde_json::to_string(entries).map_err(|e| DashboardError::Render {
            template: "json".to_string(),
            message: e.to_string(),
        })
    }
}

#[derive(Default)]
pub struct RecordingPublisher {
    pub published: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingPublisher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn published(&self) -> Vec<(String, String)> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl DashboardPublisher for RecordingPublisher {
    async fn put_dashboard(&self, name: &str, body: &str) -> DashboardResult<()> {
        if self.fail {
            return Err(DashboardError::Publish {
                dashboard: name.to_string(),
                message: "InvalidParameterInput".to_string(),
            });
        }
        self.published
            .lock()
            .unwrap()
            .push((name.to_string(), body.to_string()));
        Ok(())
    }
}
