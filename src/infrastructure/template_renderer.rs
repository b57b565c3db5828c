// File-backed dashboard renderer
//
// A template is a JSON array holding the widgets for one service, with
// `${placeholder}` tokens. Every entry renders its own copy and the copies
// are concatenated into a CloudWatch `{"widgets": [...]}` document.
use crate::application::cloud_repository::DashboardRenderer;
use crate::application::error::{DashboardError, DashboardResult};
use crate::domain::dashboard::DashboardEntry;
use crate::infrastructure::config::prepare_template;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::path::PathBuf;

/// Dashboard grid rows taken by one service
pub const ROW_HEIGHT: usize = 6;

#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    templates_dir: PathBuf,
}

impl TemplateRenderer {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }
}

#[async_trait]
impl DashboardRenderer for TemplateRenderer {
    async fn render(
        &self,
        template_name: &str,
        entries: &[DashboardEntry],
    ) -> DashboardResult<String> {
        let path = self.templates_dir.join(template_name);
        let template = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| render_error(template_name, format!("{}: {}", path.display(), e)))?;

        render_document(&template, entries).map_err(|message| render_error(template_name, message))
    }
}

fn render_error(template_name: &str, message: String) -> DashboardError {
    DashboardError::Render {
        template: template_name.to_string(),
        message,
    }
}

/// Render the full document body. Identical input gives a byte-identical body.
pub fn render_document(template: &str, entries: &[DashboardEntry]) -> Result<String, String> {
    let mut widgets = Vec::new();

    for entry in entries {
        let rendered = prepare_template(template, &template_vars(entry));
        let parsed: Value = serde_json::from_str(&rendered).map_err(|e| {
            format!(
                "template does not render to JSON for service {}: {}",
                entry.ecs_service, e
            )
        })?;

        match parsed {
            Value::Array(items) => widgets.extend(items),
            _ => return Err("template must render to a JSON array of widgets".to_string()),
        }
    }

    serde_json::to_string(&json!({ "widgets": widgets })).map_err(|e| e.to_string())
}

fn template_vars(entry: &DashboardEntry) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    vars.insert("target_group_id".to_string(), escape(&entry.target_group_id));
    vars.insert("ecs_cluster_name".to_string(), escape(&entry.ecs_cluster_name));
    vars.insert("ecs_service".to_string(), escape(&entry.ecs_service));
    vars.insert("region".to_string(), escape(&entry.region));
    vars.insert("load_balancer".to_string(), escape(&entry.load_balancer));
    vars.insert("layout_index".to_string(), entry.layout_index.to_string());
    vars.insert("y".to_string(), (entry.layout_index * ROW_HEIGHT).to_string());
    vars
}

/// Escape a value for use inside a JSON string literal
fn escape(value: &str) -> String {
    let quoted = Value::String(value.to_string()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}
