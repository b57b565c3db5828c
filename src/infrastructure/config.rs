use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_REGION: &str = "eu-west-1";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Run the pipeline once and exit
    #[default]
    Once,
    /// Serve the HTTP trigger endpoints
    Serve,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub ecs_cluster: String,
    #[serde(default = "default_region")]
    pub ecs_region_name: String,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "default_template_name")]
    pub template_name: String,
    #[serde(default)]
    pub mode: RunMode,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default)]
    pub refresh_interval_secs: Option<u64>,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_template_name() -> String {
    "dashboard.json.tmpl".to_string()
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Load from `config/dashboard` (optional) overlaid with the process environment,
/// e.g. `ECS_CLUSTER`, `ECS_REGION_NAME`, `MODE`.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::default())
        .build()?;

    from_settings(settings)
}

fn from_settings(settings: config::Config) -> anyhow::Result<DashboardConfig> {
    let mut config: DashboardConfig = settings.try_deserialize()?;

    if config.ecs_cluster.trim().is_empty() {
        anyhow::bail!("ECS_CLUSTER must name the cluster to build a dashboard for");
    }
    // An empty region counts as unset
    if config.ecs_region_name.trim().is_empty() {
        config.ecs_region_name = default_region();
    }

    Ok(config)
}

/// Replace `${name}` placeholders in a template string.
///
/// Single left-to-right pass: substituted text is never scanned again, and
/// unknown placeholders are left as written.
pub fn prepare_template(template: &str, vars: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            break;
        };
        match vars.get(&after[..end]) {
            Some(value) => result.push_str(value),
            None => result.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }

    // Whatever is left, including an unterminated `${`
    if let Some(start) = rest.find("${") {
        result.push_str(&rest[start..]);
    } else {
        result.push_str(rest);
    }
    result
}
