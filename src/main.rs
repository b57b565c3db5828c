// Main entry point - Dependency injection and trigger setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::domain::dashboard::InvocationResult;
use crate::infrastructure::aws::load_sdk_config;
use crate::infrastructure::cloudwatch_publisher::CloudWatchPublisher;
use crate::infrastructure::config::{DashboardConfig, RunMode, load_dashboard_config};
use crate::infrastructure::ecs_catalog::EcsServiceCatalog;
use crate::infrastructure::elb_target_groups::ElbTargetGroupDirectory;
use crate::infrastructure::template_renderer::TemplateRenderer;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, refresh_dashboard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config().context("Failed to load dashboard configuration")?;

    // Create AWS adapters (infrastructure layer)
    let sdk_config = load_sdk_config(&config.ecs_region_name).await;
    let catalog = Arc::new(EcsServiceCatalog::new(aws_sdk_ecs::Client::new(&sdk_config)));
    let target_groups = Arc::new(ElbTargetGroupDirectory::new(
        aws_sdk_elasticloadbalancingv2::Client::new(&sdk_config),
    ));
    let publisher = Arc::new(CloudWatchPublisher::new(aws_sdk_cloudwatch::Client::new(
        &sdk_config,
    )));
    let renderer = Arc::new(TemplateRenderer::new(&config.templates_dir));

    // Create service (application layer)
    let dashboard_service =
        DashboardService::new(catalog, target_groups, renderer, publisher, config.clone());

    match config.mode {
        RunMode::Once => run_once(&dashboard_service).await,
        RunMode::Serve => serve(dashboard_service, &config).await,
    }
}

async fn run_once(dashboard_service: &DashboardService) -> anyhow::Result<()> {
    let published = dashboard_service.refresh().await?;
    tracing::debug!(
        "Run finished: {} now lists {} services",
        published.name,
        published.entry_count
    );
    println!("{}", serde_json::to_string(&InvocationResult::success())?);
    Ok(())
}

async fn serve(dashboard_service: DashboardService, config: &DashboardConfig) -> anyhow::Result<()> {
    if let Some(secs) = config.refresh_interval_secs.filter(|secs| *secs > 0) {
        tokio::spawn(refresh_periodically(
            dashboard_service.clone(),
            Duration::from_secs(secs),
        ));
    }

    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboards/refresh", post(refresh_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr))?;
    tracing::info!("Starting ecs-services-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

/// Refresh on a fixed interval; a slow run delays the next tick instead of overlapping it
async fn refresh_periodically(dashboard_service: DashboardService, period: Duration) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        if let Err(e) = dashboard_service.refresh().await {
            tracing::error!("Scheduled dashboard refresh failed: {}", e);
        }
    }
}
