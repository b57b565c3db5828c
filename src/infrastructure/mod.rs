// Infrastructure layer - External dependencies and adapters
pub mod aws;
pub mod cloudwatch_publisher;
pub mod config;
pub mod ecs_catalog;
pub mod elb_target_groups;
pub mod template_renderer;
