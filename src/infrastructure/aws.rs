// Shared AWS SDK configuration
use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Load credentials and settings from the standard provider chain for one region
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}
