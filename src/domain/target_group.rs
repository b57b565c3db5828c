// Target group domain model
const LOAD_BALANCER_MARKER: &str = "loadbalancer/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetGroupRecord {
    pub name: String,
    pub arn: String,
    pub load_balancer_arns: Vec<String>,
}

impl TargetGroupRecord {
    pub fn new(name: String, arn: String, load_balancer_arns: Vec<String>) -> Self {
        Self {
            name,
            arn,
            load_balancer_arns,
        }
    }

    /// Trailing path segment of the target group ARN
    pub fn short_id(&self) -> &str {
        self.arn.rsplit('/').next().unwrap_or_default()
    }

    /// Short id of the first associated load balancer, or "" when there is none.
    pub fn load_balancer_short_id(&self) -> &str {
        self.load_balancer_arns
            .first()
            .map(|arn| load_balancer_short_id(arn))
            .unwrap_or_default()
    }
}

/// Everything after the `loadbalancer/` marker, e.g. `app/my-lb/abcdef`.
/// An ARN without the marker is returned unchanged.
pub fn load_balancer_short_id(arn: &str) -> &str {
    match arn.find(LOAD_BALANCER_MARKER) {
        Some(start) => &arn[start + LOAD_BALANCER_MARKER.len()..],
        None => arn,
    }
}
