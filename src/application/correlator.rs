// Correlator - Joins service names with their target groups
use crate::domain::dashboard::DashboardEntry;
use crate::domain::service::ServiceShortName;
use crate::domain::target_group::TargetGroupRecord;

/// Build dashboard entries for every service that has a target group.
///
/// Walks `short_names` in enumeration order. Services without a matching
/// record are skipped and do not consume a layout index, so the emitted
/// indices are always `0..entries.len()`. If several records share a name
/// the first one wins.
pub fn correlate(
    cluster_name: &str,
    region: &str,
    short_names: &[ServiceShortName],
    target_groups: &[TargetGroupRecord],
) -> Vec<DashboardEntry> {
    let mut entries = Vec::new();

    for name in short_names {
        let Some(target_group) = target_groups.iter().find(|tg| tg.name == name.as_str()) else {
            continue;
        };

        let target_group_id = target_group.short_id();
        if target_group_id.is_empty() {
            tracing::warn!(
                "Skipping service {} - target group ARN {} has no trailing id",
                name,
                target_group.arn
            );
            continue;
        }

        entries.push(DashboardEntry {
            target_group_id: target_group_id.to_string(),
            ecs_cluster_name: cluster_name.to_string(),
            ecs_service: name.to_string(),
            region: region.to_string(),
            layout_index: entries.len(),
            load_balancer: target_group.load_balancer_short_id().to_string(),
        });
    }

    entries
}
