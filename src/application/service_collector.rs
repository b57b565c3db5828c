// Service collector - Follows list-services pagination to the end
use crate::application::cloud_repository::ServiceCatalog;
use crate::application::error::DashboardResult;
use crate::domain::service::ServiceShortName;
use std::collections::HashSet;

/// Collect every service ARN in a cluster, in listing order.
///
/// Stops on the first page without a continuation token or on the first
/// empty page, even if that page still carries a token.
pub async fn collect_all_services(
    catalog: &dyn ServiceCatalog,
    cluster_name: &str,
) -> DashboardResult<Vec<String>> {
    let mut services = Vec::new();
    let mut next_token = None;
    let mut pages = 0usize;

    loop {
        let page = catalog.list_services(cluster_name, next_token).await?;
        pages += 1;

        if page.service_arns.is_empty() {
            break;
        }
        services.extend(page.service_arns);

        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    tracing::debug!(
        "Collected {} services from {} pages for cluster {}",
        services.len(),
        pages,
        cluster_name
    );

    Ok(services)
}

/// Reduce service ARNs to their short names, keeping listing order.
///
/// Malformed identifiers are skipped. When two identifiers truncate to the
/// same short name only the first is kept, so every name maps to exactly
/// one service.
pub fn filter_short_names(service_arns: &[String]) -> Vec<ServiceShortName> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for arn in service_arns {
        let Some(name) = ServiceShortName::from_identifier(arn) else {
            tracing::debug!("Skipping service with unusable name: {}", arn);
            continue;
        };

        if !seen.insert(name.clone()) {
            tracing::warn!(
                "Skipping service {} - short name {} is already taken by another service",
                arn,
                name
            );
            continue;
        }

        names.push(name);
    }

    names
}
