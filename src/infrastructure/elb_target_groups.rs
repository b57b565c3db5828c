// ELBv2 adapter - Exact-name target group lookups
use crate::application::cloud_repository::{TargetGroupDirectory, TargetGroupLookup};
use crate::application::error::DashboardError;
use crate::domain::target_group::TargetGroupRecord;
use async_trait::async_trait;
use aws_sdk_elasticloadbalancingv2::error::{DisplayErrorContext, SdkError};
use aws_sdk_elasticloadbalancingv2::operation::describe_target_groups::{
    DescribeTargetGroupsError, DescribeTargetGroupsOutput,
};
use aws_sdk_elasticloadbalancingv2::types::TargetGroup;

#[derive(Debug, Clone)]
pub struct ElbTargetGroupDirectory {
    client: aws_sdk_elasticloadbalancingv2::Client,
}

impl ElbTargetGroupDirectory {
    pub fn new(client: aws_sdk_elasticloadbalancingv2::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TargetGroupDirectory for ElbTargetGroupDirectory {
    async fn describe_target_group(&self, name: &str) -> TargetGroupLookup {
        let result = self
            .client
            .describe_target_groups()
            .names(name)
            .send()
            .await;

        classify_lookup(name, result)
    }
}

/// Only `TargetGroupNotFoundException` means "no match"; every other failure aborts the run.
fn classify_lookup(
    name: &str,
    result: Result<DescribeTargetGroupsOutput, SdkError<DescribeTargetGroupsError>>,
) -> TargetGroupLookup {
    match result {
        // An exact-name query returns at most one group; take the first regardless
        Ok(output) => match output.target_groups.unwrap_or_default().into_iter().next() {
            Some(target_group) => TargetGroupLookup::Found(to_record(target_group)),
            None => TargetGroupLookup::NotFound,
        },
        Err(err) if err.as_service_error().is_some_and(is_target_group_not_found) => {
            TargetGroupLookup::NotFound
        }
        Err(err) => TargetGroupLookup::Failed(DashboardError::TargetGroupLookup {
            name: name.to_string(),
            message: DisplayErrorContext(&err).to_string(),
        }),
    }
}

fn is_target_group_not_found(err: &DescribeTargetGroupsError) -> bool {
    matches!(
        err,
        DescribeTargetGroupsError::TargetGroupNotFoundException(_)
    )
}

fn to_record(target_group: TargetGroup) -> TargetGroupRecord {
    TargetGroupRecord::new(
        target_group.target_group_name.unwrap_or_default(),
        target_group.target_group_arn.unwrap_or_default(),
        target_group.load_balancer_arns.unwrap_or_default(),
    )
}
