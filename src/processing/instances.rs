//! Instances of one VPC, annotated with their security group summaries.

use crate::aws::Ec2Api;
use crate::models::{tags_to_map, Instance, RawInstance, SecurityGroupMap};
use std::error::Error;

/// Fetch the instances of `vpc_id` and attach tags and security groups.
///
/// # Returns
/// * `Err` - if the provider call fails or an instance references a
///   security group missing from `security_groups`
pub fn get_annotated_instances(
    api: &dyn Ec2Api,
    vpc_id: &str,
    security_groups: &SecurityGroupMap,
) -> Result<Vec<Instance>, Box<dyn Error>> {
    let reservations = api.describe_instances(vpc_id)?;

    let mut instances = Vec::new();
    for reservation in reservations {
        for raw in reservation.instances {
            instances.push(annotate_instance(raw, security_groups)?);
        }
    }
    log::info!("Annotated {} instances in {vpc_id}", instances.len());
    Ok(instances)
}

pub fn annotate_instance(
    raw: RawInstance,
    security_groups: &SecurityGroupMap,
) -> Result<Instance, Box<dyn Error>> {
    let groups = raw
        .security_groups
        .iter()
        .map(|g| {
            security_groups.get(&g.group_id).cloned().ok_or_else(|| {
                format!(
                    "Security group {} of instance {} not found",
                    g.group_id, raw.instance_id
                )
            })
        })
        .collect::<Result<Vec<_>, String>>()?;

    if raw.private_ip_address.is_none() {
        log::warn!(
            "Instance {} has no private address (state={:?})",
            raw.instance_id,
            raw.state.as_ref().map(|s| s.name.as_str())
        );
    }

    Ok(Instance {
        public_ip: raw.public_ip_address,
        private_ip: raw.private_ip_address,
        instance_id: raw.instance_id,
        tags: tags_to_map(&raw.tags),
        security_groups: groups,
    })
}
