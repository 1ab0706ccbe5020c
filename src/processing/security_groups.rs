//! Security group summaries.
//!
//! Collapses provider permission objects into one readable sentence per rule.

use crate::aws::Ec2Api;
use crate::models::{IpPermission, RawSecurityGroup, SecurityGroup, SecurityGroupMap};
use itertools::Itertools;
use std::collections::HashMap;
use std::error::Error;

/// Shown when an ingress rule carries no port.
const INGRESS_DEFAULT_PORT: &str = "-1";
/// Shown when an egress rule carries no port.
const EGRESS_DEFAULT_PORT: &str = "any";
/// Target of a rule with neither address ranges nor peer groups.
const NO_RANGES: &str = "nowhere";

type NameMap<'a> = HashMap<&'a str, &'a str>;

/// Fetch every security group in the account and summarize it.
pub fn get_security_groups(api: &dyn Ec2Api) -> Result<SecurityGroupMap, Box<dyn Error>> {
    let raw = api.describe_security_groups()?;
    summarize_security_groups(raw)
}

/// Build the id -> [`SecurityGroup`] map.
///
/// Duplicate ids keep their first occurrence. A rule naming a peer group
/// missing from `raw` is an error.
pub fn summarize_security_groups(
    raw: Vec<RawSecurityGroup>,
) -> Result<SecurityGroupMap, Box<dyn Error>> {
    let total = raw.len();
    let unique: Vec<RawSecurityGroup> = raw
        .into_iter()
        .unique_by(|sg| sg.group_id.clone())
        .collect();
    if unique.len() != total {
        log::debug!(
            "Dropped {} duplicate security group records",
            total - unique.len()
        );
    }

    let name_map: NameMap = unique
        .iter()
        .map(|sg| (sg.group_id.as_str(), sg.group_name.as_str()))
        .collect();

    let mut groups = SecurityGroupMap::with_capacity(unique.len());
    for sg in unique.iter() {
        groups.insert(sg.group_id.clone(), tidy_security_group(sg, &name_map)?);
    }
    log::info!("Summarized {} security groups", groups.len());
    Ok(groups)
}

fn tidy_security_group(
    sg: &RawSecurityGroup,
    name_map: &NameMap,
) -> Result<SecurityGroup, Box<dyn Error>> {
    let ingress_rules = sg
        .ip_permissions
        .iter()
        .map(|rule| ingress_rule(rule, name_map))
        .collect::<Result<Vec<String>, _>>()?;
    let egress_rules = sg
        .ip_permissions_egress
        .iter()
        .map(|rule| egress_rule(rule, name_map))
        .collect::<Result<Vec<String>, _>>()?;

    Ok(SecurityGroup {
        group_id: sg.group_id.clone(),
        group_name: sg.group_name.clone(),
        ingress_rules,
        egress_rules,
    })
}

fn ingress_rule(rule: &IpPermission, name_map: &NameMap) -> Result<String, Box<dyn Error>> {
    Ok(format!(
        "Allow {protocol} traffic from {ranges} to ports {from_port}-{to_port}",
        protocol = rule.ip_protocol,
        ranges = tidy_ranges(rule, name_map)?,
        from_port = port_or(rule.from_port, INGRESS_DEFAULT_PORT),
        to_port = port_or(rule.to_port, INGRESS_DEFAULT_PORT),
    ))
}

fn egress_rule(rule: &IpPermission, name_map: &NameMap) -> Result<String, Box<dyn Error>> {
    Ok(format!(
        "Allow {protocol} traffic to {ranges} on ports {from_port}-{to_port}",
        protocol = rule.ip_protocol,
        ranges = tidy_ranges(rule, name_map)?,
        from_port = port_or(rule.from_port, EGRESS_DEFAULT_PORT),
        to_port = port_or(rule.to_port, EGRESS_DEFAULT_PORT),
    ))
}

fn port_or(port: Option<i64>, default: &str) -> String {
    port.map(|p| p.to_string())
        .unwrap_or_else(|| default.to_string())
}

/// Render the source/destination of a rule.
///
/// Literal CIDRs win (`['10.0.0.0/8']`), then peer groups
/// (`[('sg-1', 'web')]`), else [`NO_RANGES`].
fn tidy_ranges(rule: &IpPermission, name_map: &NameMap) -> Result<String, Box<dyn Error>> {
    let cidrs: Vec<&str> = rule
        .ip_ranges
        .iter()
        .map(|r| r.cidr_ip.as_str())
        .chain(rule.ipv6_ranges.iter().map(|r| r.cidr_ipv6.as_str()))
        .collect();
    if !cidrs.is_empty() {
        return Ok(format!(
            "[{}]",
            cidrs.iter().map(|c| quote(c)).join(", ")
        ));
    }

    if !rule.user_id_group_pairs.is_empty() {
        let pairs = rule
            .user_id_group_pairs
            .iter()
            .map(|pair| -> Result<String, Box<dyn Error>> {
                let name = name_map.get(pair.group_id.as_str()).ok_or_else(|| {
                    format!(
                        "Peer security group {} not found in describe-security-groups",
                        pair.group_id
                    )
                })?;
                Ok(format!("({}, {})", quote(&pair.group_id), quote(name)))
            })
            .collect::<Result<Vec<String>, Box<dyn Error>>>()?;
        return Ok(format!("[{}]", pairs.join(", ")));
    }

    Ok(NO_RANGES.to_string())
}

/// Single-quote a value the way a Python repr does.
fn quote(value: &str) -> String {
    if value.contains('\'') && !value.contains('"') {
        format!("\"{value}\"")
    } else {
        format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}
