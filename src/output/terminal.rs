//! Terminal output utilities.

use crate::models::Vpc;
use colored::Colorize;

/// One-line VPC summary shown before asking about it.
pub fn format_vpc(vpc: &Vpc) -> String {
    let mut line = format!(
        "VPC: '{vpc_id}' '{name}' - {cidr} {state}",
        vpc_id = vpc.vpc_id.green(),
        name = vpc.name().unwrap_or("-"),
        cidr = vpc.cidr_block.as_deref().unwrap_or("no-cidr"),
        state = vpc.state.as_deref().unwrap_or("unknown"),
    );
    if vpc.is_default {
        line.push_str(&format!(" {}", "[default]".yellow()));
    }
    line
}
