//! The three EC2 read calls the inventory needs.

use super::cli;
use crate::config;
use crate::models::{
    DescribeInstancesOutput, DescribeSecurityGroupsOutput, DescribeVpcsOutput, RawSecurityGroup,
    Reservation, Vpc,
};
use serde::de::DeserializeOwned;
use std::error::Error;

/// Read-only view of the EC2 API.
///
/// Each call returns the complete result set.
pub trait Ec2Api {
    fn describe_vpcs(&self) -> Result<Vec<Vpc>, Box<dyn Error>>;

    fn describe_security_groups(&self) -> Result<Vec<RawSecurityGroup>, Box<dyn Error>>;

    /// Instances whose primary interface sits in `vpc_id`.
    fn describe_instances(&self, vpc_id: &str) -> Result<Vec<Reservation>, Box<dyn Error>>;
}

/// [`Ec2Api`] backed by the `aws` command line tool.
///
/// Credentials, region and profile resolution are left to the CLI itself.
#[derive(Debug, Default, Clone)]
pub struct AwsCli {
    pub region: Option<String>,
    pub profile: Option<String>,
}

impl AwsCli {
    pub fn new(region: Option<String>, profile: Option<String>) -> AwsCli {
        AwsCli { region, profile }
    }

    /// Build the command line for an `aws ec2` operation.
    fn command(&self, operation: &str, extra_args: &str) -> String {
        let mut cmd = format!("{} ec2 {operation} --output json", config::AWS_CLI);
        if let Some(region) = &self.region {
            cmd.push_str(&format!(" --region {region}"));
        }
        if let Some(profile) = &self.profile {
            cmd.push_str(&format!(" --profile {profile}"));
        }
        if !extra_args.is_empty() {
            cmd.push(' ');
            cmd.push_str(extra_args);
        }
        cmd
    }
}

impl Ec2Api for AwsCli {
    fn describe_vpcs(&self) -> Result<Vec<Vpc>, Box<dyn Error>> {
        let output = cli::run(&self.command("describe-vpcs", ""))?;
        let parsed: DescribeVpcsOutput = parse_describe(&output, "describe-vpcs")?;
        log::info!("describe-vpcs returned {} VPCs", parsed.vpcs.len());
        Ok(parsed.vpcs)
    }

    fn describe_security_groups(&self) -> Result<Vec<RawSecurityGroup>, Box<dyn Error>> {
        let output = cli::run(&self.command("describe-security-groups", ""))?;
        let parsed: DescribeSecurityGroupsOutput =
            parse_describe(&output, "describe-security-groups")?;
        log::info!(
            "describe-security-groups returned {} groups",
            parsed.security_groups.len()
        );
        Ok(parsed.security_groups)
    }

    fn describe_instances(&self, vpc_id: &str) -> Result<Vec<Reservation>, Box<dyn Error>> {
        let filter = format!("--filters 'Name=vpc-id,Values={vpc_id}'");
        let output = cli::run(&self.command("describe-instances", &filter))?;
        let parsed: DescribeInstancesOutput = parse_describe(&output, "describe-instances")?;
        log::info!(
            "describe-instances returned {} reservations for {vpc_id}",
            parsed.reservations.len()
        );
        Ok(parsed.reservations)
    }
}

/// Parse a `describe-*` JSON response, reporting the JSON path on failure.
pub fn parse_describe<T: DeserializeOwned>(output: &str, operation: &str) -> Result<T, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(output);
    let parsed: T = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", output);
        format!(
            "Error parsing {operation} JSON: path={} error={}",
            e.path(),
            e
        )
    })?;
    Ok(parsed)
}
