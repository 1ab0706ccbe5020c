//! Fixture-backed [`Ec2Api`] for unit tests.

use crate::aws::{parse_describe, Ec2Api};
use crate::models::{
    DescribeInstancesOutput, DescribeSecurityGroupsOutput, DescribeVpcsOutput, RawSecurityGroup,
    Reservation, Vpc,
};
use std::error::Error;

const TEST_DATA: &str = "src/tests/test_data";

/// Serves saved `describe-*` responses, `<prefix>_<nn>.json` in test_data.
pub struct FixtureEc2 {
    pub suffix: &'static str,
}

impl FixtureEc2 {
    pub fn new(suffix: &'static str) -> Self {
        FixtureEc2 { suffix }
    }

    fn read(&self, prefix: &str) -> Result<String, Box<dyn Error>> {
        let file = format!("{TEST_DATA}/{prefix}_{}.json", self.suffix);
        Ok(std::fs::read_to_string(&file).map_err(|e| format!("Error reading {file}: {e}"))?)
    }
}

impl Ec2Api for FixtureEc2 {
    fn describe_vpcs(&self) -> Result<Vec<Vpc>, Box<dyn Error>> {
        let out: DescribeVpcsOutput = parse_describe(&self.read("describe_vpcs")?, "describe-vpcs")?;
        Ok(out.vpcs)
    }

    fn describe_security_groups(&self) -> Result<Vec<RawSecurityGroup>, Box<dyn Error>> {
        let out: DescribeSecurityGroupsOutput = parse_describe(
            &self.read("describe_security_groups")?,
            "describe-security-groups",
        )?;
        Ok(out.security_groups)
    }

    fn describe_instances(&self, _vpc_id: &str) -> Result<Vec<Reservation>, Box<dyn Error>> {
        let out: DescribeInstancesOutput =
            parse_describe(&self.read("describe_instances")?, "describe-instances")?;
        Ok(out.reservations)
    }
}
