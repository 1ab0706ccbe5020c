//! Interactive VPC selection.

use crate::aws::Ec2Api;
use crate::models::Vpc;
use crate::output::format_vpc;
use crate::prompt::Confirm;
use std::error::Error;

/// Show each VPC and ask whether to dump it, stopping at the first yes.
///
/// # Returns
/// * `Ok(Some(vpc_id))` - the accepted VPC
/// * `Ok(None)` - every VPC was declined, or there are none
pub fn pick_vpc(
    api: &dyn Ec2Api,
    confirm: &mut dyn Confirm,
) -> Result<Option<String>, Box<dyn Error>> {
    let vpcs = api.describe_vpcs()?;
    log::info!("VPCs: found {}", vpcs.len());
    select_vpc(&vpcs, confirm)
}

pub fn select_vpc(
    vpcs: &[Vpc],
    confirm: &mut dyn Confirm,
) -> Result<Option<String>, Box<dyn Error>> {
    for vpc in vpcs {
        println!("{}", format_vpc(vpc));
        log::debug!("{vpc:#?}");

        let question = format!("Dump security groups for this VPC into {}.json?", vpc.vpc_id);
        if confirm.confirm(&question)? {
            log::info!("Selected VPC {}", vpc.vpc_id);
            return Ok(Some(vpc.vpc_id.clone()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedConfirm;
    use crate::tests::FixtureEc2;

    #[test]
    fn test_pick_second_vpc() {
        let mut confirm = ScriptedConfirm::new(&[false, true]);
        let picked = pick_vpc(&FixtureEc2::new("01"), &mut confirm).unwrap();
        assert_eq!(picked.as_deref(), Some("vpc-0b22app"));
        assert_eq!(
            confirm.asked,
            vec![
                "Dump security groups for this VPC into vpc-0a11default.json?",
                "Dump security groups for this VPC into vpc-0b22app.json?",
            ]
        );
    }

    #[test]
    fn test_decline_all() {
        let mut confirm = ScriptedConfirm::new(&[false, false]);
        let picked = pick_vpc(&FixtureEc2::new("01"), &mut confirm).unwrap();
        assert_eq!(picked, None);
        assert_eq!(confirm.asked.len(), 2);
    }

    #[test]
    fn test_no_vpcs() {
        let mut confirm = ScriptedConfirm::new(&[true]);
        assert_eq!(select_vpc(&[], &mut confirm).unwrap(), None);
        assert!(confirm.asked.is_empty());
    }
}
