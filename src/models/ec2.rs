//! EC2 records as returned by `aws ec2 describe-* --output json`.
//!
//! Only the fields the inventory needs are modelled, everything else in the
//! response is ignored by serde.

use serde::{Deserialize, Serialize};

/// Key/value resource tag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// Response of `describe-vpcs`.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcsOutput {
    #[serde(default)]
    pub vpcs: Vec<Vpc>,
}

/// Response of `describe-security-groups`.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroupsOutput {
    #[serde(default)]
    pub security_groups: Vec<RawSecurityGroup>,
}

/// Response of `describe-instances`.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesOutput {
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

/// An AWS virtual network.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Vpc {
    pub vpc_id: String,
    pub cidr_block: Option<String>,
    pub state: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    pub owner_id: Option<String>,
    pub instance_tenancy: Option<String>,
    pub dhcp_options_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Vpc {
    /// Value of the `Name` tag, if the VPC has one.
    pub fn name(&self) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.key == crate::config::NAME_TAG)
            .map(|t| t.value.as_str())
    }
}

/// Security group exactly as the provider describes it.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawSecurityGroup {
    pub group_id: String,
    pub group_name: String,
    pub description: Option<String>,
    pub vpc_id: Option<String>,
    pub owner_id: Option<String>,
    /// Ingress rules.
    #[serde(default)]
    pub ip_permissions: Vec<IpPermission>,
    #[serde(default)]
    pub ip_permissions_egress: Vec<IpPermission>,
}

/// A single ingress or egress permission.
///
/// `FromPort`/`ToPort` are left out by AWS for protocol `-1`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct IpPermission {
    pub ip_protocol: String,
    pub from_port: Option<i64>,
    pub to_port: Option<i64>,
    #[serde(default)]
    pub ip_ranges: Vec<IpRange>,
    #[serde(default)]
    pub ipv6_ranges: Vec<Ipv6Range>,
    #[serde(default)]
    pub user_id_group_pairs: Vec<UserIdGroupPair>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct IpRange {
    pub cidr_ip: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Ipv6Range {
    pub cidr_ipv6: String,
    pub description: Option<String>,
}

/// Reference to a peer security group inside a permission.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UserIdGroupPair {
    pub group_id: String,
    pub user_id: Option<String>,
    pub group_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Reservation {
    pub reservation_id: Option<String>,
    pub owner_id: Option<String>,
    #[serde(default)]
    pub instances: Vec<RawInstance>,
}

/// EC2 instance exactly as the provider describes it.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawInstance {
    pub instance_id: String,
    pub instance_type: Option<String>,
    /// Missing once an instance is terminated.
    pub private_ip_address: Option<String>,
    pub public_ip_address: Option<String>,
    pub state: Option<InstanceState>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub security_groups: Vec<GroupIdentifier>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceState {
    pub code: Option<i64>,
    pub name: String,
}

/// Security group attached to an instance.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GroupIdentifier {
    pub group_id: String,
    pub group_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_without_ports() {
        let json = r#"{"IpProtocol": "-1", "IpRanges": [{"CidrIp": "0.0.0.0/0"}]}"#;
        let rule: IpPermission = serde_json::from_str(json).unwrap();
        assert_eq!(rule.ip_protocol, "-1");
        assert!(rule.from_port.is_none());
        assert!(rule.to_port.is_none());
        assert_eq!(rule.ip_ranges[0].cidr_ip, "0.0.0.0/0");
        assert!(rule.user_id_group_pairs.is_empty());
    }

    #[test]
    fn test_instance_without_tags() {
        let json = r#"{"InstanceId": "i-1", "PrivateIpAddress": "10.0.0.5", "Foo": 1}"#;
        let instance: RawInstance = serde_json::from_str(json).unwrap();
        assert_eq!(instance.instance_id, "i-1");
        assert!(instance.tags.is_empty());
        assert!(instance.public_ip_address.is_none());
    }

    #[test]
    fn test_vpc_name() {
        let vpc = Vpc {
            vpc_id: "vpc-1".to_string(),
            tags: vec![Tag {
                key: "Name".to_string(),
                value: "main".to_string(),
            }],
            ..Default::default()
        };
        assert_eq!(vpc.name(), Some("main"));
        assert_eq!(Vpc::default().name(), None);
    }
}
