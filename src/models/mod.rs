//! Domain models for the VPC inventory.
//!
//! - [`ec2`] - raw records as the AWS CLI returns them
//! - [`inventory`] - simplified [`Instance`] and [`SecurityGroup`] written to disk

mod ec2;
mod inventory;

// Re-export public types
pub use ec2::{
    DescribeInstancesOutput, DescribeSecurityGroupsOutput, DescribeVpcsOutput, GroupIdentifier,
    InstanceState, IpPermission, IpRange, Ipv6Range, RawInstance, RawSecurityGroup, Reservation,
    Tag, UserIdGroupPair, Vpc,
};
pub use inventory::{tags_to_map, Instance, SecurityGroup, SecurityGroupMap};
