//! AWS interaction.
//!
//! This module handles all provider calls:
//! - [`cli`] - Command execution for the AWS CLI
//! - [`ec2`] - The [`Ec2Api`] trait and its AWS CLI implementation

mod cli;
mod ec2;

// Re-export public types and functions
pub use ec2::{parse_describe, AwsCli, Ec2Api};
