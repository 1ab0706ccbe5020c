//! Command line arguments.

use crate::config;
use crate::InspectOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aws-vpc-inventory", version)]
#[command(about = "Dump the instances and security groups of one VPC as JSON, an Ansible inventory and an ip list.")]
pub struct Args {
    /// Environment suffix for inventory host names (`<Name>.<env>`)
    #[arg(long, default_value = config::DEFAULT_ENV)]
    pub env: String,

    /// Instance tag whose value names the inventory section
    #[arg(long, default_value = config::DEFAULT_FILTER_TAG)]
    pub filter_tag: String,

    /// AWS region passed to the aws cli
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS named profile passed to the aws cli
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Directory the output files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// log4rs configuration file
    #[arg(long, default_value = config::LOG4RS_CONFIG)]
    pub log_config: PathBuf,
}

impl Args {
    pub fn inspect_options(&self) -> InspectOptions {
        InspectOptions {
            env: self.env.clone(),
            filter_tag: self.filter_tag.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}
