//! Dump the instances and security groups of one AWS VPC.
//!
//! Pipeline: [`processing::pick_vpc`] → [`processing::get_security_groups`]
//! → [`processing::get_annotated_instances`] → [`output`] writers.

pub mod args;
pub mod aws;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod prompt;

#[cfg(test)]
mod tests;

use aws::Ec2Api;
use colored::Colorize;
use models::Instance;
use prompt::Confirm;
use std::error::Error;
use std::path::PathBuf;

pub use logging::init_logging;

/// Settings for one inspection run.
#[derive(Debug, Clone)]
pub struct InspectOptions {
    /// Suffix for inventory host names.
    pub env: String,
    /// Tag used for inventory sections.
    pub filter_tag: String,
    pub output_dir: PathBuf,
}

impl Default for InspectOptions {
    fn default() -> Self {
        InspectOptions {
            env: config::DEFAULT_ENV.to_string(),
            filter_tag: config::DEFAULT_FILTER_TAG.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// What a run produced.
#[derive(Debug)]
pub struct InspectReport {
    pub vpc_id: String,
    pub instances: Vec<Instance>,
    /// Files written, in order.
    pub written: Vec<PathBuf>,
}

/// Select a VPC, annotate its instances and write the requested files.
///
/// Accepting a VPC writes `<vpc>.json`; the `.ini` and `.ips` files are each
/// behind their own question.
///
/// # Returns
/// * `Ok(None)` - no VPC was accepted; nothing is written
/// * `Ok(Some(report))` - the selected VPC and the files written
pub fn inspect_vpc(
    api: &dyn Ec2Api,
    confirm: &mut dyn Confirm,
    opts: &InspectOptions,
) -> Result<Option<InspectReport>, Box<dyn Error>> {
    let Some(vpc_id) = processing::pick_vpc(api, confirm)? else {
        log::info!("No VPC selected");
        return Ok(None);
    };

    let security_groups = processing::get_security_groups(api)?;
    let instances = processing::get_annotated_instances(api, &vpc_id, &security_groups)?;
    let mut written = Vec::new();

    let json_file = output::output_file(&opts.output_dir, &vpc_id, "json");
    output::write_instances_json(&json_file, &instances)?;
    written.push(json_file);

    let inventory_file = output::output_file(&opts.output_dir, &vpc_id, "ini");
    let question = format!(
        "Dump ansible inventory for this VPC into {}?",
        inventory_file.display()
    );
    if confirm.confirm(&question)? {
        output::write_ansible_inventory(&inventory_file, &opts.env, &opts.filter_tag, &instances)?;
        written.push(inventory_file);
    }

    let ip_list_file = output::output_file(&opts.output_dir, &vpc_id, "ips");
    let question = format!("Dump ips for this VPC into {}?", ip_list_file.display());
    if confirm.confirm(&question)? {
        output::write_ip_list(&ip_list_file, &instances)?;
        written.push(ip_list_file);
    }

    for file in written.iter() {
        println!("{} {}", "wrote".green(), file.display());
    }

    Ok(Some(InspectReport {
        vpc_id,
        instances,
        written,
    }))
}
