//! Output writers for the annotated instances.
//!
//! - [`json`] - `<vpc>.json` dump
//! - [`inventory`] - `<vpc>.ini` Ansible inventory
//! - [`ips`] - `<vpc>.ips` address list
//! - [`terminal`] - Console formatting

mod inventory;
mod ips;
mod json;
mod terminal;

use std::path::{Path, PathBuf};

pub use inventory::{build_inventory, render_inventory, write_ansible_inventory, InventoryGroup};
pub use ips::{render_ip_list, write_ip_list};
pub use json::{to_sorted_json, write_instances_json};
pub use terminal::format_vpc;

/// `<dir>/<vpc_id>.<extension>`
pub fn output_file(dir: &Path, vpc_id: &str, extension: &str) -> PathBuf {
    dir.join(format!("{vpc_id}.{extension}"))
}
