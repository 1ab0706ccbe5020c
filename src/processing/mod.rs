//! Reshaping of provider records.
//!
//! - [`vpc`] - Interactive VPC selection
//! - [`security_groups`] - Security group summaries
//! - [`instances`] - Instance annotation

mod instances;
mod security_groups;
mod vpc;

// Re-export public functions
pub use instances::{annotate_instance, get_annotated_instances};
pub use security_groups::{get_security_groups, summarize_security_groups};
pub use vpc::{pick_vpc, select_vpc};
