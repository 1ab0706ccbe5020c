//! Defaults and limits shared across the crate.

/// Environment suffix appended to inventory host names.
pub const DEFAULT_ENV: &str = "dev";

/// Instance tag used to bucket hosts into inventory sections.
pub const DEFAULT_FILTER_TAG: &str = "Tier";

/// Tag holding the instance host name.
pub const NAME_TAG: &str = "Name";

/// Default log4rs configuration file.
pub const LOG4RS_CONFIG: &str = "log4rs.yml";

/// AWS CLI binary, resolved through PATH.
pub const AWS_CLI: &str = "aws";

/// Refuse provider responses bigger than this (bytes).
pub const MAX_OUTPUT_BYTES: usize = 50_000_000;

/// Written in place of a missing address.
pub const ABSENT_TOKEN: &str = "None";
