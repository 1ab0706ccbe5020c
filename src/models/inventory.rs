//! Simplified records written to the output files.

use super::Tag;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Security group collapsed into readable rule strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SecurityGroup {
    pub group_id: String,
    pub group_name: String,
    pub ingress_rules: Vec<String>,
    pub egress_rules: Vec<String>,
}

/// Summaries keyed by group id.
pub type SecurityGroupMap = HashMap<String, SecurityGroup>;

/// Instance with its tags and attached security groups embedded by value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Instance {
    pub public_ip: Option<String>,
    pub private_ip: Option<String>,
    pub instance_id: String,
    pub tags: BTreeMap<String, String>,
    pub security_groups: Vec<SecurityGroup>,
}

impl Instance {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Inventory host name `<Name tag>.<env>`.
    pub fn display_name(&self, env: &str) -> Option<String> {
        self.tag(crate::config::NAME_TAG)
            .map(|name| format!("{name}.{env}"))
    }
}

/// Collect provider tags into a map; a repeated key keeps the last value.
pub fn tags_to_map(tags: &[Tag]) -> BTreeMap<String, String> {
    tags.iter()
        .map(|t| (t.key.clone(), t.value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let instance = Instance {
            public_ip: None,
            private_ip: Some("10.0.0.1".to_string()),
            instance_id: "i-1".to_string(),
            tags: tags_to_map(&[Tag {
                key: "Name".to_string(),
                value: "web1".to_string(),
            }]),
            security_groups: vec![],
        };
        assert_eq!(instance.display_name("prod").as_deref(), Some("web1.prod"));
        assert_eq!(instance.tag("Tier"), None);
    }
}
