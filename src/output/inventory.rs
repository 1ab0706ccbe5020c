//! Ansible inventory in INI format.
//!
//! One `[section]` per value of the grouping tag, host names as bare keys.

use crate::config;
use crate::models::Instance;
use std::error::Error;
use std::path::Path;

/// Hosts that share one value of the grouping tag.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryGroup {
    pub name: String,
    pub hosts: Vec<String>,
}

/// Bucket instances by `filter_tag`.
///
/// Sections and hosts keep first-seen order and repeated host names collapse.
/// Host names keep the case of the `Name` tag, so `Web1` and `web1` are two
/// hosts; a Python `configparser` inventory would lowercase and merge them.
/// Instances missing the `Name` tag or `filter_tag` are skipped.
pub fn build_inventory(env: &str, filter_tag: &str, instances: &[Instance]) -> Vec<InventoryGroup> {
    let mut groups: Vec<InventoryGroup> = Vec::new();

    for instance in instances {
        let (Some(host), Some(section)) = (instance.display_name(env), instance.tag(filter_tag))
        else {
            log::warn!(
                "Skipping {} in inventory: needs tags '{}' and '{}', has {:?}",
                instance.instance_id,
                config::NAME_TAG,
                filter_tag,
                instance.tags.keys().collect::<Vec<_>>()
            );
            continue;
        };

        match groups.iter_mut().find(|g| g.name == section) {
            Some(group) => {
                if !group.hosts.contains(&host) {
                    group.hosts.push(host);
                }
            }
            None => groups.push(InventoryGroup {
                name: section.to_string(),
                hosts: vec![host],
            }),
        }
    }
    groups
}

/// `[section]`, one host per line, blank line after each section.
pub fn render_inventory(groups: &[InventoryGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!("[{}]\n", group.name));
        for host in group.hosts.iter() {
            out.push_str(host);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn write_ansible_inventory(
    path: &Path,
    env: &str,
    filter_tag: &str,
    instances: &[Instance],
) -> Result<(), Box<dyn Error>> {
    let groups = build_inventory(env, filter_tag, instances);
    std::fs::write(path, render_inventory(&groups))
        .map_err(|e| format!("Error writing inventory file {}: {e}", path.display()))?;
    log::info!(
        "Wrote {} inventory groups to {}",
        groups.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn instance(id: &str, tags: &[(&str, &str)]) -> Instance {
        Instance {
            public_ip: None,
            private_ip: None,
            instance_id: id.to_string(),
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
            security_groups: vec![],
        }
    }

    #[test]
    fn test_same_tier_one_section() {
        let instances = vec![
            instance("i-1", &[("Name", "web1"), ("Tier", "app")]),
            instance("i-2", &[("Name", "web2"), ("Tier", "app")]),
        ];
        let groups = build_inventory("dev", "Tier", &instances);
        assert_eq!(
            groups,
            vec![InventoryGroup {
                name: "app".to_string(),
                hosts: vec!["web1.dev".to_string(), "web2.dev".to_string()],
            }]
        );
        assert_eq!(render_inventory(&groups), "[app]\nweb1.dev\nweb2.dev\n\n");
    }

    #[test]
    fn test_sections_in_first_seen_order() {
        let instances = vec![
            instance("i-1", &[("Name", "db1"), ("Role", "data")]),
            instance("i-2", &[("Name", "web1"), ("Role", "app")]),
            instance("i-3", &[("Name", "db2"), ("Role", "data")]),
            instance("i-4", &[("Name", "db2"), ("Role", "data")]),
        ];
        let groups = build_inventory("prod", "Role", &instances);
        assert_eq!(
            render_inventory(&groups),
            "[data]\ndb1.prod\ndb2.prod\n\n[app]\nweb1.prod\n\n"
        );
    }

    #[test]
    fn test_host_name_case_kept() {
        let instances = vec![
            instance("i-1", &[("Name", "Web1"), ("Tier", "app")]),
            instance("i-2", &[("Name", "web1"), ("Tier", "app")]),
        ];
        let groups = build_inventory("dev", "Tier", &instances);
        assert_eq!(render_inventory(&groups), "[app]\nWeb1.dev\nweb1.dev\n\n");
    }

    #[test]
    fn test_missing_tags_skipped() {
        let instances = vec![
            instance("i-1", &[("Name", "web1")]),
            instance("i-2", &[("Tier", "app")]),
            instance("i-3", &[("Name", "web3"), ("Tier", "app")]),
        ];
        let groups = build_inventory("dev", "Tier", &instances);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].hosts, vec!["web3.dev"]);
    }

    #[test]
    fn test_no_instances() {
        assert_eq!(render_inventory(&build_inventory("dev", "Tier", &[])), "");
    }
}
