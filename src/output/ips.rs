//! Plain address list: private then public address, one per line.

use crate::config::ABSENT_TOKEN;
use crate::models::Instance;
use std::error::Error;
use std::path::Path;

pub fn render_ip_list(instances: &[Instance]) -> String {
    instances
        .iter()
        .map(|i| {
            format!(
                "{}\n{}\n",
                i.private_ip.as_deref().unwrap_or(ABSENT_TOKEN),
                i.public_ip.as_deref().unwrap_or(ABSENT_TOKEN)
            )
        })
        .collect()
}

pub fn write_ip_list(path: &Path, instances: &[Instance]) -> Result<(), Box<dyn Error>> {
    std::fs::write(path, render_ip_list(instances))
        .map_err(|e| format!("Error writing ip list {}: {e}", path.display()))?;
    log::info!("Wrote {} address pairs to {}", instances.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn instance(private_ip: Option<&str>, public_ip: Option<&str>) -> Instance {
        Instance {
            public_ip: public_ip.map(str::to_string),
            private_ip: private_ip.map(str::to_string),
            instance_id: "i-1".to_string(),
            tags: BTreeMap::new(),
            security_groups: vec![],
        }
    }

    #[test]
    fn test_missing_public_ip() {
        let out = render_ip_list(&[
            instance(Some("10.0.0.1"), Some("54.1.1.1")),
            instance(Some("10.0.0.2"), None),
        ]);
        assert_eq!(out, "10.0.0.1\n54.1.1.1\n10.0.0.2\nNone\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[3], "None");
    }

    #[test]
    fn test_terminated_instance() {
        assert_eq!(render_ip_list(&[instance(None, None)]), "None\nNone\n");
    }
}
