//! JSON dump of the annotated instances.

use crate::models::Instance;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::error::Error;
use std::path::Path;

/// Serialize with object keys sorted and four-space indentation.
pub fn to_sorted_json(instances: &[Instance]) -> Result<String, Box<dyn Error>> {
    // Round-trip through Value: its map is ordered by key.
    let value = serde_json::to_value(instances)?;

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');

    Ok(String::from_utf8(buf)?)
}

pub fn write_instances_json(path: &Path, instances: &[Instance]) -> Result<(), Box<dyn Error>> {
    let json = to_sorted_json(instances)?;
    std::fs::write(path, json)
        .map_err(|e| format!("Error writing JSON file {}: {e}", path.display()))?;
    log::info!("Wrote {} instances to {}", instances.len(), path.display());
    Ok(())
}
