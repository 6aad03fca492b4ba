use std::fs;
use std::path::Path;

use fmx_core::{CatalogError, CatalogGroup, CatalogNode, CatalogScript};

use crate::format::format_script;
use crate::sanitize::sanitize_filename;

/// Writes one directory per group and one `.txt` file per script under
/// `base_path`, mirroring the catalog tree. Returns the number of scripts
/// written. The first directory-creation or file-write failure aborts the
/// traversal; files written for earlier siblings are left in place.
pub fn export_group(group: &CatalogGroup, base_path: &Path) -> Result<usize, CatalogError> {
    let group_path = base_path.join(sanitize_filename(&group.name));
    fs::create_dir_all(&group_path).map_err(|error| {
        CatalogError::new(
            "EXPORT_DIR_CREATE",
            format!(
                "Could not create directory {}: {}",
                group_path.display(),
                error
            ),
        )
    })?;

    let mut script_count = 0usize;
    for child in &group.children {
        match child {
            CatalogNode::Group(nested) => script_count += export_group(nested, &group_path)?,
            CatalogNode::Script(script) => {
                write_script_file(script, &group_path)?;
                script_count += 1;
            }
        }
    }

    Ok(script_count)
}

fn write_script_file(script: &CatalogScript, target_dir: &Path) -> Result<(), CatalogError> {
    let script_path = target_dir.join(format!("{}.txt", sanitize_filename(&script.name)));
    let content = format_script(&script.steps);
    fs::write(&script_path, content).map_err(|error| {
        CatalogError::new(
            "EXPORT_FILE_WRITE",
            format!("Could not write {}: {}", script_path.display(), error),
        )
    })
}
