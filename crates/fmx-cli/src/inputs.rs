use std::path::{Path, PathBuf};

use fmx_core::CatalogError;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub(crate) enum ResolvedInput {
    File(PathBuf),
    Directory(PathBuf),
}

pub(crate) fn resolve_input(input: &str) -> Result<ResolvedInput, CatalogError> {
    let path = PathBuf::from(input);
    let absolute = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map_err(|error| CatalogError::new("CLI_INPUT_PATH", error.to_string()))?
            .join(path)
    };

    if !absolute.exists() {
        return Err(CatalogError::new(
            "CLI_INPUT_NOT_FOUND",
            format!("Input does not exist: {}", absolute.display()),
        ));
    }

    if absolute.is_dir() {
        Ok(ResolvedInput::Directory(absolute))
    } else {
        Ok(ResolvedInput::File(absolute))
    }
}

/// Collects every `.xml` file under `root`, sorted by path so exports run in
/// a stable order.
pub(crate) fn collect_catalog_files(root: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !path.to_string_lossy().ends_with(".xml") {
            continue;
        }

        files.push(path.to_path_buf());
    }

    if files.is_empty() {
        return Err(CatalogError::new(
            "CLI_INPUT_EMPTY",
            format!("No .xml files under {}", root.display()),
        ));
    }

    files.sort();
    Ok(files)
}
