//! Discovery of JSON files for directory batch conversion

use std::path::{Path, PathBuf};

/// Find all `.json` files in a directory, optionally recursing
pub fn find_json_files(dir: &Path, recursive: bool) -> std::io::Result<Vec<PathBuf>> {
    let mut json_files = Vec::new();

    if recursive {
        for entry in walkdir::WalkDir::new(dir) {
            let entry = entry.map_err(std::io::Error::other)?;
            let path = entry.path();

            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                json_files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                json_files.push(path);
            }
        }
    }

    json_files.sort();
    Ok(json_files)
}
