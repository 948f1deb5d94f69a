//! Variable groups stored as pretty-printed JSON files.
//!
//! The group "name" used by this store is a path. A folder stands for all
//! groups in it; a group read from disk is named after its file stem.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::literals::{is_file_location, FILE_EXT};
use crate::repository::VariableGroupRepository;
use crate::variable_group::VariableGroup;

#[derive(Debug, Default, Clone, Copy)]
pub struct FileRepository;

fn ensure_file_location(project: &str) -> Result<()> {
    if is_file_location(project) {
        Ok(())
    } else {
        Err(Error::NotFileLocation(project.to_string()))
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_group_extension(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| format!(".{}", ext.to_string_lossy()).eq_ignore_ascii_case(FILE_EXT))
}

/// Reads one group file; anything unreadable counts as not found.
fn read_group(path: &Path) -> Option<VariableGroup> {
    if !path.is_file() {
        debug!("Variable group file `{}` does not exist", path.display());
        return None;
    }

    let serialized = match fs::read_to_string(path) {
        Ok(serialized) => serialized,
        Err(e) => {
            warn!("Cannot read variable group file `{}`: {e}", path.display());
            return None;
        }
    };

    match serde_json::from_str::<VariableGroup>(&serialized) {
        Ok(mut group) => {
            group.name = file_stem(path);
            Some(group)
        }
        Err(e) => {
            warn!("Cannot parse variable group file `{}`: {e}", path.display());
            None
        }
    }
}

fn list_group_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let folder_name = folder.to_string_lossy();
    let entries =
        fs::read_dir(folder).map_err(|e| Error::io_error("variable group folder", &folder_name, e))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!("Skipping unreadable entry in `{folder_name}`: {e}");
                None
            }
        })
        .filter(|path| has_group_extension(path))
        .collect();

    paths.sort();
    Ok(paths)
}

impl VariableGroupRepository for FileRepository {
    fn get_all(&self, project: &str, group: &str) -> Result<Vec<VariableGroup>> {
        ensure_file_location(project)?;

        let path = Path::new(group);
        if path.is_dir() {
            let groups = list_group_files(path)?
                .iter()
                .filter_map(|file| read_group(file))
                .collect();
            return Ok(groups);
        }

        Ok(read_group(path).into_iter().collect())
    }

    fn get(&self, project: &str, name: &str) -> Result<Option<VariableGroup>> {
        ensure_file_location(project)?;

        Ok(read_group(Path::new(name)))
    }

    fn delete(&self, project: &str, id: i64) -> Result<()> {
        ensure_file_location(project)?;

        // `add` overwrites the file in place
        debug!("Nothing to delete for group {id} in the file store");
        Ok(())
    }

    fn add(&self, project: &str, name: &str, group: &VariableGroup) -> Result<()> {
        ensure_file_location(project)?;

        let path = Path::new(name);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Error::io_error("variable group folder", &parent.to_string_lossy(), e))?;
        }

        let stored = group.clone_for_target(&file_stem(path));
        let serialized =
            serde_json::to_string_pretty(&stored).map_err(|e| Error::json_error("writing", name, e))?;

        debug!("Writing variable group file `{name}`");
        fs::write(path, serialized).map_err(|e| Error::io_error("variable group", name, e))
    }
}
