//! Storage backends for variable groups.
//!
//! Both backends address groups by a project (location) and a name. The
//! [`choose`] function picks the backend for a project token using the
//! location classifier.

pub mod file;
pub mod remote;

pub use file::FileRepository;
pub use remote::RemoteRepository;

use crate::error::Result;
use crate::literals::is_file_location;
use crate::variable_group::VariableGroup;

pub trait VariableGroupRepository {
    /// Returns the groups selected by `group` at `project`.
    ///
    /// A literal selector yields zero or one group; the all-groups selector
    /// (or a folder for the file store) yields every group found.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn get_all(&self, project: &str, group: &str) -> Result<Vec<VariableGroup>>;

    /// Looks up one group by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn get(&self, project: &str, name: &str) -> Result<Option<VariableGroup>>;

    /// Deletes the group with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the deletion.
    fn delete(&self, project: &str, id: i64) -> Result<()>;

    /// Creates the group `name`, overwriting an existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the group cannot be stored.
    fn add(&self, project: &str, name: &str, group: &VariableGroup) -> Result<()>;
}

/// Picks the file repository for file locations and the remote one otherwise.
pub fn choose<'a>(
    project: &str,
    file_repository: &'a dyn VariableGroupRepository,
    remote_repository: &'a dyn VariableGroupRepository,
) -> &'a dyn VariableGroupRepository {
    if is_file_location(project) {
        file_repository
    } else {
        remote_repository
    }
}

impl<T: VariableGroupRepository + ?Sized> VariableGroupRepository for &T {
    fn get_all(&self, project: &str, group: &str) -> Result<Vec<VariableGroup>> {
        (**self).get_all(project, group)
    }

    fn get(&self, project: &str, name: &str) -> Result<Option<VariableGroup>> {
        (**self).get(project, name)
    }

    fn delete(&self, project: &str, id: i64) -> Result<()> {
        (**self).delete(project, id)
    }

    fn add(&self, project: &str, name: &str, group: &VariableGroup) -> Result<()> {
        (**self).add(project, name, group)
    }
}
