//! Reserved tokens and the location classifier.
//!
//! A project token equal to [`FILE_LOCATION`] means "the local filesystem"
//! and a group token equal to [`ALL_GROUPS`] means "every group at the
//! location". Both comparisons ignore case.

/// Project token that selects the local file store.
pub const FILE_LOCATION: &str = "/file";

/// Group token that selects every group at a location.
pub const ALL_GROUPS: &str = "*";

/// Extension of variable group files written by the file store.
pub const FILE_EXT: &str = ".json";

/// Returns `true` if `project` denotes the local file store.
///
/// # Examples
///
/// ```
/// use variable_group_copier_core::literals::is_file_location;
///
/// assert!(is_file_location("/FILE"));
/// assert!(!is_file_location("MyProject"));
/// ```
#[must_use]
pub fn is_file_location(project: &str) -> bool {
    project.eq_ignore_ascii_case(FILE_LOCATION)
}

/// Returns `true` if `group` is the all-groups selector.
#[must_use]
pub fn is_all_groups(group: &str) -> bool {
    group.eq_ignore_ascii_case(ALL_GROUPS)
}

/// Case-insensitive equality used for project and group names.
#[must_use]
pub fn same_name(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_location_ignores_case() {
        assert!(is_file_location("/file"));
        assert!(is_file_location("/File"));
        assert!(!is_file_location("file"));
        assert!(!is_file_location(""));
    }

    #[test]
    fn test_all_groups() {
        assert!(is_all_groups("*"));
        assert!(!is_all_groups("**"));
        assert!(!is_all_groups("Group*"));
    }

    #[test]
    fn test_same_name() {
        assert!(same_name("ProjA", "proja"));
        assert!(!same_name("ProjA", "ProjB"));
    }
}
