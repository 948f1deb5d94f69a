//! Copy request model and the pure rules derived from it.
//!
//! Everything here is side-effect free: validation, default target
//! names, per-group target names and prompt labels are all computed from
//! a [`CopyParameters`] value on demand.

use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use crate::error::InvalidParameters;
use crate::literals::{is_all_groups, is_file_location, same_name, FILE_EXT, FILE_LOCATION};

/// Positions of the copy parameters on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterPosition {
    SourceProject = 0,
    SourceGroup,
    TargetProject,
    TargetGroup,
    Token,
    OverrideExistentTarget,
    Account,
}

impl ParameterPosition {
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One batch worth of copy parameters.
///
/// Projects are either a remote project name or [`FILE_LOCATION`]; groups
/// are a literal name, a file or folder path, or the all-groups selector.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CopyParameters {
    pub account: String,
    pub token: String,
    pub source_project: String,
    pub source_group: String,
    pub target_project: String,
    pub target_group: String,
}

impl Debug for CopyParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopyParameters")
            .field("account", &self.account)
            .field("token", &"<redacted>")
            .field("source_project", &self.source_project)
            .field("source_group", &self.source_group)
            .field("target_project", &self.target_project)
            .field("target_group", &self.target_group)
            .finish()
    }
}

impl CopyParameters {
    /// Checks the parameter combination, returning the first broken rule.
    ///
    /// Rules are checked in order: both sides on files, identical source
    /// and target, `*` on either side of a file copy, then a `*` target
    /// for a single source group within one project.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the combination can be copied.
    ///
    /// # Errors
    ///
    /// Returns the [`InvalidParameters`] variant describing why the
    /// combination cannot be copied.
    pub fn validate(&self) -> Result<(), InvalidParameters> {
        let source_is_file = is_file_location(&self.source_project);
        let target_is_file = is_file_location(&self.target_project);

        if source_is_file && target_is_file {
            return Err(InvalidParameters::BothFiles);
        }

        if same_name(&self.source_project, &self.target_project)
            && same_name(&self.source_group, &self.target_group)
        {
            return Err(InvalidParameters::SameSourceAndTarget);
        }

        let uses_all_groups = is_all_groups(&self.source_group) || is_all_groups(&self.target_group);
        if uses_all_groups && (source_is_file || target_is_file) {
            return Err(InvalidParameters::WildcardWithFile);
        }

        if !is_all_groups(&self.source_group)
            && is_all_groups(&self.target_group)
            && same_name(&self.source_project, &self.target_project)
        {
            return Err(InvalidParameters::WildcardAliasesSource);
        }

        Ok(())
    }

    /// Target group offered as the default when prompting for it.
    #[must_use]
    pub fn default_target_group(&self) -> String {
        if is_file_location(&self.target_project) {
            format!("{}{FILE_EXT}", self.source_group)
        } else if same_name(&self.source_project, &self.target_project) {
            format!("{} - Cloned", self.source_group)
        } else {
            self.source_group.clone()
        }
    }

    /// Derives the target name for one concrete source group.
    ///
    /// `actual_source_name` is the name of a group produced by expanding
    /// the source selector; for a single named source it is that name.
    ///
    /// # Arguments
    ///
    /// * `actual_source_name` - Name of the concrete source group being copied.
    ///
    /// # Returns
    ///
    /// The source name itself for a `*` target, a file path inside the
    /// target folder for a file target, the target group for a single named
    /// source, and otherwise the target group used as a prefix.
    #[must_use]
    pub fn actual_target_name(&self, actual_source_name: &str) -> String {
        if is_all_groups(&self.target_group) {
            return actual_source_name.to_string();
        }

        if is_file_location(&self.target_project) {
            return Path::new(&self.target_group)
                .join(format!("{actual_source_name}{FILE_EXT}"))
                .to_string_lossy()
                .into_owned();
        }

        if !is_all_groups(&self.source_group) && !is_file_location(&self.source_project) {
            return self.target_group.clone();
        }

        // Target group acts as a prefix
        format!("{}{actual_source_name}", self.target_group)
    }

    /// Renders the parameters for log lines, never including the token.
    #[must_use]
    pub fn log_context(&self) -> LogContext<'_> {
        LogContext {
            parameters: self,
            actual: None,
        }
    }
}

/// Human readable prompt label for a parameter.
///
/// Group labels depend on whether the matching project is a file location.
#[must_use]
pub fn label_for(position: ParameterPosition, parameters: &CopyParameters) -> String {
    match position {
        ParameterPosition::Account => "DevOps account".to_string(),
        ParameterPosition::Token => "DevOps access token".to_string(),
        ParameterPosition::SourceProject => format!("Source project or '{FILE_LOCATION}'"),
        ParameterPosition::TargetProject => format!("Target project or '{FILE_LOCATION}'"),
        ParameterPosition::SourceGroup => {
            if is_file_location(&parameters.source_project) {
                "Source file name or folder name".to_string()
            } else {
                "Source group name".to_string()
            }
        }
        ParameterPosition::TargetGroup => {
            if is_file_location(&parameters.target_project) {
                "Target folder name".to_string()
            } else {
                "Target group name or prefix".to_string()
            }
        }
        ParameterPosition::OverrideExistentTarget => "Override existent target (Y/N)?".to_string(),
    }
}

/// Label for the overwrite confirmation of one target.
#[must_use]
pub fn override_label(target_name: &str) -> String {
    format!("Override existent target `{target_name}` (Y/N)?")
}

/// Display adapter that renders copy parameters as `key=value` pairs.
pub struct LogContext<'a> {
    parameters: &'a CopyParameters,
    actual: Option<(&'a str, &'a str)>,
}

impl<'a> LogContext<'a> {
    /// Adds the concrete source and target group names of one item.
    #[must_use]
    pub fn with_actual(self, source: &'a str, target: &'a str) -> Self {
        Self {
            actual: Some((source, target)),
            ..self
        }
    }
}

impl Display for LogContext<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let p = self.parameters;
        write!(
            f,
            "account={:?} source_project={:?} source_group={:?} target_project={:?} target_group={:?}",
            p.account, p.source_project, p.source_group, p.target_project, p.target_group
        )?;

        if let Some((source, target)) = self.actual {
            write!(f, " actual_source_group={source:?} actual_target_group={target:?}")?;
        }

        Ok(())
    }
}
