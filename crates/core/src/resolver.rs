//! Acquisition of copy parameters from arguments, defaults and prompts.

use log::debug;

use crate::config::Defaults;
use crate::console::UserConsole;
use crate::error::Result;
use crate::parameters::{label_for, override_label, CopyParameters, ParameterPosition};

/// Returns the positional argument at `position` if it is present and not blank.
fn positional(args: &[String], position: ParameterPosition) -> Option<String> {
    args.get(position.index())
        .filter(|value| !value.trim().is_empty())
        .cloned()
}

/// Resolves [`CopyParameters`] for each batch of a run.
///
/// Values supplied on the command line are used as-is. Anything missing is
/// prompted for through the [`UserConsole`], and the first prompt switches
/// the resolver into interactive mode for the rest of the run.
pub struct ParametersResolver<C: UserConsole> {
    console: C,
    defaults: Defaults,
    interactive_mode: bool,
}

impl<C: UserConsole> ParametersResolver<C> {
    pub fn new(console: C, defaults: Defaults) -> Self {
        Self {
            console,
            defaults,
            interactive_mode: false,
        }
    }

    /// Whether any value had to be prompted for so far.
    #[must_use]
    pub fn interactive_mode(&self) -> bool {
        self.interactive_mode
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Acquires the parameters of the next batch.
    ///
    /// With no `previous` batch a fresh set is built. Otherwise this is a
    /// continuation: it yields `None` unless the run is interactive and the
    /// operator wants to continue, then re-prompts the source project seeded
    /// with the previous value and re-derives the remaining fields.
    ///
    /// # Arguments
    ///
    /// * `args` - Positional command-line values; blank entries count as absent.
    /// * `previous` - Parameters of the batch just copied, if any.
    ///
    /// # Returns
    ///
    /// The parameters of the next batch, or `None` when the run should end.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn acquire_parameters(
        &mut self,
        args: &[String],
        previous: Option<&CopyParameters>,
    ) -> Result<Option<CopyParameters>> {
        let mut result = match previous {
            Some(previous) => {
                if !self.interactive_mode || !self.console.read_yes_no("Continue (Y/N)?")? {
                    return Ok(None);
                }

                let mut next = previous.clone();
                let label = label_for(ParameterPosition::SourceProject, &next);
                next.source_project = self.prompt(&label, Some(&previous.source_project))?;
                next
            }
            None => self.acquire_initial(args)?,
        };

        result.source_group = self.acquire_parameter(
            args,
            ParameterPosition::SourceGroup,
            previous.map(|p| p.source_group.as_str()),
            &result,
        )?;

        let target_project_default = previous
            .map(|p| p.target_project.clone())
            .or_else(|| self.defaults.default_project.clone())
            .unwrap_or_else(|| result.source_project.clone());
        result.target_project = self.acquire_parameter(
            args,
            ParameterPosition::TargetProject,
            Some(&target_project_default),
            &result,
        )?;

        let target_group_default = result.default_target_group();
        result.target_group = self.acquire_parameter(
            args,
            ParameterPosition::TargetGroup,
            Some(&target_group_default),
            &result,
        )?;

        debug!("Acquired parameters: {result:?}");
        Ok(Some(result))
    }

    fn acquire_initial(&mut self, args: &[String]) -> Result<CopyParameters> {
        let mut parameters = CopyParameters::default();

        let account = self.defaults.account.clone();
        parameters.account =
            self.acquire_configured(args, ParameterPosition::Account, account, &parameters)?;

        let token = self.defaults.token.clone();
        parameters.token =
            self.acquire_configured(args, ParameterPosition::Token, token, &parameters)?;

        let default_project = self.defaults.default_project.clone();
        parameters.source_project = self.acquire_parameter(
            args,
            ParameterPosition::SourceProject,
            default_project.as_deref(),
            &parameters,
        )?;

        Ok(parameters)
    }

    /// Argument first, then the configured value, then a prompt.
    fn acquire_configured(
        &mut self,
        args: &[String],
        position: ParameterPosition,
        configured: Option<String>,
        parameters: &CopyParameters,
    ) -> Result<String> {
        if let Some(value) = positional(args, position).or(configured) {
            return Ok(value);
        }

        self.acquire_parameter(args, position, None, parameters)
    }

    /// Returns the argument at `position`, prompting until a non-blank
    /// value is given when it is missing.
    ///
    /// The prompt label depends on `parameters` (file or remote location).
    /// An empty answer accepts `default` if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn acquire_parameter(
        &mut self,
        args: &[String],
        position: ParameterPosition,
        default: Option<&str>,
        parameters: &CopyParameters,
    ) -> Result<String> {
        if let Some(value) = positional(args, position) {
            return Ok(value);
        }

        let label = label_for(position, parameters);
        self.prompt(&label, default)
    }

    /// Asks whether an existing target may be overwritten.
    ///
    /// Only an explicit `Y` confirms; there is no default answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn confirm_override(&mut self, args: &[String], target_name: &str) -> Result<bool> {
        let answer = match positional(args, ParameterPosition::OverrideExistentTarget) {
            Some(answer) => answer,
            None => self.prompt(&override_label(target_name), None)?,
        };

        Ok(answer.trim().eq_ignore_ascii_case("Y"))
    }

    fn prompt(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        self.interactive_mode = true;

        let default = default.filter(|d| !d.trim().is_empty());

        loop {
            match default {
                Some(default) => self.console.write(&format!("{label} [{default}]: "))?,
                None => self.console.write(&format!("{label}: "))?,
            }

            let read_value = self.console.read_line()?.trim().to_string();

            if !read_value.is_empty() {
                return Ok(read_value);
            }

            if let Some(default) = default {
                return Ok(default.to_string());
            }

            // No input and no default - ask again
        }
    }
}
