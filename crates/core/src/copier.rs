//! Batch-by-batch copying of variable groups.
//!
//! A run acquires parameters, copies every matching source group, then
//! asks for the next batch until the resolver has none. Items whose target
//! exists are only replaced after the operator confirms. Any error inside
//! a batch ends the whole run.

use log::{error, info, warn};

use crate::console::UserConsole;
use crate::error::{Error, Result};
use crate::parameters::CopyParameters;
use crate::repository::{choose, FileRepository, VariableGroupRepository};
use crate::resolver::ParametersResolver;

/// Counts of groups handled during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopySummary {
    pub copied: usize,
    pub skipped: usize,
}

pub struct Copier<C: UserConsole> {
    resolver: ParametersResolver<C>,
    file_repository: FileRepository,
}

impl<C: UserConsole> Copier<C> {
    pub fn new(resolver: ParametersResolver<C>) -> Self {
        Self {
            resolver,
            file_repository: FileRepository,
        }
    }

    #[must_use]
    pub fn resolver(&self) -> &ParametersResolver<C> {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut ParametersResolver<C> {
        &mut self.resolver
    }

    /// Runs every batch requested by the operator.
    ///
    /// `connect` opens the remote repository from the account and token of
    /// the first batch. The repository is dropped when the run ends,
    /// whether it succeeded or not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] if a batch's parameters are
    /// rejected, or the first error raised while copying. Both are logged
    /// with the parameter context before being returned.
    pub fn copy<R, F>(&mut self, args: &[String], connect: F) -> Result<CopySummary>
    where
        R: VariableGroupRepository,
        F: FnOnce(&str, &str) -> Result<R>,
    {
        let Some(mut parameters) = self.acquire_valid(args, None)? else {
            return Ok(CopySummary::default());
        };

        let remote_repository = match connect(&parameters.account, &parameters.token) {
            Ok(repository) => repository,
            Err(e) => {
                error!(
                    "Error while connecting to the service: {e} ({})",
                    parameters.log_context()
                );
                return Err(e);
            }
        };

        let mut summary = CopySummary::default();

        loop {
            if let Err(e) = self.copy_batch(args, &parameters, &remote_repository, &mut summary) {
                error!(
                    "Error while copying a variable group: {e} ({})",
                    parameters.log_context()
                );
                return Err(e);
            }

            match self.acquire_valid(args, Some(&parameters))? {
                Some(next) => parameters = next,
                None => break,
            }
        }

        info!(
            "Copied {} variable group(s), skipped {}",
            summary.copied, summary.skipped
        );
        Ok(summary)
    }

    fn acquire_valid(
        &mut self,
        args: &[String],
        previous: Option<&CopyParameters>,
    ) -> Result<Option<CopyParameters>> {
        let Some(parameters) = self
            .resolver
            .acquire_parameters(args, previous)
            .inspect_err(|e| error!("Error while acquiring parameters: {e}"))?
        else {
            return Ok(None);
        };

        if let Err(reason) = parameters.validate() {
            error!("Incorrect input parameters: {reason} ({})", parameters.log_context());
            return Err(Error::InvalidParameters(reason));
        }

        Ok(Some(parameters))
    }

    fn copy_batch(
        &mut self,
        args: &[String],
        parameters: &CopyParameters,
        remote_repository: &dyn VariableGroupRepository,
        summary: &mut CopySummary,
    ) -> Result<()> {
        let file_repository = self.file_repository;
        let source_repository =
            choose(&parameters.source_project, &file_repository, remote_repository);
        let target_repository =
            choose(&parameters.target_project, &file_repository, remote_repository);

        let source_groups =
            source_repository.get_all(&parameters.source_project, &parameters.source_group)?;

        if source_groups.is_empty() {
            warn!(
                "Cannot find any matching source groups ({})",
                parameters.log_context()
            );
            return Ok(());
        }

        for source_group in &source_groups {
            let target_name = parameters.actual_target_name(&source_group.name);
            let context = parameters
                .log_context()
                .with_actual(&source_group.name, &target_name);

            info!("Trying to copy a variable group ({context})");

            if let Some(existing) =
                target_repository.get(&parameters.target_project, &target_name)?
            {
                if !self.resolver.confirm_override(args, &target_name)? {
                    info!("Skipping existent target group ({context})");
                    summary.skipped += 1;
                    continue;
                }

                if let Some(id) = existing.id {
                    target_repository.delete(&parameters.target_project, id)?;
                }
            }

            let target_group = source_group.clone_for_target(&target_name);
            target_repository.add(&parameters.target_project, &target_name, &target_group)?;

            let missing_secrets = target_group.missing_secret_values();
            if missing_secrets > 0 {
                warn!("{missing_secrets} secret value(s) were not copied and must be set again ({context})");
            }

            info!("Successfully copied a variable group ({context})");
            summary.copied += 1;
        }

        Ok(())
    }
}
