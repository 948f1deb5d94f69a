//! Persisted defaults for the copier.
//!
//! Defaults come from an optional YAML file and are overridden by
//! environment variables. They are read once at startup and only fill in
//! values the operator did not supply on the command line.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::fs::File;
use std::path::Path;

use leon::Template;
use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Default path for the defaults file
const DEFAULT_CONFIG_PATH: &str = "~/.variable-group-copier/config.yml";

/// Service URL used when none is configured; `{account}` is replaced.
pub const DEFAULT_SERVICE_URL: &str = "https://{account}.visualstudio.com";

pub const ACCOUNT_VARIABLE: &str = "VGC_ACCOUNT";
pub const TOKEN_VARIABLE: &str = "VGC_TOKEN";
pub const DEFAULT_PROJECT_VARIABLE: &str = "VGC_DEFAULT_PROJECT";
pub const SERVICE_URL_VARIABLE: &str = "VGC_SERVICE_URL";

/// Values used when the command line leaves a parameter blank.
#[derive(Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub account: Option<String>,
    pub token: Option<String>,
    pub default_project: Option<String>,
    pub service_url: Option<String>,
}

impl Debug for Defaults {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Defaults")
            .field("account", &self.account)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("default_project", &self.default_project)
            .field("service_url", &self.service_url)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Defaults {
    /// Overrides fields with the values returned by `lookup` for the
    /// `VGC_*` variables. Blank values are ignored.
    #[must_use]
    pub fn with_environment<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            account: non_blank(lookup(ACCOUNT_VARIABLE)).or(self.account),
            token: non_blank(lookup(TOKEN_VARIABLE)).or(self.token),
            default_project: non_blank(lookup(DEFAULT_PROJECT_VARIABLE)).or(self.default_project),
            service_url: non_blank(lookup(SERVICE_URL_VARIABLE)).or(self.service_url),
        }
    }

    fn without_blanks(self) -> Self {
        Self {
            account: non_blank(self.account),
            token: non_blank(self.token),
            default_project: non_blank(self.default_project),
            service_url: non_blank(self.service_url),
        }
    }

    /// Renders the service base URL for `account`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured template cannot be parsed or
    /// references a placeholder other than `{account}`.
    pub fn service_url(&self, account: &str) -> Result<String> {
        let source = self.service_url.as_deref().unwrap_or(DEFAULT_SERVICE_URL);
        let template = Template::parse(source)?;

        let mut values: HashMap<String, String> = HashMap::new();
        values.insert("account".to_string(), account.to_string());

        let rendered = template.render(&values)?;
        Ok(rendered.trim_end_matches('/').to_string())
    }
}

/// Resolves the defaults file path, expanding `~`.
///
/// # Examples
///
/// ```
/// use variable_group_copier_core::config::get_config_path;
///
/// let custom = get_config_path(Some("/etc/vgc.yml"));
/// assert_eq!(custom, "/etc/vgc.yml");
/// ```
#[must_use]
pub fn get_config_path(config_path_arg: Option<&str>) -> String {
    let config_path = config_path_arg.unwrap_or(DEFAULT_CONFIG_PATH);

    shellexpand::tilde(config_path).to_string()
}

/// Reads the defaults file if it exists.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be opened or is not
/// valid YAML.
pub fn read_defaults_file(config_path: &str) -> Result<Defaults> {
    if !Path::new(config_path).exists() {
        debug!("No defaults file at `{config_path}`");
        return Ok(Defaults::default());
    }

    let reader =
        File::open(config_path).map_err(|e| Error::io_error("defaults", config_path, e))?;

    let defaults: Defaults = serde_yaml::from_reader(reader)
        .map_err(|e| Error::yaml_error("reading", "defaults", config_path, e))?;

    Ok(defaults.without_blanks())
}

/// Loads the defaults file and applies the process environment on top.
///
/// # Errors
///
/// See [`read_defaults_file`].
pub fn load_defaults(config_path: &str) -> Result<Defaults> {
    let defaults = read_defaults_file(config_path)?.with_environment(|name| std::env::var(name).ok());
    debug!("Loaded defaults: {defaults:?}");
    Ok(defaults)
}
