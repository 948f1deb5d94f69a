//! Variable groups stored in the DevOps service.
//!
//! Uses the project-scoped distributed task REST endpoints with basic
//! authentication (empty user name, access token as password). Calls are
//! blocking so every request completes before the copier moves on.

use indexmap::IndexMap;
use log::debug;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::literals::{is_all_groups, same_name};
use crate::repository::VariableGroupRepository;
use crate::variable_group::{VariableGroup, VariableValue};

const API_VERSION: &str = "5.0-preview.1";

/// Group type used when a group carries none, e.g. one read from a file.
const DEFAULT_GROUP_TYPE: &str = "Vsts";

#[derive(Deserialize)]
struct VariableGroupList {
    #[serde(default)]
    value: Vec<VariableGroup>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VariableGroupParameters<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(rename = "type")]
    group_type: &'a str,
    variables: &'a IndexMap<String, VariableValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_data: Option<&'a serde_json::Value>,
}

/// Connection to one account of the service, scoped to a single run.
pub struct RemoteRepository {
    client: Client,
    base_url: String,
    token: String,
}

impl RemoteRepository {
    /// Builds a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn connect(base_url: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("variable-group-copier/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!("Connecting to `{base_url}`");
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn collection_url(&self, project: &str) -> String {
        format!(
            "{}/{project}/_apis/distributedtask/variablegroups",
            self.base_url
        )
    }

    fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        let response = request
            .basic_auth("", Some(&self.token))
            .query(&[("api-version", API_VERSION)])
            .send()?;

        let status = response.status();
        debug!("`{url}` responded with {status}");

        if !status.is_success() {
            let message = match response.text() {
                Ok(message) => message,
                Err(e) => {
                    debug!("Could not read the error response from `{url}`: {e}");
                    String::new()
                }
            };
            return Err(Error::remote_error(status.as_u16(), url, message));
        }

        Ok(response)
    }

    fn list(&self, project: &str, group_name: Option<&str>) -> Result<Vec<VariableGroup>> {
        let url = self.collection_url(project);
        let mut request = self.client.get(&url);
        if let Some(group_name) = group_name {
            request = request.query(&[("groupName", group_name)]);
        }

        let list: VariableGroupList = self.send(request, &url)?.json()?;
        Ok(list.value)
    }
}

impl VariableGroupRepository for RemoteRepository {
    fn get_all(&self, project: &str, group: &str) -> Result<Vec<VariableGroup>> {
        if is_all_groups(group) {
            return self.list(project, None);
        }

        Ok(self.get(project, group)?.into_iter().collect())
    }

    fn get(&self, project: &str, name: &str) -> Result<Option<VariableGroup>> {
        let found = self
            .list(project, Some(name))?
            .into_iter()
            .find(|group| same_name(&group.name, name));

        Ok(found)
    }

    fn delete(&self, project: &str, id: i64) -> Result<()> {
        let url = format!("{}/{id}", self.collection_url(project));
        self.send(self.client.delete(&url), &url)?;
        Ok(())
    }

    fn add(&self, project: &str, name: &str, group: &VariableGroup) -> Result<()> {
        let url = self.collection_url(project);
        let body = VariableGroupParameters {
            name,
            description: group.description.as_deref(),
            group_type: group.group_type.as_deref().unwrap_or(DEFAULT_GROUP_TYPE),
            variables: &group.variables,
            provider_data: group.provider_data.as_ref(),
        };

        self.send(self.client.post(&url).json(&body), &url)?;
        Ok(())
    }
}

impl Drop for RemoteRepository {
    fn drop(&mut self) {
        debug!("Closing connection to `{}`", self.base_url);
    }
}
