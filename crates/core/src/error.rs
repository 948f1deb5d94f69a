use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a combination of copy parameters is rejected.
///
/// The variants are checked in declaration order by
/// [`CopyParameters::validate`](crate::parameters::CopyParameters::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidParameters {
    #[error("Source and target cannot be both files")]
    BothFiles,

    #[error("Source and target cannot be the same")]
    SameSourceAndTarget,

    #[error("All groups selector `*` cannot be used together with a file location")]
    WildcardWithFile,

    #[error("A single source group cannot be copied onto all groups of its own project")]
    WildcardAliasesSource,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Incorrect input parameters: {}", .0)]
    InvalidParameters(#[from] InvalidParameters),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} variable group file at `{}`: {}", .action, .path, .original)]
    Json {
        action: String,
        path: String,
        original: serde_json::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Error parsing service URL template: {}", .0)]
    Parse(#[from] leon::ParseError),

    #[error("Error rendering service URL template: {}", .0)]
    Render(#[from] leon::RenderError),

    #[error("HTTP error: {}", .0)]
    Http(#[from] reqwest::Error),

    #[error("Request to `{}` failed with status {}: {}", .url, .status, .message)]
    Remote {
        status: u16,
        url: String,
        message: String,
    },

    #[error("File repository used with `{}`, which is not a file location", .0)]
    NotFileLocation(String),
}

impl Error {
    pub fn io_error(file_description: &str, path: &str, original: std::io::Error) -> Self {
        Self::Io {
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn json_error(action: &str, path: &str, original: serde_json::Error) -> Self {
        Self::Json {
            action: action.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn yaml_error(
        action: &str,
        file_description: &str,
        path: &str,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action: action.to_string(),
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn remote_error(status: u16, url: &str, message: String) -> Self {
        Self::Remote {
            status,
            url: url.to_string(),
            message,
        }
    }
}
