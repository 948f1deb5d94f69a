//! Variable Group Copier Core Library
//!
//! This crate provides the core functionality for copying DevOps variable
//! groups between projects, or between a project and local JSON files.
//!
//! # Key Features
//!
//! - **Parameter Resolution**: Reconcile positional arguments, configured defaults
//!   and interactive prompts into validated copy parameters
//! - **Target Naming**: Derive target names for single groups, all-groups
//!   selections, files and folders
//! - **Repositories**: Uniform access to the remote service and the file store
//! - **Copy Orchestration**: Batch loop with overwrite confirmation
//! - **Error Handling**: Error types for every failure mode
//!
//! # Examples
//!
//! Deriving target names:
//!
//! ```
//! use variable_group_copier_core::parameters::CopyParameters;
//!
//! let parameters = CopyParameters {
//!     source_project: "ProjA".to_string(),
//!     source_group: "*".to_string(),
//!     target_project: "ProjB".to_string(),
//!     target_group: "Pre-".to_string(),
//!     ..CopyParameters::default()
//! };
//!
//! assert!(parameters.validate().is_ok());
//! assert_eq!(parameters.actual_target_name("Foo"), "Pre-Foo");
//! ```

pub mod config;
pub mod console;
pub mod copier;
pub mod error;
pub mod literals;
pub mod parameters;
pub mod repository;
pub mod resolver;
pub mod variable_group;
