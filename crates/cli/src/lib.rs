//! Variable Group Copier CLI Library
//!
//! This crate provides the command-line interface for the variable group
//! copier: argument parsing and the terminal console used for prompts.
//!
//! # Examples
//!
//! The CLI binary (`vgc`) can be used in several ways:
//!
//! ```bash
//! # Interactive mode - prompts for everything that is missing
//! vgc
//!
//! # Clone a group inside a project (target defaults to "GroupX - Cloned")
//! vgc ProjA GroupX ProjA
//!
//! # Copy all groups of a project to another one, prefixing their names
//! vgc ProjA '*' ProjB 'Copy of '
//!
//! # Export a group to a folder, then import every file of the folder
//! vgc ProjA GroupX /file backup
//! vgc /file backup ProjB imported-
//! ```

pub mod cli_args;
pub mod console;
