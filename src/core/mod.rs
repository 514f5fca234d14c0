//! Core functionality for the gitprompt tool.
//!
//! This module provides the prompt renderer, the repository status collector,
//! configuration and error handling.

pub mod config;
pub mod dirs;
pub mod error;
pub mod format;
pub mod git;
pub mod output;
pub mod status;
pub mod style;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{GitPromptError, Result};

// === Rendering ===
// Format interpreter and the ANSI style tracker it drives
pub use format::{render, Rendered};
pub use style::{Attribute, StyleState, StyleTracker};

// === Status ===
// Values a prompt can show, and how they are collected from git
pub use git::{read_status, GitRepo};
pub use status::{Placeholder, StatusRecord};

// === Configuration ===
pub use config::{FormatSource, PromptConfig, DEFAULT_FORMAT};

// === Output formatting ===
pub use output::{format_help, print_error, prompt_text, zsh_width_marker};
