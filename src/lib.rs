//! gitprompt - a compact, styled git status summary for shell prompts.
//!
//! The library renders a [`StatusRecord`] through a small format language
//! (literal text, color and attribute directives, data placeholders and
//! optional groups) into an ANSI-styled string plus its display width.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Prompt rendering and style tracking
//! - Repository status collection
//! - Configuration and error types
//!
//! # Example
//! ```
//! use gitprompt::{render, StatusRecord};
//!
//! let status = StatusRecord {
//!     branch: "main".to_string(),
//!     ahead: 2,
//!     ..Default::default()
//! };
//! let out = render(Some(&status), "%h[ ↑%a][ ↓%b]");
//! assert_eq!(out.text, "main ↑2");
//! assert_eq!(out.width, 7);
//! ```

pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    format_help,
    print_error,
    prompt_text,
    read_status,
    // Rendering
    render,
    zsh_width_marker,
    Attribute,
    FormatSource,
    // Error handling
    GitPromptError,
    GitRepo,
    Placeholder,
    PromptConfig,
    Rendered,
    Result,
    // Status
    StatusRecord,
    StyleState,
    StyleTracker,
    DEFAULT_FORMAT,
};
