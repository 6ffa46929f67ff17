//! Stackstart Core - selection and command generation for the onboarding wizard
//!
//! This library helps a user pick a technology stack (language, backend,
//! database, authentication) and turns the choice into copyable setup commands
//! and illustrative API examples.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Catalog** - Static option tables per category
//! - **Layer 2: Selection & Generation** - `Selection` with auto-fill rules, pure
//!   command and example generators, YAML presets
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based wizard (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based wizard module
//!
//! # Example Usage (without TUI)
//!
//! ```
//! use stackstart_core::{commands, Category, Selection};
//!
//! let mut selection = Selection::new();
//! selection.choose(Category::Language, "typescript")?;
//! selection.choose(Category::Backend, "firebase")?; // database becomes firestore
//! selection.choose(Category::Auth, "jwt")?;
//! assert!(selection.is_ready());
//!
//! let groups = commands::generate(&selection)?;
//! assert_eq!(groups.len(), 4);
//! # Ok::<(), stackstart_core::StackError>(())
//! ```

pub mod catalog;
pub mod commands;
pub mod error;
pub mod guide;
pub mod preset;
pub mod render;
pub mod selection;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{
    display_name, is_valid, list_options, AuthMethod, Backend, Category, Choice, Complexity,
    Database, Language, StackOption,
};
pub use commands::{format_groups, generate, CommandGroup};
pub use error::{Result, StackError};
pub use guide::{api_examples, ApiExamples, Role};
pub use preset::Preset;
pub use selection::{Selection, Stack, DEFAULT_STACK};

#[cfg(feature = "tui")]
pub use tui::run;
