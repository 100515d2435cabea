//! # Gobrew Core Library
//!
//! This crate contains the core logic of `gobrew`, a version manager for the Go toolchain.
//! Versions are installed side by side under an install root (`~/.gobrew` by default) and
//! the active one is selected by repointing two symbolic links:
//!
//! ```text
//! ~/.gobrew/versions/<version>/go/...
//! ~/.gobrew/current/bin -> versions/<version>/go/bin
//! ~/.gobrew/current/go  -> versions/<version>/go
//! ~/.gobrew/downloads/
//! ```
//!
//! The library never exits the process; every operation returns a [`Result`] and the
//! `gobrew` binary decides how to report it.
//!
//! ## Modules Overview
//! - [`layout`] – The directory skeleton and the paths derived from the install root
//! - [`resolver`] – Current version, installed check, host arch and artifact names
//! - [`installer`] – Fetch, extract, verify, with rollback on failure
//! - [`switcher`] – Repointing the `current/*` links
//! - [`remover`] – Guarded removal of an installed version
//! - [`registry`] – Remote version listing and download URLs
//! - [`transport`] – Download and extraction collaborators
//! - [`global`] – Install root discovery and `config.toml`

pub mod error;
pub mod layout;
pub mod resolver;
pub mod installer;
pub mod switcher;
pub mod remover;
pub mod registry;
pub mod transport;
pub mod global;
mod gobrew;

pub use error::{GobrewError, Result};
pub use gobrew::{Gobrew, InstalledVersion};
pub use global::config::Config;
pub use installer::InstallOutcome;
pub use layout::Layout;
pub use switcher::SwitchOutcome;
