//! # apimock-dist
//!
//! Delivery glue for the prebuilt `apimock` binary published through npm.
//!
//! The binary itself ships in one package per platform (`@apimock-rs/bin-linux-x64-gnu`,
//! `@apimock-rs/bin-darwin-arm64`, `@apimock-rs/bin-win32-x64-msvc`). This crate provides
//! the two small programs around it:
//!
//! - `apimock-install` runs once at install time. It picks the package for the running
//!   platform and places its binary at a fixed path in the main package, as a symlink or,
//!   when linking isn't possible, as a copy.
//! - `apimock-launch` runs on every invocation. It starts that binary with the same
//!   arguments and standard streams and exits with the binary's status.
//!
//! ## Modules Overview
//! - [`platform`] – Mapping of OS/architecture names to platform packages
//! - [`layout`] – Package layout, `dist.toml` configuration, source/destination paths
//! - [`installer`] – Link-or-copy installation
//! - [`launcher`] – Transparent child process relay
//! - [`execute`] – Entry points shared by both binaries
//! - [`cli`] – Installer command line
//! - [`output`] – Status lines
//! - [`error`] – Error type

pub mod error;
pub mod platform;
pub mod layout;
pub mod installer;
pub mod launcher;
pub mod output;
pub mod cli;
pub mod execute;

pub use error::{Error, Result};
pub use platform::*;
pub use layout::*;
pub use installer::*;
pub use launcher::*;
