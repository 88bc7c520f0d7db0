use std::path::PathBuf;
use clap::Parser;

/// Links (or copies) the prebuilt binary for this platform next to the launcher.
///
/// Meant to run from the package manager's postinstall hook with no arguments.
#[derive(Debug, Parser, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct InstallCli {
    /// Package root to install into. Defaults to the directory of this executable.
    #[clap(long, hide = true)]
    pub root: Option<PathBuf>,
    /// Operating system name (npm naming) to resolve instead of the running one.
    #[clap(long, hide = true)]
    pub os: Option<String>,
    /// CPU architecture name (npm naming) to resolve instead of the running one.
    #[clap(long, hide = true)]
    pub arch: Option<String>,
}
