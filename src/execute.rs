use std::ffi::OsString;
use anyhow::{Context, Result};
use crate::cli::InstallCli;
use crate::installer::{install, InstallOutcome};
use crate::launcher::{spawn, ChildOutcome, Termination};
use crate::layout::{current_root, Layout};
use crate::platform::{extension_for_os, host_arch, host_os, resolve};

/// Postinstall entry point: resolve the platform package, then link or copy its binary.
pub fn execute_install(cli: InstallCli) -> Result<InstallOutcome> {
    let os = cli.os.as_deref().unwrap_or(host_os());
    let arch = cli.arch.as_deref().unwrap_or(host_arch());
    let target = resolve(os, arch)?;
    let root = match cli.root {
        Some(root) => root,
        None => current_root()?,
    };
    let layout = Layout::load_or_default(&root)?;
    let location = layout.locate(&root, &target);
    let outcome = install(&location)
        .with_context(|| format!("failed to install {}", layout.binary_name))?;
    Ok(outcome)
}

/// Launcher entry point: find the installed binary and relay to it.
///
/// Every failure is folded into the returned [`Termination`]; the caller exits with it.
pub fn execute_launch<I>(args: I) -> Termination
where
    I: IntoIterator<Item = OsString>,
{
    let run = || -> crate::Result<ChildOutcome> {
        let extension = extension_for_os(host_os())?;
        let root = current_root()?;
        let layout = Layout::load_or_default(&root)?;
        spawn(&layout.destination(&root, extension), args)
    };
    Termination::from(run())
}
