use std::io;
use std::path::Path;
use tempfile::NamedTempFile;
use crate::error::{Error, Result};
use crate::layout::BinaryLocation;
use crate::output;

/// Mode applied to the installed binary: rwx for the owner, rx for everyone else.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// How the destination was produced. Exactly one of the two per successful run.
#[derive(Debug)]
pub enum InstallOutcome {
    /// The destination is a symbolic link to the source.
    Linked,
    /// Linking failed and the destination is a standalone copy of the source.
    Copied {
        /// Why the symbolic link could not be used.
        link_error: io::Error,
    },
}

impl InstallOutcome {
    pub fn is_linked(&self) -> bool {
        matches!(self, InstallOutcome::Linked)
    }
}

/// Installs `location.source` at `location.destination`, preferring a symlink.
///
/// See [`install_with`] for the exact sequence.
///
/// # Errors
///
/// Returns [`Error::SourceMissing`] if the platform package doesn't contain the
/// binary, or an I/O error if the copy fallback fails too.
///
/// # Examples
///
/// ```no_run
/// use apimock_dist::{install, resolve, Layout};
/// use std::path::Path;
///
/// let target = resolve("linux", "x64").unwrap();
/// let location = Layout::default().locate(Path::new("node_modules/apimock-rs"), &target);
/// install(&location).unwrap();
/// ```
pub fn install(location: &BinaryLocation) -> Result<InstallOutcome> {
    install_with(location, symlink_file)
}

/// Same as [`install`], with the link primitive supplied by the caller.
///
/// 1. Fails with [`Error::SourceMissing`] before touching anything if the source is absent.
/// 2. Removes whatever sits at the destination (file, dangling link, directory).
///    A failed removal is reported and the run goes on.
/// 3. Calls `link(source, destination)`. On success the source is made executable.
/// 4. If linking or the chmod fails, copies the source instead and makes the copy executable.
///
/// Errors from `link` never escape; they end up in [`InstallOutcome::Copied`].
pub fn install_with<F>(location: &BinaryLocation, link: F) -> Result<InstallOutcome>
where
    F: FnOnce(&Path, &Path) -> io::Result<()>,
{
    let BinaryLocation { source, destination } = location;
    if !source.is_file() {
        return Err(Error::SourceMissing(source.clone()));
    }

    if let Err(e) = remove_stale(destination) {
        output::warn(&format!(
            "could not remove existing {} ({e})",
            destination.display()
        ));
    }

    let link_error = match try_link(source, destination, link) {
        Ok(()) => {
            output::info(&format!(
                "linked {} --> {}",
                source.display(),
                destination.display()
            ));
            return Ok(InstallOutcome::Linked);
        }
        Err(e) => e,
    };

    output::info(&fallback_notice(&link_error));
    copy_executable(source, destination)?;
    output::info(&format!(
        "copied {} --> {}",
        source.display(),
        destination.display()
    ));
    Ok(InstallOutcome::Copied { link_error })
}

/// The line logged when linking failed and the copy fallback takes over.
pub fn fallback_notice(link_error: &io::Error) -> String {
    format!("symlink failed ({link_error}), falling back to copy.")
}

/// Links `destination` to the absolute form of `source`.
///
/// Link targets resolve against the link's own directory, not the working
/// directory, so a relative source would leave a dangling link.
fn try_link<F>(source: &Path, destination: &Path, link: F) -> io::Result<()>
where
    F: FnOnce(&Path, &Path) -> io::Result<()>,
{
    let target = std::path::absolute(source)?;
    link(&target, destination)?;
    if let Err(e) = make_executable(&target) {
        // A link to a target we can't execute is no install at all.
        if let Err(cleanup) = discard_link(destination) {
            output::warn(&format!(
                "could not remove link {} ({cleanup})",
                destination.display()
            ));
        }
        return Err(e);
    }
    Ok(())
}

/// Removes a link created by this run. A link that is already gone is fine.
fn discard_link(destination: &Path) -> io::Result<()> {
    match std::fs::remove_file(destination) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Removes any entry at `path`, including dangling symlinks. A missing entry is not an error.
pub fn remove_stale(path: &Path) -> io::Result<()> {
    let meta = match std::fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    let removed = if meta.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };
    match removed {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Copies through a temp file in the destination directory and renames it into
/// place, so the destination is either absent or complete.
fn copy_executable(source: &Path, destination: &Path) -> Result<()> {
    let dir = match destination.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    let mut reader = std::fs::File::open(source).map_err(|e| Error::io(source, e))?;
    io::copy(&mut reader, &mut tmp).map_err(|e| Error::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| Error::io(tmp.path(), e))?;
    make_executable(tmp.path()).map_err(|e| Error::io(tmp.path(), e))?;
    tmp.persist(destination)
        .map_err(|e| Error::io(destination, e.error))?;
    Ok(())
}

/// Sets [`EXECUTABLE_MODE`] on `path`. Windows has no mode bits; there it's a no-op.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(EXECUTABLE_MODE))
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// Creates a file symlink at `link` pointing to `target`.
#[cfg(unix)]
pub fn symlink_file(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
pub fn symlink_file(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(not(any(unix, windows)))]
pub fn symlink_file(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}
