use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::platform::Target;

/// File name of the optional layout override in the package root.
pub const CONFIG_FILE: &str = "dist.toml";

/// Naming of the distribution: which binary is wrapped and under which npm
/// scope the platform packages are installed.
///
/// Both keys are optional in `dist.toml`:
///
/// ```toml
/// binary-name = "apimock"
/// scope = "@apimock-rs"
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Layout {
    /// File name of the wrapped binary, without extension.
    pub binary_name: String,
    /// Directory (npm scope) holding the platform packages, a sibling of the package root.
    pub scope: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            binary_name: "apimock".to_string(),
            scope: "@apimock-rs".to_string(),
        }
    }
}

impl Layout {
    /// Loads `dist.toml` from `root`, falling back to the defaults when the file is absent.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file exists but can't be read, and
    /// [`Error::Config`] if it isn't valid TOML for this struct.
    pub fn load_or_default<P: AsRef<Path>>(root: P) -> Result<Layout> {
        let path = root.as_ref().join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Layout::default()),
            Err(e) => return Err(Error::io(path, e)),
        };
        toml::from_str(&content).map_err(|source| Error::Config { path, source })
    }

    /// The binary's file name with the platform extension appended.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{}", self.binary_name, extension)
    }

    /// Where the launcher expects the binary: directly inside the package root.
    pub fn destination(&self, root: &Path, extension: &str) -> PathBuf {
        root.join(self.file_name(extension))
    }

    /// Computes where the prebuilt binary for `target` comes from and where it goes.
    ///
    /// The source lives in `<scope>/<package>/`, next to the package root:
    ///
    /// ```text
    /// node_modules/
    ///   @apimock-rs/bin-linux-x64-gnu/apimock   <- source
    ///   apimock-rs/apimock                      <- destination (root = apimock-rs)
    /// ```
    pub fn locate(&self, root: &Path, target: &Target) -> BinaryLocation {
        let packages_dir = match root.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => root.join(".."),
        };
        let file_name = self.file_name(target.extension);
        BinaryLocation {
            source: packages_dir
                .join(&self.scope)
                .join(target.package_id)
                .join(&file_name),
            destination: root.join(file_name),
        }
    }
}

/// Source and destination of one install run. Computed fresh every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryLocation {
    /// The binary inside the platform package. Never modified apart from its mode bits.
    pub source: PathBuf,
    /// The single artifact the installer produces.
    pub destination: PathBuf,
}

/// The directory holding the running executable.
pub fn current_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(Error::CurrentExe)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        Error::CurrentExe(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}
