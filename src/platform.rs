use crate::error::{Error, Result};

/// A supported (operating system, CPU architecture) pair.
///
/// Names follow the npm convention (`linux`, `darwin`, `win32` / `x64`, `arm64`)
/// because the platform packages are published under those names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKey {
    LinuxX64,
    DarwinArm64,
    Win32X64,
}

/// What a platform key resolves to: the package carrying the binary and the
/// binary's file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub key: PlatformKey,
    pub package_id: &'static str,
    pub extension: &'static str,
}

impl PlatformKey {
    pub const ALL: [PlatformKey; 3] = [
        PlatformKey::LinuxX64,
        PlatformKey::DarwinArm64,
        PlatformKey::Win32X64,
    ];

    pub fn os(self) -> &'static str {
        match self {
            PlatformKey::LinuxX64 => "linux",
            PlatformKey::DarwinArm64 => "darwin",
            PlatformKey::Win32X64 => "win32",
        }
    }

    pub fn arch(self) -> &'static str {
        match self {
            PlatformKey::LinuxX64 | PlatformKey::Win32X64 => "x64",
            PlatformKey::DarwinArm64 => "arm64",
        }
    }

    pub fn package_id(self) -> &'static str {
        match self {
            PlatformKey::LinuxX64 => "bin-linux-x64-gnu",
            PlatformKey::DarwinArm64 => "bin-darwin-arm64",
            PlatformKey::Win32X64 => "bin-win32-x64-msvc",
        }
    }

    /// `.exe` on Windows, empty everywhere else.
    pub fn extension(self) -> &'static str {
        match self {
            PlatformKey::Win32X64 => ".exe",
            PlatformKey::LinuxX64 | PlatformKey::DarwinArm64 => "",
        }
    }
}

impl From<PlatformKey> for Target {
    fn from(key: PlatformKey) -> Self {
        Target {
            key,
            package_id: key.package_id(),
            extension: key.extension(),
        }
    }
}

/// Maps an `(os, arch)` pair to the platform package holding the binary.
///
/// Only the pairs in [`PlatformKey::ALL`] are recognized; anything else is
/// [`Error::UnsupportedPlatform`], never a guessed default.
///
/// # Examples
///
/// ```
/// use apimock_dist::resolve;
///
/// let target = resolve("win32", "x64").unwrap();
/// assert_eq!(target.package_id, "bin-win32-x64-msvc");
/// assert_eq!(target.extension, ".exe");
/// assert!(resolve("linux", "riscv64").is_err());
/// ```
pub fn resolve(os: &str, arch: &str) -> Result<Target> {
    PlatformKey::ALL
        .into_iter()
        .find(|key| key.os() == os && key.arch() == arch)
        .map(Target::from)
        .ok_or_else(|| Error::UnsupportedPlatform {
            os: os.to_string(),
            arch: arch.to_string(),
        })
}

/// Returns the executable extension used on `os`.
///
/// The launcher only knows the operating system it runs on, so this looks at
/// the OS column alone. An OS missing from every supported key is rejected.
pub fn extension_for_os(os: &str) -> Result<&'static str> {
    PlatformKey::ALL
        .into_iter()
        .find(|key| key.os() == os)
        .map(PlatformKey::extension)
        .ok_or_else(|| Error::UnsupportedPlatform {
            os: os.to_string(),
            arch: host_arch().to_string(),
        })
}

/// The running operating system, in npm naming.
pub fn host_os() -> &'static str {
    match std::env::consts::OS {
        "linux" => "linux",
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}

/// The running CPU architecture, in npm naming.
pub fn host_arch() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "x64",
        "aarch64" => "arm64",
        "x86" => "ia32",
        "arm" => "arm",
        other => other,
    }
}
