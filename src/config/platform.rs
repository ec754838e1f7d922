//! Platform capabilities that change how paths and names are interpreted.
//!
//! Drive-letter rewriting and case-insensitive name matching both depend on
//! the host platform. Rather than querying the platform at every call site,
//! the engine receives a [`Platform`] value, which keeps both branches
//! testable on any host.

/// Capability flags describing the path conventions of a platform.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Platform {
    /// Native paths use drive letters (`C:/...`), so POSIX-style `/c/...`
    /// roots are rewritten to the native form.
    pub drive_letters: bool,

    /// The file system compares names case-insensitively.
    pub case_insensitive: bool,
}

impl Platform {
    /// Capabilities of the platform this binary was compiled for.
    ///
    /// This is the only place the engine inspects the target platform.
    #[must_use]
    pub const fn native() -> Self {
        Self {
            drive_letters: cfg!(windows),
            case_insensitive: cfg!(any(windows, target_os = "macos")),
        }
    }

    /// A POSIX platform with a case-sensitive file system (Linux).
    #[must_use]
    pub const fn posix() -> Self {
        Self {
            drive_letters: false,
            case_insensitive: false,
        }
    }

    /// A drive-letter platform with a case-insensitive file system (Windows).
    #[must_use]
    pub const fn windows() -> Self {
        Self {
            drive_letters: true,
            case_insensitive: true,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::native()
    }
}
