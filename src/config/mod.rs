//! Configuration for discovery and the persistent settings file.
//!
//! ## Main Parts
//!
//! - [`Platform`] - Path conventions of the host (drive letters, case folding)
//! - [`DiscoverOptions`] - The snapshot of settings one discovery pass reads
//! - [`FileConfig`] - The optional TOML settings file layered under CLI flags

pub mod discover;
pub mod file;
pub mod platform;

pub use discover::{DEFAULT_INDICATORS, DiscoverOptions};
pub use file::FileConfig;
pub use platform::Platform;
