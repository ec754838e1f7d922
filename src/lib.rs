//! # project-finder
//!
//! Finds project directories under a set of configured roots and tells you
//! what each one is built with.
//!
//! A root is either a directory that is itself a project (`~/notes`) or a
//! wildcard root whose immediate subdirectories are candidates
//! (`~/code/*`). Candidates pass through a name-based ignore list and an
//! optional project-indicator check, then come back ordered favorites first
//! and alphabetically after that. Each project can be classified into a
//! single [`technology::Technology`] from its top-level contents.
//!
//! ## Modules
//!
//! - [`paths`] - Root normalization: `~` expansion, drive letters, wildcard markers
//! - [`ignore`] - Directory names that never count as projects
//! - [`technology`] - Technology tags, the rule table and the classifier
//! - [`discover`] - The discovery pass over all roots
//! - [`sorting`] - Label collation and favorites-first ordering
//! - [`favorites`] - The persisted favorites map
//! - [`config`] - Platform capabilities, discovery options and the settings file
//! - [`output`] - Serializable report for `--json`

pub mod config;
pub mod discover;
pub mod favorites;
pub mod ignore;
pub mod output;
pub mod paths;
pub mod sorting;
pub mod technology;

pub use config::{DiscoverOptions, FileConfig, Platform};
pub use discover::{DiscoveredProject, Discoverer, discover};
pub use technology::{Technology, classify};
