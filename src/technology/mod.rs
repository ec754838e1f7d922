//! Technology classification of project directories.
//!
//! A directory's top-level listing is checked against an ordered table of
//! [`TechnologyRule`]s and the single best [`Technology`] is reported.
//!
//! ## Main Parts
//!
//! - [`Technology`] - The closed set of tags, with display names and icons
//! - [`RULES`] - The built-in, priority-banded rule table
//! - [`Classifier`] - Evaluates a rule table against a directory
//! - [`classify`] / [`detect`] - Shorthands over the built-in table

pub mod classifier;
pub mod kind;
pub mod rules;

pub use classifier::{Classifier, Detection, Evidence, classify, detect};
pub use kind::Technology;
pub use rules::{ContentCheck, RULES, TechnologyRule, UNKNOWN_PRIORITY};
