//! Structured JSON output for scripting and piping.
//!
//! This module provides serializable data structures that represent the
//! complete output of a discovery pass. When the `--json` flag is passed,
//! these structures are serialized to stdout as a single JSON object,
//! replacing all human-readable output.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{discover::DiscoveredProject, technology::Technology};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// The roots that were searched, as configured.
    pub roots: Vec<String>,

    /// Discovered projects in display order (favorites first).
    pub projects: Vec<JsonProjectEntry>,

    /// Aggregated summary statistics.
    pub summary: JsonSummary,
}

/// A single project entry in the JSON output.
#[derive(Serialize, Debug)]
pub struct JsonProjectEntry {
    /// Directory base name.
    pub label: String,

    /// Absolute path to the project directory.
    pub path: String,

    /// Whether the project is a favorite.
    pub favorite: bool,

    /// Classification tag (`"rust"`, `"laravel"`, `"unknown"`, ...).
    pub technology: Technology,

    /// Human-readable technology name.
    pub technology_name: &'static str,

    /// Devicon CSS class for the technology.
    pub icon: &'static str,
}

/// Aggregated summary across all discovered projects.
#[derive(Serialize, Debug)]
pub struct JsonSummary {
    /// Total number of projects found.
    pub total_projects: usize,

    /// Number of those that are favorites.
    pub favorites: usize,

    /// Per-technology project count (key is the tag).
    pub by_technology: BTreeMap<Technology, usize>,
}

impl JsonOutput {
    /// Build a `JsonOutput` from classified projects, keeping their order.
    #[must_use]
    pub fn from_projects(roots: &[String], projects: &[(DiscoveredProject, Technology)]) -> Self {
        Self {
            roots: roots.to_vec(),
            projects: projects
                .iter()
                .map(|(project, technology)| JsonProjectEntry::new(project, *technology))
                .collect(),
            summary: JsonSummary::from_projects(projects),
        }
    }
}

impl JsonProjectEntry {
    /// Convert a classified project into a `JsonProjectEntry`.
    #[must_use]
    pub fn new(project: &DiscoveredProject, technology: Technology) -> Self {
        Self {
            label: project.label.clone(),
            path: project.path.display().to_string(),
            favorite: project.is_favorite,
            technology,
            technology_name: technology.display_name(),
            icon: technology.devicon_class(),
        }
    }
}

impl JsonSummary {
    /// Compute summary statistics from classified projects.
    #[must_use]
    pub fn from_projects(projects: &[(DiscoveredProject, Technology)]) -> Self {
        let mut by_technology = BTreeMap::new();
        for (_, technology) in projects {
            *by_technology.entry(*technology).or_insert(0) += 1;
        }

        Self {
            total_projects: projects.len(),
            favorites: projects.iter().filter(|(p, _)| p.is_favorite).count(),
            by_technology,
        }
    }
}
