//! Pipeline settings, loadable from a JSON file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tablerank_table::{RenderOptions, SortOrder};

/// Output format for the result table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width text (default)
    #[default]
    Table,
    /// JSON records
    Json,
    /// CSV with a header line
    Csv,
}

/// Settings for the rank-sort-render pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Numeric column the rank is computed from
    pub rank_source: String,
    /// Name of the computed rank column
    pub rank_column: String,
    /// Column to sort by; the rank column when unset
    pub sort_by: Option<String>,
    pub ascending: bool,
    pub gap: usize,
    pub left_aligned: Vec<String>,
    pub header: bool,
    pub format: OutputFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            rank_source: "density".to_string(),
            rank_column: "rank".to_string(),
            sort_by: None,
            ascending: false,
            gap: 2,
            left_aligned: vec!["city".to_string()],
            header: false,
            format: OutputFormat::Table,
        }
    }
}

impl PipelineConfig {
    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid pipeline configuration")
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    #[must_use]
    pub fn sort_column(&self) -> &str {
        self.sort_by.as_deref().unwrap_or(&self.rank_column)
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        if self.ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_gap(self.gap)
            .with_left_aligned(self.left_aligned.iter().cloned())
            .with_header(self.header)
    }
}
