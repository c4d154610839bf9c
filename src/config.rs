use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Naiad configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NaiadConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Event detection settings.
    #[serde(default)]
    pub events: EventsToml,

    /// Index weighting settings.
    #[serde(default)]
    pub weights: WeightsToml,

    /// Response curve file settings.
    #[serde(default)]
    pub curves: CurvesToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_curves_dir")]
    pub curves_dir: PathBuf,
    #[serde(default = "default_date_col")]
    pub date_col: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_flow_col")]
    pub flow_col: String,
    #[serde(default = "default_gwlevel_col")]
    pub gwlevel_col: String,
    #[serde(default)]
    pub gwstorage_col: Option<String>,
    #[serde(default)]
    pub storage_fit: Option<StorageFitToml>,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            curves_dir: default_curves_dir(),
            date_col: default_date_col(),
            date_format: default_date_format(),
            flow_col: default_flow_col(),
            gwlevel_col: default_gwlevel_col(),
            gwstorage_col: None,
            storage_fit: None,
        }
    }
}

fn default_curves_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_date_col() -> String {
    "Date".to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_flow_col() -> String {
    "Flow".to_string()
}
fn default_gwlevel_col() -> String {
    "Gwlevel".to_string()
}

/// Linear storage-to-level fit. Both coefficients are required.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageFitToml {
    pub slope: f64,
    pub intercept: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventsToml {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_min_separation")]
    pub min_separation: usize,
    #[serde(default = "default_min_duration")]
    pub min_duration: usize,
}

impl Default for EventsToml {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            min_separation: default_min_separation(),
            min_duration: default_min_duration(),
        }
    }
}

fn default_threshold() -> f64 {
    300.0
}
fn default_min_separation() -> usize {
    2
}
fn default_min_duration() -> usize {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightsToml {
    /// Named preset; when set, the explicit surface weights are ignored.
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default = "default_duration_weight")]
    pub duration: f64,
    #[serde(default = "default_timing_weight")]
    pub timing: f64,
    #[serde(default = "default_dry_weight")]
    pub dry: f64,
    #[serde(default = "default_blend_weight")]
    pub surface: f64,
    #[serde(default = "default_blend_weight")]
    pub gwlevel: f64,
}

impl Default for WeightsToml {
    fn default() -> Self {
        Self {
            profile: None,
            duration: default_duration_weight(),
            timing: default_timing_weight(),
            dry: default_dry_weight(),
            surface: default_blend_weight(),
            gwlevel: default_blend_weight(),
        }
    }
}

fn default_duration_weight() -> f64 {
    0.5
}
fn default_timing_weight() -> f64 {
    0.2
}
fn default_dry_weight() -> f64 {
    0.3
}
fn default_blend_weight() -> f64 {
    0.5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurvesToml {
    #[serde(default = "default_timing_file")]
    pub timing_file: PathBuf,
    #[serde(default = "default_month_col")]
    pub timing_x_col: String,
    #[serde(default = "default_timing_col")]
    pub timing_col: String,
    #[serde(default = "default_duration_file")]
    pub duration_file: PathBuf,
    #[serde(default = "default_days_col")]
    pub duration_x_col: String,
    #[serde(default = "default_site_col")]
    pub duration_col: String,
    #[serde(default = "default_dry_file")]
    pub dry_file: PathBuf,
    #[serde(default = "default_days_col")]
    pub dry_x_col: String,
    #[serde(default = "default_site_col")]
    pub dry_col: String,
    #[serde(default = "default_gwlevel_file")]
    pub gwlevel_file: PathBuf,
    #[serde(default = "default_level_col")]
    pub gwlevel_x_col: String,
    #[serde(default = "default_index_col")]
    pub gwlevel_col: String,
}

impl Default for CurvesToml {
    fn default() -> Self {
        Self {
            timing_file: default_timing_file(),
            timing_x_col: default_month_col(),
            timing_col: default_timing_col(),
            duration_file: default_duration_file(),
            duration_x_col: default_days_col(),
            duration_col: default_site_col(),
            dry_file: default_dry_file(),
            dry_x_col: default_days_col(),
            dry_col: default_site_col(),
            gwlevel_file: default_gwlevel_file(),
            gwlevel_x_col: default_level_col(),
            gwlevel_col: default_index_col(),
        }
    }
}

fn default_timing_file() -> PathBuf {
    PathBuf::from("timing_curves.csv")
}
fn default_duration_file() -> PathBuf {
    PathBuf::from("duration_curves.csv")
}
fn default_dry_file() -> PathBuf {
    PathBuf::from("dry_curves.csv")
}
fn default_gwlevel_file() -> PathBuf {
    PathBuf::from("gwlevel_curves.csv")
}
fn default_month_col() -> String {
    "Month".to_string()
}
fn default_days_col() -> String {
    "Days".to_string()
}
fn default_timing_col() -> String {
    "Roberts".to_string()
}
fn default_site_col() -> String {
    "Namoi".to_string()
}
fn default_level_col() -> String {
    "Level_m".to_string()
}
fn default_index_col() -> String {
    "Index".to_string()
}
