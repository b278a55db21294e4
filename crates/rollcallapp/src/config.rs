//! # Configuration
//!
//! Rollcall configuration is loaded with [`confique`], layering a TOML file and
//! environment variables over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `ROLLCALL_DEFAULT_DEPARTMENT`, `ROLLCALL_SEED_SAMPLE_RECORDS`,
//!    `ROLLCALL_EXPORT_DIR`.
//! 2. **Config file**: the path given with `--config`, otherwise `rollcall.toml` in the
//!    OS-appropriate config directory (via the `directories` crate). A missing file is fine.
//! 3. **Compiled defaults**: `#[config(default = ...)]` below.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `departments` | the four built-in departments | Reference list of `{ code, name }` tables |
//! | `default_department` | `JLKTD` | Department preselected for new records |
//! | `seed_sample_records` | `true` | Start sessions with the sample records |
//! | `export_dir` | current directory | Where CSV reports are written |
//!
//! ```toml
//! default_department = "JMIP"
//! export_dir = "/srv/reports"
//!
//! [[departments]]
//! code = "JMIP"
//! name = "Jabatan Memperkasa Institusi Pendidikan"
//! ```

use crate::error::{Result, RollcallError};
use crate::model::Department;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "rollcall.toml";

pub fn default_departments() -> Vec<Department> {
    vec![
        Department::new("JMIP", "Jabatan Memperkasa Institusi Pendidikan"),
        Department::new("JKRC", "Jabatan Konsultasi dan Runding Cara"),
        Department::new(
            "JPKIC",
            "Jabatan Pembangunan dan Kelestarian Institusi Cemerlang",
        ),
        Department::new("JLKTD", "Jabatan Latihan Kepimpinan Teknologi dan Digital"),
    ]
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RollcallConfig {
    /// Reference department list. When absent, the four built-in departments are used.
    pub departments: Option<Vec<Department>>,

    /// Department code preselected for new records.
    #[config(default = "JLKTD", env = "ROLLCALL_DEFAULT_DEPARTMENT")]
    pub default_department: String,

    /// Whether a fresh session starts with the sample records.
    #[config(default = true, env = "ROLLCALL_SEED_SAMPLE_RECORDS")]
    pub seed_sample_records: bool,

    /// Directory CSV reports are written to.
    #[config(env = "ROLLCALL_EXPORT_DIR")]
    pub export_dir: Option<String>,
}

impl Default for RollcallConfig {
    fn default() -> Self {
        Self {
            departments: None,
            default_department: "JLKTD".to_string(),
            seed_sample_records: true,
            export_dir: None,
        }
    }
}

impl RollcallConfig {
    /// Loads from `path`, or from the default config location when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };

        let mut builder = Self::builder().env();
        if let Some(file) = &file {
            tracing::debug!(path = %file.display(), "Loading config file");
            builder = builder.file(file);
        }
        builder
            .load()
            .map_err(|e| RollcallError::Config(e.to_string()))
    }

    pub fn departments(&self) -> Vec<Department> {
        self.departments
            .clone()
            .unwrap_or_else(default_departments)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rollcall").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
