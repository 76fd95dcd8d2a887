//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! modeled pipeline. It provides:
//! 1. **Defaults:** The baseline machine (4-wide everything, 32-entry queues, four ALUs).
//! 2. **Structures:** General run settings and pipeline geometry.
//! 3. **Validation:** Rejection of geometries the pipeline cannot model.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or use `Config::default()`.
//! Every field is optional in JSON; missing fields take the defaults below.

use serde::Deserialize;

use crate::common::constants::{EXCEPTION_VECTOR, FIRST_RENAME_REG, NUM_PHYS_REGS};
use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Instructions fetched and decoded per cycle.
    pub const FETCH_WIDTH: usize = 4;

    /// Instructions renamed and dispatched per cycle.
    pub const DISPATCH_WIDTH: usize = 4;

    /// Instructions issued to functional units per cycle.
    pub const ISSUE_WIDTH: usize = 4;

    /// Instructions retired per cycle.
    pub const COMMIT_WIDTH: usize = 4;

    /// Active list entries unwound per cycle in exception mode.
    pub const ROLLBACK_WIDTH: usize = 4;

    /// Active list (reorder buffer) capacity.
    pub const ACTIVE_LIST_SIZE: usize = 32;

    /// Integer queue (issue queue) capacity.
    pub const INTEGER_QUEUE_SIZE: usize = 32;

    /// Number of ALU pipelines.
    pub const ALU_COUNT: usize = 4;

    /// Slots per ALU pipeline, including the initial latency placeholder.
    pub const ALU_DEPTH: usize = 3;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use oosim_core::config::Config;
///
/// let json = r#"{ "general": { "max_cycles": 1000 }, "pipeline": { "issue_width": 2 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_cycles, Some(1000));
/// assert_eq!(config.pipeline.issue_width, 2);
/// assert_eq!(config.pipeline.commit_width, 4);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline geometry.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configured machine can be modeled.
    pub fn validate(&self) -> Result<(), SimError> {
        self.pipeline.validate()
    }
}

/// General run settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Abort with `SimError::CycleLimit` after this many cycles. `None` runs until drained.
    #[serde(default)]
    pub max_cycles: Option<u64>,

    /// Program address fetch resumes from after an exception.
    #[serde(default = "GeneralConfig::default_exception_vector")]
    pub exception_vector: u64,
}

impl GeneralConfig {
    /// Returns the default exception vector.
    fn default_exception_vector() -> u64 {
        EXCEPTION_VECTOR
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            max_cycles: None,
            exception_vector: EXCEPTION_VECTOR,
        }
    }
}

/// Pipeline widths and structure sizes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Instructions fetched per cycle
    #[serde(default = "PipelineConfig::default_fetch_width")]
    pub fetch_width: usize,

    /// Instructions renamed and dispatched per cycle
    #[serde(default = "PipelineConfig::default_dispatch_width")]
    pub dispatch_width: usize,

    /// Instructions issued per cycle
    #[serde(default = "PipelineConfig::default_issue_width")]
    pub issue_width: usize,

    /// Instructions committed per cycle
    #[serde(default = "PipelineConfig::default_commit_width")]
    pub commit_width: usize,

    /// Active list entries unwound per cycle during exception recovery
    #[serde(default = "PipelineConfig::default_rollback_width")]
    pub rollback_width: usize,

    /// Active list capacity
    #[serde(default = "PipelineConfig::default_active_list_size")]
    pub active_list_size: usize,

    /// Integer queue capacity
    #[serde(default = "PipelineConfig::default_integer_queue_size")]
    pub integer_queue_size: usize,

    /// Number of ALU pipelines
    #[serde(default = "PipelineConfig::default_alu_count")]
    pub alu_count: usize,

    /// In-flight slots per ALU pipeline
    #[serde(default = "PipelineConfig::default_alu_depth")]
    pub alu_depth: usize,
}

impl PipelineConfig {
    fn default_fetch_width() -> usize {
        defaults::FETCH_WIDTH
    }

    fn default_dispatch_width() -> usize {
        defaults::DISPATCH_WIDTH
    }

    fn default_issue_width() -> usize {
        defaults::ISSUE_WIDTH
    }

    fn default_commit_width() -> usize {
        defaults::COMMIT_WIDTH
    }

    fn default_rollback_width() -> usize {
        defaults::ROLLBACK_WIDTH
    }

    fn default_active_list_size() -> usize {
        defaults::ACTIVE_LIST_SIZE
    }

    fn default_integer_queue_size() -> usize {
        defaults::INTEGER_QUEUE_SIZE
    }

    fn default_alu_count() -> usize {
        defaults::ALU_COUNT
    }

    fn default_alu_depth() -> usize {
        defaults::ALU_DEPTH
    }

    /// Checks the geometry for values the pipeline cannot model.
    ///
    /// An ALU that is idle takes a placeholder plus the issued operation, so depth
    /// must be at least two. Issuing more operations per cycle than there are ALUs
    /// could stack three operations onto one unit and overflow it.
    pub fn validate(&self) -> Result<(), SimError> {
        let widths = [
            ("fetch_width", self.fetch_width),
            ("dispatch_width", self.dispatch_width),
            ("issue_width", self.issue_width),
            ("commit_width", self.commit_width),
            ("rollback_width", self.rollback_width),
            ("alu_count", self.alu_count),
        ];
        for (name, value) in widths {
            if value == 0 {
                return Err(SimError::Config(format!("{name} must be non-zero")));
            }
        }

        let pool = NUM_PHYS_REGS - FIRST_RENAME_REG;
        for (name, value) in [
            ("active_list_size", self.active_list_size),
            ("integer_queue_size", self.integer_queue_size),
        ] {
            if value < self.dispatch_width {
                return Err(SimError::Config(format!(
                    "{name} ({value}) is smaller than dispatch_width ({})",
                    self.dispatch_width
                )));
            }
            if value > pool {
                return Err(SimError::Config(format!(
                    "{name} ({value}) exceeds the renaming pool of {pool} registers"
                )));
            }
        }

        if self.alu_depth < 2 {
            return Err(SimError::Config(format!(
                "alu_depth ({}) must be at least 2",
                self.alu_depth
            )));
        }
        if self.issue_width > self.alu_count {
            return Err(SimError::Config(format!(
                "issue_width ({}) exceeds alu_count ({})",
                self.issue_width, self.alu_count
            )));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    /// Creates the baseline 4-wide machine with 32-entry queues and four 3-deep ALUs.
    fn default() -> Self {
        Self {
            fetch_width: defaults::FETCH_WIDTH,
            dispatch_width: defaults::DISPATCH_WIDTH,
            issue_width: defaults::ISSUE_WIDTH,
            commit_width: defaults::COMMIT_WIDTH,
            rollback_width: defaults::ROLLBACK_WIDTH,
            active_list_size: defaults::ACTIVE_LIST_SIZE,
            integer_queue_size: defaults::INTEGER_QUEUE_SIZE,
            alu_count: defaults::ALU_COUNT,
            alu_depth: defaults::ALU_DEPTH,
        }
    }
}
