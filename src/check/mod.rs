//! Flash size reduction check: plan, per-file results, and the orchestrator.
use std::path::PathBuf;

use regex::Regex;

pub mod orchestrator;
pub mod verify;

pub use orchestrator::FlashSizeCheck;
pub use verify::pattern_present;

/// Companion tool that applies the flash size reduction.
pub const DEFAULT_REMEDIATION_TOOL: &str =
    "hw/top_earlgrey/util/opentitan_earlgrey_flash_size_reduce.py";
/// Search root used when nothing else is configured, relative to the working directory.
pub const DEFAULT_SEARCH_ROOT: &str = "../";

/// Generated flash controller register package.
pub const FLASH_CTRL_REG_PKG: &str = "flash_ctrl_reg_pkg.sv";
/// `RegPagesPerBank` reduced to 16 pages.
pub const FLASH_CTRL_REG_PKG_PATTERN: &str = r"parameter\s+int\s+RegPagesPerBank\s*=\s*16;";
/// Generated TL-UL crossbar package.
pub const TL_MAIN_PKG: &str = "tl_main_pkg.sv";
/// Embedded flash address mask narrowed to 64 KiB.
pub const TL_MAIN_PKG_PATTERN: &str =
    r"localparam\s+logic\s*\[\s*31\s*:\s*0\s*\]\s+ADDR_MASK_EFLASH\s*=\s*32'h\s*0000ffff;";

/// One file to locate and the marker expected inside it.
#[derive(Debug, Clone)]
pub struct CheckSpec {
    pub file_name: String,
    pub pattern: Regex,
}

impl CheckSpec {
    pub fn new(file_name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            file_name: file_name.into(),
            pattern: Regex::new(pattern)?,
        })
    }
}

/// Ordered list of checks. Order decides which missing file is reported.
#[derive(Debug, Clone)]
pub struct CheckPlan {
    checks: Vec<CheckSpec>,
}

impl CheckPlan {
    pub fn new(checks: Vec<CheckSpec>) -> Self {
        Self { checks }
    }

    /// The two Earl Grey markers written by the flash size reduction tool.
    pub fn earlgrey() -> Result<Self, regex::Error> {
        Ok(Self::new(vec![
            CheckSpec::new(FLASH_CTRL_REG_PKG, FLASH_CTRL_REG_PKG_PATTERN)?,
            CheckSpec::new(TL_MAIN_PKG, TL_MAIN_PKG_PATTERN)?,
        ]))
    }

    pub fn checks(&self) -> &[CheckSpec] {
        &self.checks
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

/// Outcome for a single located and read file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCheck {
    pub file_name: String,
    pub path: PathBuf,
    pub pattern_found: bool,
}

/// Results of every file that was located and read, in plan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub files: Vec<FileCheck>,
}

impl CheckReport {
    /// `true` unless some file lacked its marker.
    pub fn all_found(&self) -> bool {
        self.files.iter().all(|file| file.pattern_found)
    }

    /// Names of files whose marker was absent.
    pub fn mismatched(&self) -> Vec<&str> {
        self.files
            .iter()
            .filter(|file| !file.pattern_found)
            .map(|file| file.file_name.as_str())
            .collect()
    }
}
