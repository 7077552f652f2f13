//! Runs a check plan against a search root and reports the verdict.
use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::{pattern_present, CheckPlan, CheckReport, FileCheck};
use crate::lib::{
    errors::CheckError,
    fs::{locate_file, Located},
};

/// A configured flash size check.
///
/// A missing file aborts the run at once. An absent marker is recorded and the
/// remaining files are still checked before the run fails.
#[derive(Debug, Clone)]
pub struct FlashSizeCheck {
    root: PathBuf,
    plan: CheckPlan,
    remediation_tool: String,
}

impl FlashSizeCheck {
    pub fn new(
        root: impl Into<PathBuf>,
        plan: CheckPlan,
        remediation_tool: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            plan,
            remediation_tool: remediation_tool.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn plan(&self) -> &CheckPlan {
        &self.plan
    }

    pub fn remediation_tool(&self) -> &str {
        &self.remediation_tool
    }

    /// Check every file in plan order. Each failure is logged once at ERROR
    /// before it is returned.
    pub fn run(&self) -> Result<CheckReport, CheckError> {
        let mut report = CheckReport::default();
        let mut all_good = true;

        for check in self.plan.checks() {
            let path = match locate_file(&self.root, &check.file_name) {
                Located::Found(path) => path,
                Located::NotFound => {
                    let err = CheckError::MissingFile {
                        file_name: check.file_name.clone(),
                        root: self.root.clone(),
                    };
                    error!(target: "flash_size_check::check", code = err.code(), "{err}");
                    return Err(err);
                }
            };
            info!(
                target: "flash_size_check::check",
                file = %check.file_name,
                path = %path.display(),
                "Located file"
            );

            let pattern_found = pattern_present(&path, &check.pattern).map_err(|err| {
                error!(target: "flash_size_check::check", code = err.code(), "{err}");
                err
            })?;
            if !pattern_found {
                info!(
                    target: "flash_size_check::check",
                    file = %check.file_name,
                    pattern = %check.pattern,
                    "Expected pattern not found"
                );
                all_good = false;
            }

            report.files.push(FileCheck {
                file_name: check.file_name.clone(),
                path,
                pattern_found,
            });
        }

        if !all_good {
            let err = CheckError::FlashNotReduced {
                report,
                remediation_tool: self.remediation_tool.clone(),
            };
            error!(target: "flash_size_check::check", code = err.code(), "{err}");
            return Err(err);
        }

        info!(
            target: "flash_size_check::check",
            files = report.files.len(),
            "Embedded flash size has been reduced"
        );
        Ok(report)
    }
}
