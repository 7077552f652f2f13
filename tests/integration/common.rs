use std::{
    fs,
    path::{Path, PathBuf},
};

use flash_size_check::lib::telemetry::{build_dispatch_with_writer, LogSettings, SharedBuffer};
use tempfile::TempDir;
use tracing::Dispatch;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_flash-size-check");

pub const FLASH_CTRL_REG_PKG: &str = "flash_ctrl_reg_pkg.sv";
pub const TL_MAIN_PKG: &str = "tl_main_pkg.sv";

pub const REDUCED_REG_PKG: &str = "package flash_ctrl_reg_pkg;\n\
  parameter int RegNumBanks = 2;\n\
  parameter int RegPagesPerBank = 16;\n\
endpackage\n";
pub const FULL_REG_PKG: &str = "package flash_ctrl_reg_pkg;\n\
  parameter int RegNumBanks = 2;\n\
  parameter int RegPagesPerBank = 32;\n\
endpackage\n";
pub const REDUCED_TL_MAIN: &str = "package tl_main_pkg;\n\
  localparam logic [31:0] ADDR_SPACE_EFLASH = 32'h20000000;\n\
  localparam logic [31:0] ADDR_MASK_EFLASH = 32'h0000ffff;\n\
endpackage\n";
pub const FULL_TL_MAIN: &str = "package tl_main_pkg;\n\
  localparam logic [31:0] ADDR_SPACE_EFLASH = 32'h20000000;\n\
  localparam logic [31:0] ADDR_MASK_EFLASH = 32'h000fffff;\n\
endpackage\n";

pub const REG_PKG_DIR: &str = "hw/top_earlgrey/ip/flash_ctrl/rtl/autogen";
pub const TL_MAIN_DIR: &str = "hw/top_earlgrey/ip/xbar_main/rtl/autogen";

/// Temporary source tree laid out like a generated Earl Grey design.
pub struct DesignTree {
    temp: TempDir,
}

impl DesignTree {
    pub fn new() -> Self {
        Self {
            temp: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Tree with both generated packages, using the given contents.
    pub fn with_packages(reg_pkg: Option<&str>, tl_main: Option<&str>) -> Self {
        let tree = Self::new();
        if let Some(content) = reg_pkg {
            tree.write(&format!("{REG_PKG_DIR}/{FLASH_CTRL_REG_PKG}"), content);
        }
        if let Some(content) = tl_main {
            tree.write(&format!("{TL_MAIN_DIR}/{TL_MAIN_PKG}"), content);
        }
        tree
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write file");
        path
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.temp.path().join(relative);
        fs::create_dir_all(&path).expect("create dir");
        path
    }
}

/// Logger writing into memory so tests can inspect log lines.
#[derive(Clone)]
pub struct LogCapture {
    buffer: SharedBuffer,
}

impl LogCapture {
    pub fn new() -> Self {
        Self {
            buffer: SharedBuffer::new(),
        }
    }

    pub fn dispatch(&self) -> Dispatch {
        build_dispatch_with_writer(LogSettings::default(), self.buffer.clone())
    }

    pub fn text(&self) -> String {
        self.buffer.contents()
    }

    pub fn error_lines(&self) -> Vec<String> {
        error_lines(&self.text())
    }
}

pub fn error_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.starts_with("ERROR: "))
        .map(str::to_string)
        .collect()
}
