use tracing::{debug, info};

use super::CheckConfig;

pub fn log_loaded(config: &CheckConfig) {
    match &config.source_path {
        Some(path) => info!(
            target: "flash_size_check::config",
            path = %path.display(),
            checks = config.plan.len(),
            "Configuration file loaded successfully"
        ),
        None => debug!(
            target: "flash_size_check::config",
            checks = config.plan.len(),
            "No configuration file given; using built-in Earl Grey checks"
        ),
    }
}
