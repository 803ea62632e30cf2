// Engine selection
//
// Auto prefers the Python module when it imports, and otherwise the native
// binary. The choice is made once at startup; a failing call is never
// retried on the other engine.

use std::sync::Arc;
use tracing::{info, warn};

use super::cli::CliEngine;
use super::python::PythonEngine;
use super::traits::{EngineMode, ExtractionEngine};
use crate::config::EngineConfig;
use crate::downloader::tools::{ToolManager, ToolType};

/// Resolve `Auto` against what is installed
pub fn resolve_mode(mode: EngineMode, tools: &ToolManager) -> EngineMode {
    if mode != EngineMode::Auto {
        return mode;
    }

    let python = tools.get_tool_info(ToolType::PythonModule);
    if python.is_available {
        info!(
            version = python.version.as_deref().unwrap_or("?"),
            "yt_dlp Python module found"
        );
        return EngineMode::Python;
    }

    let cli = tools.get_tool_info(ToolType::YtDlp);
    if cli.is_available {
        info!(
            path = cli.path.as_deref().unwrap_or("?"),
            version = cli.version.as_deref().unwrap_or("?"),
            "yt-dlp binary found"
        );
    } else {
        warn!("Neither the yt_dlp module nor the yt-dlp binary responded; requests will fail until one is installed");
    }
    EngineMode::Cli
}

/// Build the engine described by `config`
pub fn select_engine(config: &EngineConfig) -> Arc<dyn ExtractionEngine> {
    let tools = ToolManager::new(config.python_cmd.clone());
    let mode = resolve_mode(config.mode, &tools);

    let engine: Arc<dyn ExtractionEngine> = match mode {
        EngineMode::Python => Arc::new(PythonEngine::new(tools.python_cmd(), config.timeout)),
        _ => match &config.ytdlp_path {
            Some(path) => Arc::new(CliEngine::with_path(path.clone(), config.timeout)),
            None => Arc::new(CliEngine::new(config.timeout)),
        },
    };

    info!(engine = engine.name(), mode = %mode, "Extraction engine ready");
    engine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_are_kept() {
        let tools = ToolManager::new("definitely-not-a-python-xyz");
        assert_eq!(resolve_mode(EngineMode::Python, &tools), EngineMode::Python);
        assert_eq!(resolve_mode(EngineMode::Cli, &tools), EngineMode::Cli);
    }

    #[test]
    fn auto_without_python_falls_to_cli() {
        let tools = ToolManager::new("definitely-not-a-python-xyz");
        assert_eq!(resolve_mode(EngineMode::Auto, &tools), EngineMode::Cli);
    }

    #[test]
    fn explicit_binary_path_is_used() {
        let config = EngineConfig::default()
            .with_mode(EngineMode::Cli)
            .with_ytdlp_path(Some("/opt/yt-dlp".to_string()));
        assert_eq!(select_engine(&config).name(), "cli-yt-dlp");
    }
}
