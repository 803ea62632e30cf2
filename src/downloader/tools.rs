// Engine tool discovery: where yt-dlp lives and which version it is

use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolType {
    /// Native yt-dlp binary
    YtDlp,
    /// yt_dlp module importable by the Python interpreter
    PythonModule,
}

#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub tool_type: ToolType,
    pub path: Option<String>,
    pub version: Option<String>,
    pub is_available: bool,
}

pub struct ToolManager {
    python_cmd: String,
}

impl ToolManager {
    pub fn new(python_cmd: impl Into<String>) -> Self {
        Self {
            python_cmd: python_cmd.into(),
        }
    }

    pub fn python_cmd(&self) -> &str {
        &self.python_cmd
    }

    pub fn get_tool_info(&self, tool_type: ToolType) -> ToolInfo {
        let (path, version) = match tool_type {
            ToolType::YtDlp => {
                let path = find_ytdlp();
                let version = get_version(&path, &["--version"]);
                (Some(path), version)
            }
            ToolType::PythonModule => {
                let version = get_version(&self.python_cmd, &["-m", "yt_dlp", "--version"]);
                (Some(self.python_cmd.clone()), version)
            }
        };

        ToolInfo {
            tool_type,
            is_available: version.is_some(),
            path,
            version,
        }
    }
}

/// Find yt-dlp executable in common paths, then in PATH
pub fn find_ytdlp() -> String {
    let common_paths = [
        "/opt/homebrew/bin/yt-dlp", // Homebrew on Apple Silicon
        "/usr/local/bin/yt-dlp",    // Homebrew on Intel Mac, pip --user on Linux
        "/usr/bin/yt-dlp",          // System installation
    ];

    for path in common_paths {
        if std::path::Path::new(path).exists() {
            return path.to_string();
        }
    }

    if let Ok(output) = Command::new("which").arg("yt-dlp").output() {
        if output.status.success() {
            let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if !path.is_empty() {
                return path;
            }
        }
    }

    // Last resort: hope it's in PATH
    "yt-dlp".to_string()
}

/// Version string printed by `program args`, or `None` if it fails to run
fn get_version(program: &str, args: &[&str]) -> Option<String> {
    match Command::new(program).args(args).output() {
        Ok(output) if output.status.success() => {
            let out = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if out.is_empty() {
                None
            } else {
                Some(out)
            }
        }
        _ => None,
    }
}
