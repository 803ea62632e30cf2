// Service configuration
//
// Defaults are the service's fixed interface: bind 0.0.0.0:5000, write to
// ./downloads, read ./cookies.txt when present. There are no flags or
// environment overrides; tests and embedders use the `with_*` builders.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::downloader::extractors::EngineMode;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DOWNLOADS_ROOT: &str = "./downloads";
pub const DEFAULT_COOKIES_PATH: &str = "./cookies.txt";

/// How to launch the extraction engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Python, CLI, or Auto
    pub mode: EngineMode,
    /// Interpreter used in Python mode
    pub python_cmd: String,
    /// yt-dlp binary; discovered on PATH when `None`
    pub ytdlp_path: Option<String>,
    /// Per-call limit; `None` waits as long as the engine runs
    pub timeout: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: EngineMode::Auto,
            python_cmd: "python3".to_string(),
            ytdlp_path: None,
            timeout: None,
        }
    }
}

impl EngineConfig {
    pub fn with_mode(mut self, mode: EngineMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_python_cmd(mut self, cmd: impl Into<String>) -> Self {
        self.python_cmd = cmd.into();
        self
    }

    pub fn with_ytdlp_path(mut self, path: Option<String>) -> Self {
        self.ytdlp_path = path;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Paths the adapter reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Root under which each video gets its own directory
    pub downloads_root: PathBuf,
    /// Netscape cookie file, injected only if it exists at call time
    pub cookies_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            downloads_root: PathBuf::from(DEFAULT_DOWNLOADS_ROOT),
            cookies_path: PathBuf::from(DEFAULT_COOKIES_PATH),
        }
    }
}

impl StorageConfig {
    pub fn with_downloads_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.downloads_root = root.into();
        self
    }

    pub fn with_cookies_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cookies_path = path.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub storage: StorageConfig,
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            storage: StorageConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    pub fn with_storage(mut self, storage: StorageConfig) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}
