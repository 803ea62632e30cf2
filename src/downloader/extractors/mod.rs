// Extraction engines
//
// Both engines drive yt-dlp as a child process with identical arguments:
// - Python mode: `python3 -m yt_dlp`
// - CLI mode: native `yt-dlp` binary
//
// The adapter only talks to the `ExtractionEngine` trait, which is also the
// seam tests use to substitute a fake engine.

mod cli;
mod command;
mod diagnostics;
mod orchestrator;
mod python;
mod traits;

pub use cli::CliEngine;
pub use diagnostics::{diagnose_error, BlockingReason};
pub use orchestrator::{resolve_mode, select_engine};
pub use python::PythonEngine;
pub use traits::{EngineMode, EngineRequest, ExtractionEngine};
