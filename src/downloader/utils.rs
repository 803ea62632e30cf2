// Helper functions for engine implementations

use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Run a command to completion, capturing stdout and stderr.
///
/// With `limit` set the child is killed once it runs longer; without it the
/// call waits as long as the process does.
pub async fn run_output(
    program: &str,
    args: &[String],
    limit: Option<Duration>,
) -> Result<std::process::Output, String> {
    let mut child = TokioCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| format!("Failed to start {}: {}", program, e))?;

    let mut stdout_pipe = child
        .stdout
        .take()
        .ok_or_else(|| format!("Failed to capture stdout from {}", program))?;
    let mut stderr_pipe = child
        .stderr
        .take()
        .ok_or_else(|| format!("Failed to capture stderr from {}", program))?;

    // Both pipes drain concurrently so a chatty child never blocks on a full buffer.
    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stdout_pipe
            .read_to_end(&mut buf)
            .await
            .map_err(|e| format!("Failed to read stdout: {}", e))?;
        Ok::<Vec<u8>, String>(buf)
    });
    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stderr_pipe
            .read_to_end(&mut buf)
            .await
            .map_err(|e| format!("Failed to read stderr: {}", e))?;
        Ok::<Vec<u8>, String>(buf)
    });

    let status = match limit {
        Some(limit) => match timeout(limit, child.wait()).await {
            Ok(status) => status,
            Err(_) => {
                let _ = child.kill().await;
                stdout_task.abort();
                stderr_task.abort();
                return Err(format!("Timed out after {}s", limit.as_secs()));
            }
        },
        None => child.wait().await,
    }
    .map_err(|e| format!("Failed to wait for {}: {}", program, e))?;

    let stdout = stdout_task
        .await
        .map_err(|e| format!("stdout task failed: {}", e))??;
    let stderr = stderr_task
        .await
        .map_err(|e| format!("stderr task failed: {}", e))??;

    Ok(std::process::Output {
        status,
        stdout,
        stderr,
    })
}

/// Error text of a failed engine run.
///
/// yt-dlp prints warnings before the fatal `ERROR:` line; that line is the
/// message its library API would raise, so it wins when present.
pub fn engine_error_text(stderr: &[u8], status: std::process::ExitStatus) -> String {
    let text = String::from_utf8_lossy(stderr);

    if let Some(line) = text.lines().rev().find(|l| l.trim_start().starts_with("ERROR:")) {
        return line.trim().to_string();
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        format!("yt-dlp exited with {}", status)
    } else {
        trimmed.to_string()
    }
}
