// Shared yt-dlp command-line handling for the Python and CLI engines

use std::time::Duration;
use tracing::debug;

use super::traits::EngineRequest;
use crate::downloader::errors::DownloadError;
use crate::downloader::models::RawVideoInfo;
use crate::downloader::utils::{engine_error_text, run_output};

/// What a single engine invocation should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// Print the info JSON, download nothing
    DumpJson,
    /// Download to the request's output template
    Download,
}

/// Translate a request into yt-dlp arguments (without the program itself).
pub fn build_args(request: &EngineRequest, invocation: Invocation) -> Vec<String> {
    let mut args = vec!["--no-playlist".to_string()];

    match invocation {
        Invocation::DumpJson => args.push("--dump-json".to_string()),
        Invocation::Download => {
            if let Some(format) = &request.format {
                args.push("--format".to_string());
                args.push(format.clone());
            }
            if let Some(template) = &request.output_template {
                args.push("--output".to_string());
                args.push(template.to_string_lossy().into_owned());
            }
        }
    }

    if request.quiet {
        args.push("--quiet".to_string());
        args.push("--no-warnings".to_string());
    }

    if let Some(extractor_args) = request.extractor_args() {
        args.push("--extractor-args".to_string());
        args.push(extractor_args);
    }

    for (name, value) in &request.headers {
        args.push("--add-header".to_string());
        args.push(format!("{}:{}", name, value));
    }

    if let Some(path) = &request.cookies_path {
        args.push("--cookies".to_string());
        args.push(path.to_string_lossy().into_owned());
    }

    // Keeps a URL that starts with '-' from being read as an option.
    args.push("--".to_string());
    args.push(request.url.clone());
    args
}

/// Run the engine and return its stdout, or its error text on failure.
async fn run(
    engine: &str,
    program: &str,
    args: Vec<String>,
    limit: Option<Duration>,
) -> Result<Vec<u8>, DownloadError> {
    debug!(engine, "{} {}", program, args.join(" "));

    let output = run_output(program, &args, limit)
        .await
        .map_err(DownloadError::ExecutionError)?;

    if output.status.success() {
        Ok(output.stdout)
    } else {
        Err(DownloadError::Engine(engine_error_text(
            &output.stderr,
            output.status,
        )))
    }
}

pub async fn extract_info(
    engine: &str,
    program: &str,
    prefix: &[String],
    request: &EngineRequest,
    limit: Option<Duration>,
) -> Result<RawVideoInfo, DownloadError> {
    let mut args = prefix.to_vec();
    args.extend(build_args(request, Invocation::DumpJson));

    let stdout = run(engine, program, args, limit).await?;
    parse_info(&stdout)
}

pub async fn download(
    engine: &str,
    program: &str,
    prefix: &[String],
    request: &EngineRequest,
    limit: Option<Duration>,
) -> Result<(), DownloadError> {
    let mut args = prefix.to_vec();
    args.extend(build_args(request, Invocation::Download));

    run(engine, program, args, limit).await.map(|_| ())
}

/// Parse `--dump-json` output
pub fn parse_info(stdout: &[u8]) -> Result<RawVideoInfo, DownloadError> {
    let json_str = String::from_utf8_lossy(stdout);
    // --dump-json prints one object per line; the first is the video itself.
    let first = json_str
        .lines()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| DownloadError::ParseError("Engine printed no JSON".to_string()))?;
    Ok(serde_json::from_str(first)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn position(args: &[String], flag: &str) -> Option<usize> {
        args.iter().position(|a| a == flag)
    }

    #[test]
    fn download_args_carry_format_template_and_headers() {
        let request = EngineRequest {
            url: "https://youtube.com/watch?v=abc".to_string(),
            format: Some("best[height<=720][ext=mp4]".to_string()),
            output_template: Some(PathBuf::from("downloads/abc/%(title)s.%(ext)s")),
            player_clients: vec!["ios".into(), "mweb".into(), "android".into()],
            skip: vec!["translated_subs".into()],
            headers: vec![("Accept-Language".into(), "en-us,en;q=0.5".into())],
            cookies_path: Some(PathBuf::from("cookies.txt")),
            quiet: false,
        };

        let args = build_args(&request, Invocation::Download);

        let f = position(&args, "--format").unwrap();
        assert_eq!(args[f + 1], "best[height<=720][ext=mp4]");
        let o = position(&args, "--output").unwrap();
        assert_eq!(args[o + 1], "downloads/abc/%(title)s.%(ext)s");
        let e = position(&args, "--extractor-args").unwrap();
        assert_eq!(
            args[e + 1],
            "youtube:player_client=ios,mweb,android;skip=translated_subs"
        );
        let h = position(&args, "--add-header").unwrap();
        assert_eq!(args[h + 1], "Accept-Language:en-us,en;q=0.5");
        let c = position(&args, "--cookies").unwrap();
        assert_eq!(args[c + 1], "cookies.txt");
        assert!(position(&args, "--dump-json").is_none());
        assert!(position(&args, "--quiet").is_none());
        assert_eq!(args.last().unwrap(), "https://youtube.com/watch?v=abc");
    }

    #[test]
    fn dump_args_skip_download_options() {
        let mut request = EngineRequest::new("https://youtube.com/watch?v=abc");
        request.format = Some("best".to_string());
        request.quiet = true;

        let args = build_args(&request, Invocation::DumpJson);

        assert!(position(&args, "--dump-json").is_some());
        assert!(position(&args, "--quiet").is_some());
        assert!(position(&args, "--no-warnings").is_some());
        assert!(position(&args, "--format").is_none());
        assert!(position(&args, "--cookies").is_none());
        assert!(position(&args, "--extractor-args").is_none());
    }

    #[test]
    fn parse_info_reads_first_json_line() {
        let stdout = b"{\"title\": \"A\", \"formats\": [{\"height\": 360, \"vcodec\": \"avc1\", \"acodec\": \"mp4a\"}]}\n";
        let info = parse_info(stdout).unwrap();
        assert_eq!(info.title.as_deref(), Some("A"));
        assert_eq!(info.formats.len(), 1);
        assert_eq!(info.formats[0].height, Some(360));
    }

    #[test]
    fn parse_info_rejects_garbage() {
        assert!(matches!(parse_info(b""), Err(DownloadError::ParseError(_))));
        assert!(matches!(
            parse_info(b"not json"),
            Err(DownloadError::ParseError(_))
        ));
    }

    /// `sh -c <script>` standing in for the engine; yt-dlp's arguments land
    /// in the script's positional parameters and are ignored.
    #[cfg(unix)]
    fn fake_engine(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string(), "yt-dlp".to_string()]
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn extract_info_parses_engine_stdout() {
        let prefix = fake_engine(r#"echo '{"title": "Fake", "uploader": "Tester", "duration": 42}'"#);
        let request = EngineRequest::new("https://youtube.com/watch?v=abc");

        let info = extract_info("test", "sh", &prefix, &request, None)
            .await
            .unwrap();

        assert_eq!(info.title.as_deref(), Some("Fake"));
        assert_eq!(info.duration, Some(42));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failed_run_surfaces_error_line() {
        let prefix = fake_engine("echo 'ERROR: [youtube] abc: Video unavailable' 1>&2; exit 1");
        let request = EngineRequest::new("https://youtube.com/watch?v=abc");

        let err = download("test", "sh", &prefix, &request, None)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DownloadError::Engine("ERROR: [youtube] abc: Video unavailable".to_string())
        );
    }
}
