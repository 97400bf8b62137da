//! Plain-text report file
//!
//! The layout is fixed so saved reports stay comparable over time:
//!
//! ```text
//! Fake QR & Phishing URL Detector Report
//! ==========================================
//!
//! Time:    2024-03-09 14:05:07
//! Input:   http://192.168.1.1/login
//! Host:    192.168.1.1
//! Verdict: HIGH RISK (score 7)
//!
//! Signals:
//! - Uses HTTP instead of HTTPS (+2)
//! ```
//!
//! Files are written to a temp file in the target directory and renamed into
//! place, so an existing report is either fully replaced or left untouched.

use crate::models::AnalysisResult;
use crate::reporters::{file_extension, OutputFormat};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

const TITLE: &str = "Fake QR & Phishing URL Detector Report";
const SEPARATOR_WIDTH: usize = 42;
const NO_HOST: &str = "—";

/// Report export failures
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move report into place at {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// `report_<unix-timestamp>.txt`
pub fn default_report_filename(unix_timestamp: i64) -> String {
    format!(
        "report_{unix_timestamp}.{}",
        file_extension(OutputFormat::Report)
    )
}

/// Render the report file body
pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push_str("\n\n");

    out.push_str(&format!("Time:    {}\n", result.formatted_time()));
    out.push_str(&format!("Input:   {}\n", result.input));
    out.push_str(&format!("Host:    {}\n", result.host().unwrap_or(NO_HOST)));

    match result.score {
        Some(score) if result.is_valid() => {
            out.push_str(&format!("Verdict: {} (score {})\n", result.verdict, score));
        }
        _ => {
            out.push_str(&format!("Verdict: {}\n", result.verdict));
            if let Some(err) = &result.error {
                out.push_str(&format!("Error:   {err}\n"));
            }
        }
    }
    out.push('\n');

    let details = result.details();
    if !details.is_empty() {
        out.push_str("Signals:\n");
        for detail in details {
            out.push_str(&format!("- {detail}\n"));
        }
    }

    out
}

/// Temp files are created 0600; request 0666 so the umask decides, as with
/// a plain create.
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder
}

/// Write the report for `result` to `path`, replacing any existing file atomically.
pub fn export_report(result: &AnalysisResult, path: &Path) -> Result<PathBuf, ExportError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = temp_builder().tempfile_in(dir).map_err(io_err)?;
    tmp.write_all(render_report(result).as_bytes())
        .map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(path).map_err(|source| ExportError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Report written to {}", path.display());
    Ok(path.to_path_buf())
}
