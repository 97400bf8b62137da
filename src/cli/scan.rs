//! Scan command - decode QR images and analyze their URLs

use super::output;
use super::OutputArgs;
use anyhow::{Context, Result};
use console::style;
use qrsafe::config::UserConfig;
use qrsafe::qr::{DecodeError, ImageQrDecoder, QrDecoder, QrSource};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Run the scan command
pub fn run(images: &[PathBuf], args: &OutputArgs, workers: usize) -> Result<()> {
    output::validate_export(args, images.len())?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("Failed to start worker pool")?;
    let decoded = pool.install(|| decode_all(&ImageQrDecoder, images));

    let mut inputs = Vec::with_capacity(decoded.len());
    let mut failures = 0usize;
    for (path, outcome) in images.iter().zip(decoded) {
        match outcome {
            Ok(text) => {
                info!("Decoded {}: {}", path.display(), text);
                inputs.push(text);
            }
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {}", style("✗").red(), path.display(), e);
            }
        }
    }

    if !inputs.is_empty() {
        let config = UserConfig::load();
        let format = output::resolve_format(args, &config)?;
        let analyzer = output::build_analyzer(args, &config);

        let results = output::analyze_inputs(&analyzer, &inputs, workers)?;
        output::print_results(&results, format)?;
        output::export_if_requested(args, &results)?;
        output::check_fail_threshold(args.fail_on.as_deref(), &results);
    }

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Decode every image, keeping input order. Payloads are trimmed; a code
/// holding only whitespace counts as not found.
fn decode_all(decoder: &dyn QrDecoder, images: &[PathBuf]) -> Vec<Result<String, DecodeError>> {
    images
        .par_iter()
        .map(|path| decode_one(decoder, path))
        .collect()
}

fn decode_one(decoder: &dyn QrDecoder, path: &Path) -> Result<String, DecodeError> {
    let text = decoder.decode(QrSource::Path(path))?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::NotFound);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDecoder(&'static str);

    impl QrDecoder for FixedDecoder {
        fn decode(&self, _source: QrSource<'_>) -> Result<String, DecodeError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_decoded_text_is_trimmed() {
        let text = decode_one(&FixedDecoder("  http://a.xyz/login \n"), Path::new("a.png")).unwrap();
        assert_eq!(text, "http://a.xyz/login");
    }

    #[test]
    fn test_whitespace_payload_is_not_found() {
        let err = decode_one(&FixedDecoder("   "), Path::new("a.png")).unwrap_err();
        assert!(matches!(err, DecodeError::NotFound));
    }

    #[test]
    fn test_decode_all_keeps_order_and_errors() {
        let images = vec![PathBuf::from("/nonexistent/a.png"), PathBuf::from("/nonexistent/b.png")];
        let out = decode_all(&ImageQrDecoder, &images);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| matches!(r, Err(DecodeError::UnreadableImage(_)))));
    }
}
