//! qrsafe - Fake QR & phishing URL detection
//!
//! A URL (typed, or decoded from a QR image) goes through a fixed pipeline:
//! normalization, a set of independent weighted heuristics, an optional
//! reachability probe, and threshold-based classification. Every point of
//! the score is traceable to a named signal.
//!
//! ```rust,ignore
//! use qrsafe::engine::Analyzer;
//!
//! let result = Analyzer::offline().analyze("http://192.168.1.1/login");
//! assert_eq!(result.score, Some(7));
//! println!("{}", qrsafe::reporters::render_report(&result));
//! ```

pub mod config;
pub mod engine;
pub mod models;
pub mod normalize;
pub mod probe;
pub mod qr;
pub mod reporters;
pub mod scoring;
pub mod signals;
