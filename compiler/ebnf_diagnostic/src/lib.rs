//! Diagnostic collection for grammar scanning.
//!
//! Scanning never aborts on the first defect. Malformed-but-recoverable
//! input is reported here while the token stream keeps flowing, and a
//! fatal condition leaves its reason here before the scanner gives up.
//!
//! # Sharing
//!
//! A single [`DiagnosticSink`] may be shared by reference across threads,
//! each thread running its own scanner over a different grammar file:
//!
//! ```text
//! let sink = DiagnosticSink::new();
//! std::thread::scope(|s| {
//!     s.spawn(|| scan_file_a(&sink));
//!     s.spawn(|| scan_file_b(&sink));
//! });
//! sink.for_each(|diag| eprintln!("{diag}"));
//! ```

mod diagnostic;
pub mod sink;

pub use diagnostic::{Diagnostic, Severity};
pub use sink::DiagnosticSink;
