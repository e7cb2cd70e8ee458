//! prescribe core library
//!
//! Weighted edit distance with an explicit edit prescription: the matrix
//! builder, the traceback extractor, and a lazy replay of the prescription
//! against the original sequence.

pub mod error;
pub mod types;
pub mod matrix;
pub mod prescription;
pub mod traceback;
pub mod redaction;
pub mod align;

pub use error::{AlignError, AlignResult};
pub use types::{CostConfig, Operation};
pub use matrix::{build, build_matrix, ActionMatrix, AlignmentMatrix, CostMatrix, Grid};
pub use prescription::{OperationCounts, Prescription};
pub use traceback::extract;
pub use redaction::{apply, Redaction, TraceStep};
pub use align::{align, align_by, align_str, distance, Alignment};

/// Version information for the prescribe core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
