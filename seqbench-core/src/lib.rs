#![warn(missing_docs)]
//! SeqBench Core
//!
//! Building blocks shared by the SeqBench driver:
//! - [`Record`] and its single-sequence query payload
//! - [`FastaReader`], a streaming FASTA record iterator
//! - [`ComplexityMetric`] with the default [`LempelZiv`] score

mod complexity;
mod error;
mod fasta;
mod record;

pub use complexity::{ComplexityMetric, LempelZiv, lempel_ziv_complexity};
pub use error::{CoreError, Result};
pub use fasta::FastaReader;
pub use record::Record;
