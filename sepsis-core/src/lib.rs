//! # Sepsis HDT Target Prioritization
//!
//! Ranks a curated sepsis host gene signature by a composite therapeutic
//! priority score and emits the companion table of clinically advanced
//! compounds. The two CSV tables it writes feed the manuscript, figure and
//! supplementary generators.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sepsis_core::{TargetPrioritizer, config::SepsisConfig};
//!
//! // Reads <root>/data/gene_signature.csv, writes <root>/outputs/tables/*.csv
//! let prioritizer = TargetPrioritizer::new(SepsisConfig::with_root("."));
//! let results = prioritizer.run()?;
//!
//! for target in results.targets.iter().take(5) {
//!     println!("{} {} {}", target.rank, target.record.symbol, target.composite_score);
//! }
//! # Ok::<(), sepsis_core::types::SepsisError>(())
//! ```
//!
//! ## Scoring
//!
//! ```text
//! score = round(0.35·omics + 0.25·evidence + 0.20·druggability
//!               + 0.10·pathway + 0.10·0.7, 3)
//! ```
//!
//! The evidence term comes from an injectable [`evidence::EvidenceSource`];
//! the default [`evidence::PubMedProxy`] derives it from publication volume.
//! See [`scoring`] for every term.
//!
//! ## Module Organization
//!
//! - [`config`]: Project root and run options
//! - [`engine`]: Pipeline driver
//! - [`signature`]: Gene signature loading and validation
//! - [`scoring`]: Composite score terms
//! - [`evidence`]: Target-evidence sources
//! - [`ranking`]: Stable descending ranking
//! - [`compounds`]: Curated compound table
//! - [`summary`]: Summary statistics
//! - [`output`]: CSV and report writers
//! - [`types`]: Records, annotations and errors
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, SepsisError>`](types::SepsisError).
//! Missing or malformed input aborts the run; unrecognized annotation
//! labels never do, they score with neutral default weights.

pub mod compounds;
pub mod config;
pub mod constants;
pub mod engine;
pub mod evidence;
pub mod output;
pub mod ranking;
pub mod results;
pub mod scoring;
pub mod signature;
pub mod summary;
pub mod types;

pub use engine::TargetPrioritizer;
pub use types::SepsisError;
