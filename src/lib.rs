//! Merge a tree of Swift sources into a single annotated file.
//!
//! ```no_run
//! use merge_sources::{merge, MergeJob};
//!
//! let stats = merge(&MergeJob::new("Sources", "merged_code.swift"))?;
//! println!("merged {} files", stats.files_merged);
//! # Ok::<(), merge_sources::MergeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod merge;
pub mod render;
pub mod scan;
pub mod utils;

pub use domain::{MergeJob, MergeStats, SourceFile};
pub use error::MergeError;
pub use merge::merge;
