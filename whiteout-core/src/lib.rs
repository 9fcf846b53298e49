//! # whiteout-core
//!
//! A reusable crate for knocking out near-white backgrounds in PNG images.
//!
//! ## Features
//! - Near-white classification (R, G and B all above 240)
//! - Any decodable source is expanded to RGBA8 before the rule runs
//! - In-place PNG overwrite, encoded fully in memory first
//! - Directory batches that report every file and never stop on one bad image
//!
//! ## Example
//!
//! ```no_run
//! use whiteout_core::batch;
//!
//! let summary = batch::run("public/icons/3d", |path, result| {
//!     println!("{}", batch::report_line(path, result));
//! });
//!
//! if let Err(e) = summary {
//!     println!("{}", e);
//! }
//! ```

pub mod batch;
pub mod pixel;
pub mod remover;
pub mod scanner;

// Pixel rule
pub use pixel::{
    clear_near_white, clear_pixel, is_near_white, NEAR_WHITE_THRESHOLD, TRANSPARENT_WHITE,
};

// Directory scanning
pub use scanner::{scan, ScanError};

// Per-file transform
pub use remover::{encode_png, load_rgba, remove_background, Cleared, RemoveError};

// Batch driver
pub use batch::{report_line, BatchSummary};
