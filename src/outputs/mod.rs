//! Output generation for scored headlines.
//!
//! # Submodules
//!
//! - [`table`]: Ranks records and renders the terminal tables
//! - [`json`]: Writes a [`ScoreReport`](crate::models::ScoreReport) for other tools
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── morning.json
//!     ├── afternoon.json
//!     └── evening.json
//! ```

pub mod json;
pub mod table;
