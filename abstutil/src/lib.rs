//! The contents of this crate need to be organized better:
//!
//! - Logging setup shared by every binary
//! - Reading and writing JSON files
//! - Pretty-printing numbers

mod io;
pub mod logger;
mod utils;

pub use crate::io::{read_json, to_json, write_json};
pub use crate::utils::prettyprint_usize;
