//! Export of generated content to disk, plus the summary report

pub mod writer;
pub mod stats;

pub use writer::{ExportError, ExportPaths, write_content, read_content, DEFAULT_OUTPUT_DIR, SKILLS_FILE, ABILITIES_FILE};
pub use stats::{ContentStats, TierStats, ValueRange};
