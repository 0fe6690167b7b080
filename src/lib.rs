//! Domain Alterations - generate plausible variants of discovered names
//!
//! Expands names such as `api-dev1.example.com` with word flips, number flips
//! and appends, and edit-distance fuzzing, ready to be handed to a resolver.

pub mod alterations;
pub mod error;
pub mod pipeline;
pub mod stringset;
pub mod types;

// Re-export commonly used types
pub use error::{AlterationError, Result};
pub use stringset::StringSet;
pub use types::{Alteration, AlterationConfig};

// Re-export main functionality
pub use alterations::{FrequencyCache, MutationState};
pub use pipeline::{AlterationPipeline, PipelineReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
