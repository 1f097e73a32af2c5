//! Command handlers for the vehicle-eval binary.

mod analyze;
mod lexicon;

pub use analyze::run_analyze;
pub use lexicon::{run_lexicon_init, run_lexicon_show};

/// Process exit codes.
pub mod exit_codes {
    /// Analysis completed, no threshold violated
    pub const SUCCESS: i32 = 0;
    /// Accuracy fell below `--fail-under`
    pub const BELOW_THRESHOLD: i32 = 1;
}
