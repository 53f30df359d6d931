//! Application services.

pub mod verification;

pub use verification::{VerificationService, VerificationStatus};
