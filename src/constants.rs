pub mod storage {

    pub const RESUMES: &str = "resumes";

    pub const COMMON_CODES: &str = "commonCodes";
}

pub mod verification {
    use std::time::Duration;

    /// Delay before the simulated verification round trip completes.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);
}
