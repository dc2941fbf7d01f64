/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures from `NoticeError` are converted with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
