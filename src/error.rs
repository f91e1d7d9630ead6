#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `Logger::scope` was called with an empty name list.
    #[error("no scope name was defined")]
    NoScopeName,
}
