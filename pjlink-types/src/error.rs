pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Command must be exactly 4 characters, got {actual}")]
    InvalidCommandLength { actual: usize },
}
