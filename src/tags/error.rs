#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse stream: {0}")]
    Stream(#[from] lofty::error::LoftyError),
    #[error("failed to parse ID3 tag: {0}")]
    Id3(#[from] id3::Error),
}
