use thiserror::Error as ThisError;

#[allow(clippy::enum_variant_names)]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("not found shard iterator for shard {1} of stream {0}")]
    NotFoundShardIterator(String, String),
    #[error("no shard iterator left for shard {0}, the shard is closed")]
    ClosedShard(String),
    #[error("`client` is required to build a tailer")]
    MissingClient,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to write record: {0}")]
    Output(#[from] std::io::Error),
    #[error("aws-sdk error: {0}")]
    SdkError(Box<dyn std::error::Error + Send + Sync + 'static>),
}
