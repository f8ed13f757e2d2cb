//! Follow one shard of an [Amazon Kinesis](https://docs.aws.amazon.com/streams/latest/dev/introduction.html)
//! stream and print the payload of every new record.
//!
//! ## Getting Started
//!
//! With no configuration the tailer reads `shardId-000000000000` of the `joinResults` stream
//! in `us-east-1`, starting from `LATEST`. It asks for one record at a time and sleeps
//! 200 milliseconds between requests.
//!
//! ```rust,no_run
//! use kinesis_tailer::{tailer, Client, Config, Error};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Error> {
//!     let config = Config::from_env()?;
//!     let client = Client::connect(config.region(), config.endpoint_url()).await;
//!
//!     let mut tailer = tailer::builder()
//!         .client(client)
//!         .config(&config)
//!         .build()?;
//!
//!     tailer.run().await
//! }
//! ```
//!
//! ## Failure
//!
//! Nothing is retried. An expired iterator, throttling, a network fault or a closed shard ends
//! [`Tailer::run`](tailer::Tailer::run) with the [`Error`] that caused it. Every start reads
//! from the configured position again; no position is saved between runs.
//!
//! ## AWS SDK Dependency
//!
//! [`Client::connect`] resolves credentials through the default provider chain of
//! [`aws_config`]. To reuse an existing [`SdkConfig`](aws_config::SdkConfig), build the
//! client with [`Client::new`].

#[macro_use]
mod macros;

/// Client for calling AWS APIs.
pub mod client;

/// Settings read from the environment.
pub mod config;

/// Common errors.
pub mod error;

/// Data structures used by operations.
pub mod types;

/// The polling loop.
pub mod tailer;

pub use client::{Client, KinesisClient};
pub use config::Config;
pub use error::Error;

/// Environment variables read by [`Config::from_env`].
pub const ENV_REGION: &str = "KINESIS_TAILER_REGION";
pub const ENV_ENDPOINT_URL: &str = "KINESIS_TAILER_ENDPOINT_URL";
pub const ENV_STREAM_NAME: &str = "KINESIS_TAILER_STREAM_NAME";
pub const ENV_SHARD_ID: &str = "KINESIS_TAILER_SHARD_ID";
pub const ENV_ITERATOR_TYPE: &str = "KINESIS_TAILER_ITERATOR_TYPE";
pub const ENV_LIMIT: &str = "KINESIS_TAILER_LIMIT";
pub const ENV_INTERVAL_MS: &str = "KINESIS_TAILER_INTERVAL_MS";

/// Values used when the matching variable is unset.
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_STREAM_NAME: &str = "joinResults";
pub const DEFAULT_SHARD_ID: &str = "shardId-000000000000";
pub const DEFAULT_LIMIT: i32 = 1;
pub const DEFAULT_INTERVAL_MS: u64 = 200;

/// Upper bound Kinesis puts on `Limit` in `GetRecords`.
pub const MAX_LIMIT: i32 = 10_000;
