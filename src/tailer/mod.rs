//! # Tailer
//!
//! [`Tailer`](crate::tailer::Tailer) follows one shard of a Kinesis stream and writes the
//! payload of every record it receives as a line to its output (stdout unless another
//! writer is set).
//!
//! ```rust,no_run
//! use kinesis_tailer::{tailer, Client, Error};
//!
//! # async fn wrapper() -> Result<(), Error> {
//! let client = Client::connect("us-east-1", None).await;
//! let mut tailer = tailer::builder()
//!     .client(client)
//!     .stream_name("joinResults")
//!     .shard_id("shardId-000000000000")
//!     .build()?;
//!
//! // Never returns Ok. Any error from the service ends the loop.
//! tailer.run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Stepping manually
//!
//! `run` is `init` followed by `iterate` and a sleep, forever. Both halves are public, so the
//! loop can be driven by hand.
//!
//! ```rust,no_run
//! use kinesis_tailer::{tailer, Client, Error};
//!
//! # async fn wrapper() -> Result<(), Error> {
//! # let client = Client::connect("us-east-1", None).await;
//! let mut tailer = tailer::builder()
//!     .client(client)
//!     .output(Vec::new())
//!     .interval(None)
//!     .build()?;
//!
//! tailer.init().await?;
//! let printed = tailer.iterate().await?;
//! println!("{printed} records, next iterator {:?}", tailer.shard().iterator());
//! # Ok(())
//! # }
//! ```

mod kinesis;

use super::{client::KinesisClient, error::Error, types};

pub use kinesis::{Tailer, TailerBuilder};

/// Create [`TailerBuilder`].
pub fn builder<C: KinesisClient>() -> TailerBuilder<C> {
    TailerBuilder::new()
}
