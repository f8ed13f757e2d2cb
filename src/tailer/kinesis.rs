use super::{
    types::{GetRecordsOutput, Shard},
    Error, KinesisClient,
};
use crate::{
    config::Config, DEFAULT_INTERVAL_MS, DEFAULT_LIMIT, DEFAULT_SHARD_ID, DEFAULT_STREAM_NAME,
    MAX_LIMIT,
};

use aws_sdk_kinesis::types::{Record, ShardIteratorType};
use std::io::{self, Stdout, Write};
use tokio::time::{sleep, Duration};
use tracing::{debug, error, info};

/// The polling loop over one Kinesis shard.
///
/// The tailer holds exactly one shard iterator at a time. Every `GetRecords` call consumes
/// it and the returned `NextShardIterator` takes its place, whether or not records came back.
#[derive(Debug)]
pub struct Tailer<Client, W = Stdout>
where
    Client: KinesisClient,
    W: Write,
{
    stream_name: String,
    shard: Shard,
    client: Client,
    shard_iterator_type: ShardIteratorType,
    limit: i32,
    interval: Option<Duration>,
    output: W,
}

impl<Client, W> Tailer<Client, W>
where
    Client: KinesisClient,
    W: Write,
{
    pub fn stream_name(&self) -> &str {
        self.stream_name.as_str()
    }

    /// The shard being tailed, carrying the iterator for the next fetch.
    pub fn shard(&self) -> &Shard {
        &self.shard
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Get the first shard iterator from the configured position.
    pub async fn init(&mut self) -> Result<(), Error> {
        let shard = Shard::new(self.shard.id());
        self.shard = self
            .client
            .get_shard_with_iterator(
                &self.stream_name,
                shard,
                self.shard_iterator_type.clone(),
            )
            .await?;

        info!(
            "Tailing {} shard of {} stream from {}",
            self.shard.id(),
            self.stream_name,
            self.shard_iterator_type.as_str(),
        );

        Ok(())
    }

    /// Fetch once, write the records and advance the shard iterator.
    ///
    /// Returns the number of records written.
    ///
    /// A shard without an iterator has been closed by the service, so it fails with
    /// [`Error::ClosedShard`] before the client is called.
    pub async fn iterate(&mut self) -> Result<usize, Error> {
        if self.shard.iterator().is_none() {
            return Err(Error::ClosedShard(self.shard.id().to_string()));
        }

        let GetRecordsOutput {
            shard,
            records,
            millis_behind_latest,
        } = self.client.get_records(self.shard.clone(), self.limit).await?;

        debug!(
            shard_id = shard.id(),
            records = records.len(),
            millis_behind_latest,
            "Fetched records"
        );

        self.shard = shard;
        self.write_records(&records)?;

        Ok(records.len())
    }

    /// Tail the shard until something fails.
    ///
    /// There is no retry. The first error from initialization or from any iteration is
    /// returned as is, so this only comes back with `Err`.
    pub async fn run(&mut self) -> Result<(), Error> {
        ok_or_bail!(self.init().await, |err| {
            error!(
                "Unexpected error during initialization: {err}. Skip tailing {} shard of {} stream.",
                self.shard.id(),
                self.stream_name,
            );
        });

        loop {
            ok_or_bail!(self.iterate().await, |err| {
                error!(
                    "Unexpected error during iteration: {err}. Stop tailing {} shard of {} stream.",
                    self.shard.id(),
                    self.stream_name,
                );
            });

            if let Some(duration) = self.interval {
                sleep(duration).await;
            }
        }
    }

    fn write_records(&mut self, records: &[Record]) -> io::Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        for record in records {
            self.output.write_all(record.data().as_ref())?;
            self.output.write_all(b"\n")?;
        }

        self.output.flush()
    }
}

/// A builder for [`Tailer`].
#[derive(Debug)]
pub struct TailerBuilder<Client, W = Stdout>
where
    Client: KinesisClient,
    W: Write,
{
    stream_name: String,
    shard_id: String,
    client: Option<Client>,
    shard_iterator_type: ShardIteratorType,
    limit: i32,
    interval: Option<Duration>,
    output: W,
}

impl<Client> TailerBuilder<Client, Stdout>
where
    Client: KinesisClient,
{
    /// Create a new `TailerBuilder` that tails `shardId-000000000000` of `joinResults` from
    /// `LATEST`, one record per request, every 200 milliseconds, printing to stdout.
    pub fn new() -> Self {
        Self {
            stream_name: DEFAULT_STREAM_NAME.to_string(),
            shard_id: DEFAULT_SHARD_ID.to_string(),
            client: None,
            shard_iterator_type: ShardIteratorType::Latest,
            limit: DEFAULT_LIMIT,
            interval: Some(Duration::from_millis(DEFAULT_INTERVAL_MS)),
            output: io::stdout(),
        }
    }
}

impl<Client, W> TailerBuilder<Client, W>
where
    Client: KinesisClient,
    W: Write,
{
    /// Set the name of the stream to read from.
    pub fn stream_name(self, stream_name: impl Into<String>) -> Self {
        Self {
            stream_name: stream_name.into(),
            ..self
        }
    }

    /// Set the id of the shard to read from.
    pub fn shard_id(self, shard_id: impl Into<String>) -> Self {
        Self {
            shard_id: shard_id.into(),
            ..self
        }
    }

    /// Set client to call AWS APIs.
    ///
    /// **Setting any client is required** before the build method is called.
    pub fn client(self, client: Client) -> Self {
        Self {
            client: Some(client),
            ..self
        }
    }

    /// Set [`ShardIteratorType`] to get the first shard iterator. After that, the tailer
    /// uses the shard iterator from the previous `get records` output.
    pub fn shard_iterator_type(self, shard_iterator_type: ShardIteratorType) -> Self {
        Self {
            shard_iterator_type,
            ..self
        }
    }

    /// Set the maximum number of records per `get records` call. Kinesis accepts 1 to 10000.
    pub fn limit(self, limit: i32) -> Self {
        Self { limit, ..self }
    }

    /// Set interval between polling attempts. When None is provided there are no intervals
    /// between polling iterations.
    pub fn interval(self, interval: Option<Duration>) -> Self {
        Self { interval, ..self }
    }

    /// Set where record payloads are written.
    pub fn output<O: Write>(self, output: O) -> TailerBuilder<Client, O> {
        TailerBuilder {
            stream_name: self.stream_name,
            shard_id: self.shard_id,
            client: self.client,
            shard_iterator_type: self.shard_iterator_type,
            limit: self.limit,
            interval: self.interval,
            output,
        }
    }

    /// Apply everything but the connection settings from [`Config`].
    pub fn config(self, config: &Config) -> Self {
        Self {
            stream_name: config.stream_name().to_string(),
            shard_id: config.shard_id().to_string(),
            shard_iterator_type: config.shard_iterator_type().clone(),
            limit: config.limit(),
            interval: config.interval(),
            ..self
        }
    }

    /// Consumes the builder and constructs a [`Tailer`].
    pub fn build(self) -> Result<Tailer<Client, W>, Error> {
        let client = self.client.ok_or(Error::MissingClient)?;

        if !(1..=MAX_LIMIT).contains(&self.limit) {
            return Err(Error::InvalidConfig(format!(
                "limit must be between 1 and {MAX_LIMIT}, got: {}",
                self.limit
            )));
        }

        Ok(Tailer {
            stream_name: self.stream_name,
            shard: Shard::new(self.shard_id),
            client,
            shard_iterator_type: self.shard_iterator_type,
            limit: self.limit,
            interval: self.interval,
            output: self.output,
        })
    }
}

impl<Client> Default for TailerBuilder<Client, Stdout>
where
    Client: KinesisClient,
{
    fn default() -> Self {
        Self::new()
    }
}
