use super::{
    error::Error,
    types::{GetRecordsOutput, Shard},
};

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_kinesis::{types::ShardIteratorType, Client as KinesisSdkClient};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Client {
    kinesis: KinesisSdkClient,
}

impl Client {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            kinesis: KinesisSdkClient::new(config),
        }
    }

    /// Build a client bound to `region`, resolving credentials through the default provider
    /// chain.
    ///
    /// Nothing is sent over the network here. Missing credentials or an unreachable endpoint
    /// show up as [`Error::SdkError`] from the first API call.
    pub async fn connect(region: impl Into<String>, endpoint_url: Option<String>) -> Self {
        let region: String = region.into();
        debug!("Connecting to kinesis in {region}");

        let loader = aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region));
        let loader = match endpoint_url {
            Some(url) => loader.endpoint_url(url),
            None => loader,
        };

        Self::new(&loader.load().await)
    }
}

#[async_trait]
pub trait KinesisClient: Clone + Send + Sync {
    /// Return shard with a shard iterator positioned by `shard_iterator_type`.
    async fn get_shard_with_iterator(
        &self,
        stream_name: impl Into<String> + Send,
        shard: Shard,
        shard_iterator_type: ShardIteratorType,
    ) -> Result<Shard, Error>;

    /// Return at most `limit` records from shard, and the shard with its next iterator.
    async fn get_records(&self, shard: Shard, limit: i32) -> Result<GetRecordsOutput, Error>;
}

#[async_trait]
impl KinesisClient for Client {
    async fn get_shard_with_iterator(
        &self,
        stream_name: impl Into<String> + Send,
        shard: Shard,
        shard_iterator_type: ShardIteratorType,
    ) -> Result<Shard, Error> {
        let stream_name: String = stream_name.into();

        let iterator = self
            .kinesis
            .get_shard_iterator()
            .stream_name(&stream_name)
            .shard_id(shard.id())
            .shard_iterator_type(shard_iterator_type)
            .send()
            .await
            .map_err(|err| Error::SdkError(Box::new(err)))?
            .shard_iterator
            .ok_or_else(|| Error::NotFoundShardIterator(stream_name, shard.id().to_string()))?;

        Ok(shard.set_iterator(Some(iterator)))
    }

    async fn get_records(&self, shard: Shard, limit: i32) -> Result<GetRecordsOutput, Error> {
        let iterator = shard
            .iterator()
            .map(|val| val.to_string())
            .ok_or_else(|| Error::ClosedShard(shard.id().to_string()))?;

        self.kinesis
            .get_records()
            .shard_iterator(iterator)
            .limit(limit)
            .send()
            .await
            .map_err(|err| Error::SdkError(Box::new(err)))
            .map(|output| GetRecordsOutput {
                shard: shard.set_iterator(output.next_shard_iterator),
                records: output.records,
                millis_behind_latest: output.millis_behind_latest,
            })
    }
}
