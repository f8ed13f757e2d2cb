use super::{
    error::Error, DEFAULT_INTERVAL_MS, DEFAULT_LIMIT, DEFAULT_REGION, DEFAULT_SHARD_ID,
    DEFAULT_STREAM_NAME, ENV_ENDPOINT_URL, ENV_INTERVAL_MS, ENV_ITERATOR_TYPE, ENV_LIMIT,
    ENV_REGION, ENV_SHARD_ID, ENV_STREAM_NAME,
};

use aws_sdk_kinesis::types::ShardIteratorType;
use std::{env, str::FromStr, time::Duration};

/// Settings for one tailer, read from `KINESIS_TAILER_*` environment variables.
///
/// Every unset variable falls back to the fixed default, so an empty environment tails
/// `shardId-000000000000` of `joinResults` in `us-east-1` from `LATEST`.
#[derive(Debug, Clone)]
pub struct Config {
    region: String,
    endpoint_url: Option<String>,
    stream_name: String,
    shard_id: String,
    shard_iterator_type: ShardIteratorType,
    limit: i32,
    interval: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let region = lookup(ENV_REGION).unwrap_or_else(|| DEFAULT_REGION.to_string());
        let endpoint_url = lookup(ENV_ENDPOINT_URL);
        let stream_name =
            lookup(ENV_STREAM_NAME).unwrap_or_else(|| DEFAULT_STREAM_NAME.to_string());
        let shard_id = lookup(ENV_SHARD_ID).unwrap_or_else(|| DEFAULT_SHARD_ID.to_string());

        let shard_iterator_type = match lookup(ENV_ITERATOR_TYPE) {
            Some(val) => parse_iterator_type(&val)?,
            None => ShardIteratorType::Latest,
        };

        let limit = parse_or(&lookup, ENV_LIMIT, DEFAULT_LIMIT)?;
        let interval = match parse_or(&lookup, ENV_INTERVAL_MS, DEFAULT_INTERVAL_MS)? {
            0 => None,
            millis => Some(Duration::from_millis(millis)),
        };

        Ok(Self {
            region,
            endpoint_url,
            stream_name,
            shard_id,
            shard_iterator_type,
            limit,
            interval,
        })
    }

    pub fn region(&self) -> &str {
        self.region.as_str()
    }

    pub fn endpoint_url(&self) -> Option<String> {
        self.endpoint_url.clone()
    }

    pub fn stream_name(&self) -> &str {
        self.stream_name.as_str()
    }

    pub fn shard_id(&self) -> &str {
        self.shard_id.as_str()
    }

    pub fn shard_iterator_type(&self) -> &ShardIteratorType {
        &self.shard_iterator_type
    }

    pub fn limit(&self) -> i32 {
        self.limit
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            stream_name: DEFAULT_STREAM_NAME.to_string(),
            shard_id: DEFAULT_SHARD_ID.to_string(),
            shard_iterator_type: ShardIteratorType::Latest,
            limit: DEFAULT_LIMIT,
            interval: Some(Duration::from_millis(DEFAULT_INTERVAL_MS)),
        }
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, Error> {
    match lookup(key) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .map_err(|_| Error::InvalidConfig(format!("{key} has an invalid value: {val}"))),
        None => Ok(default),
    }
}

// Positions that need a sequence number or timestamp are not supported.
fn parse_iterator_type(val: &str) -> Result<ShardIteratorType, Error> {
    match val.trim().to_ascii_uppercase().as_str() {
        "LATEST" => Ok(ShardIteratorType::Latest),
        "TRIM_HORIZON" => Ok(ShardIteratorType::TrimHorizon),
        _ => Err(Error::InvalidConfig(format!(
            "{ENV_ITERATOR_TYPE} must be LATEST or TRIM_HORIZON, got: {val}"
        ))),
    }
}
