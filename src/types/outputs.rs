use super::Shard;

use aws_sdk_kinesis::types::Record;

#[derive(Debug, Clone)]
pub struct GetRecordsOutput {
    /// The shard carrying the next shard iterator.
    pub shard: Shard,
    pub records: Vec<Record>,
    pub millis_behind_latest: Option<i64>,
}
