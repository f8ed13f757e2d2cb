use async_trait::async_trait;
use aws_sdk_kinesis::{
    primitives::Blob,
    types::{Record, ShardIteratorType},
};
use kinesis_tailer::{
    tailer::{self, Tailer},
    types::{GetRecordsOutput, Shard},
    Error, KinesisClient,
};
use std::{
    collections::VecDeque,
    io,
    sync::{Arc, Mutex},
};
use tokio::time::{Duration, Instant};

pub const FIRST_ITERATOR: &str = "it0";

/// What the mocked `GetRecords` answers, in order.
#[derive(Debug, Clone)]
pub enum Reply {
    Records(Vec<&'static str>, Option<&'static str>),
    Fail(&'static str),
}

#[derive(Debug, Clone)]
pub struct IteratorRequest {
    pub stream_name: String,
    pub shard_id: String,
    pub shard_iterator_type: ShardIteratorType,
}

#[derive(Debug, Clone)]
pub struct RecordsRequest {
    pub iterator: Option<String>,
    pub limit: i32,
    pub at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct MockClient {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    fail_init: bool,
    iterator_requests: Arc<Mutex<Vec<IteratorRequest>>>,
    records_requests: Arc<Mutex<Vec<RecordsRequest>>>,
}

impl MockClient {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            ..Default::default()
        }
    }

    pub fn failing_init() -> Self {
        Self {
            fail_init: true,
            ..Default::default()
        }
    }

    pub fn iterator_requests(&self) -> Vec<IteratorRequest> {
        self.iterator_requests.lock().unwrap().clone()
    }

    pub fn records_requests(&self) -> Vec<RecordsRequest> {
        self.records_requests.lock().unwrap().clone()
    }

    pub fn iterators_used(&self) -> Vec<Option<String>> {
        self.records_requests()
            .into_iter()
            .map(|req| req.iterator)
            .collect()
    }
}

#[async_trait]
impl KinesisClient for MockClient {
    async fn get_shard_with_iterator(
        &self,
        stream_name: impl Into<String> + Send,
        shard: Shard,
        shard_iterator_type: ShardIteratorType,
    ) -> Result<Shard, Error> {
        self.iterator_requests.lock().unwrap().push(IteratorRequest {
            stream_name: stream_name.into(),
            shard_id: shard.id().to_string(),
            shard_iterator_type,
        });

        if self.fail_init {
            return Err(sdk_error("ResourceNotFoundException"));
        }

        Ok(shard.set_iterator(Some(FIRST_ITERATOR.into())))
    }

    async fn get_records(&self, shard: Shard, limit: i32) -> Result<GetRecordsOutput, Error> {
        self.records_requests.lock().unwrap().push(RecordsRequest {
            iterator: shard.iterator().map(|val| val.to_string()),
            limit,
            at: Instant::now(),
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Reply::Fail("ExpiredIteratorException"));

        match reply {
            Reply::Records(payloads, next) => Ok(GetRecordsOutput {
                shard: shard.set_iterator(next.map(|val| val.to_string())),
                records: payloads.into_iter().map(record).collect(),
                millis_behind_latest: Some(0),
            }),
            Reply::Fail(msg) => Err(sdk_error(msg)),
        }
    }
}

pub fn record(payload: &str) -> Record {
    Record::builder()
        .sequence_number("49590338271490256608559692538361571095921575989136588898")
        .partition_key("pk")
        .data(Blob::new(payload.as_bytes()))
        .build()
        .unwrap()
}

pub fn sdk_error(msg: &str) -> Error {
    Error::SdkError(Box::new(io::Error::new(io::ErrorKind::Other, msg.to_string())))
}

pub fn tailer_with(client: MockClient, interval: Option<Duration>) -> Tailer<MockClient, Vec<u8>> {
    tailer::builder()
        .client(client)
        .output(Vec::new())
        .interval(interval)
        .build()
        .unwrap()
}

pub fn printed(tailer: &Tailer<MockClient, Vec<u8>>) -> String {
    String::from_utf8(tailer.output().clone()).unwrap()
}
