mod outputs;
mod shard;

pub use outputs::GetRecordsOutput;
pub use shard::Shard;
