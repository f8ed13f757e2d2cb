/// One shard of a stream together with the iterator to read it from.
///
/// The iterator is replaced after every `GetRecords` call. `None` means the service has
/// not handed one out yet, or the shard was closed and there is nothing left to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shard {
    id: String,
    iterator: Option<String>,
}

impl Shard {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            iterator: None,
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn iterator(&self) -> Option<&str> {
        self.iterator.as_deref()
    }

    pub fn set_iterator(self, iterator: Option<String>) -> Self {
        Self { iterator, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_shard_has_no_iterator() {
        let shard = Shard::new("shardId-000000000000");
        assert_eq!(shard.id(), "shardId-000000000000");
        assert!(shard.iterator().is_none());
    }

    #[test]
    fn set_iterator_replaces_the_previous_one() {
        let shard = Shard::new("0")
            .set_iterator(Some("it1".into()))
            .set_iterator(Some("it2".into()));
        assert_eq!(shard.iterator(), Some("it2"));

        let shard = shard.set_iterator(None);
        assert!(shard.iterator().is_none());
        assert_eq!(shard.id(), "0");
    }
}
