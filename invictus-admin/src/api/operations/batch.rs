//! Batch planning for store commits.

use super::operation::Operation;

/// Hard ceiling on writes per atomic commit, imposed by the store.
pub const MAX_BATCH_WRITES: usize = 400;

/// An ordered set of pending writes, committed in bounded atomic chunks.
///
/// There is no rollback across chunks: if chunk N commits and chunk N+1
/// fails, the first N chunks stay durable.
#[derive(Debug, Default)]
pub struct Operations {
    pending: Vec<Operation>,
}

impl Operations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, operation: Operation) {
        self.pending.push(operation);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Chunks of at most [`MAX_BATCH_WRITES`] writes, in insertion order.
    pub fn batches(&self) -> std::slice::Chunks<'_, Operation> {
        self.pending.chunks(MAX_BATCH_WRITES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pending(count: usize) -> Operations {
        let mut operations = Operations::new();
        for index in 0..count {
            operations.push(Operation::set_merge(
                format!("leagues/l1/Members/member-{index}"),
                json!({ "scores": { "Total": 0.0 } }),
            ));
        }
        operations
    }

    #[test]
    fn test_900_writes_plan_as_400_400_100() {
        let operations = pending(900);
        let sizes: Vec<usize> = operations.batches().map(<[Operation]>::len).collect();
        assert_eq!(sizes, vec![400, 400, 100]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_partial() {
        let operations = pending(800);
        let sizes: Vec<usize> = operations.batches().map(<[Operation]>::len).collect();
        assert_eq!(sizes, vec![400, 400]);
    }

    #[test]
    fn test_small_run_is_one_partial_batch() {
        let operations = pending(7);
        let sizes: Vec<usize> = operations.batches().map(<[Operation]>::len).collect();
        assert_eq!(sizes, vec![7]);
    }

    #[test]
    fn test_empty_plan_has_no_batches() {
        assert_eq!(Operations::new().batches().count(), 0);
    }

    #[test]
    fn test_batches_preserve_insertion_order() {
        let operations = pending(401);
        let first_of_second = &operations.batches().nth(1).unwrap()[0];
        assert_eq!(first_of_second.path(), "leagues/l1/Members/member-400");
    }
}
