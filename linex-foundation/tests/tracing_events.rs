// Tracing integration: structures emit events under a live subscriber
#![cfg(feature = "tracing")]

use linex_foundation::{ArrayQueue, FifoQueue, FixedArray, Result, SinglyLinkedList, Shared};

fn with_subscriber(f: impl FnOnce() -> Result<()>) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

#[test]
fn test_instrumented_operations_behave_identically() -> Result<()> {
    with_subscriber(|| {
        let mut array = FixedArray::<u8, 4>::from_slice(&[1, 2, 3])?;
        array.insert_at_index(1, 9)?;
        assert!(array.insert_at_end(4).is_err());
        assert_eq!(array.as_slice(), &[1, 9, 2, 3]);

        let mut list: SinglyLinkedList<u8> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.delete_at_position(3)?, 3);

        let shared = Shared::new(ArrayQueue::<u8, 2>::new());
        shared.with(|queue| queue.enqueue(5))?;
        assert_eq!(shared.with(|queue| queue.dequeue())?, 5);
        Ok(())
    })
}
