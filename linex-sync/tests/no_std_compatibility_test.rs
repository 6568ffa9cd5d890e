//! Validates that linex-sync works through its public surface only.

use linex_sync::prelude::Mutex;

#[test]
fn test_mutex_operations() {
    let mutex = Mutex::new(42);

    {
        let mut lock = mutex.lock();
        assert_eq!(*lock, 42);
        *lock = 100;
    }

    let lock = mutex.lock();
    assert_eq!(*lock, 100);
}

#[test]
fn test_default_mutex() {
    let mutex: Mutex<Vec<u8>> = Mutex::default();
    mutex.lock().push(1);
    assert_eq!(mutex.into_inner(), vec![1]);
}
