// Integration tests for the linear structures
// Exercises each structure through the public prelude only

use linex_foundation::prelude::*;

#[test]
fn test_fixed_array_edit_session() -> Result<()> {
    let mut array = FixedArray::<i32, 6>::from_slice(&[10, 20, 30, 40, 50])?;

    assert_eq!(array.insert_at_index(2, 25)?, 2);
    assert_eq!(array.as_slice(), &[10, 20, 25, 30, 40, 50]);
    assert!(array.is_full());

    // Full is checked before the index
    assert_eq!(array.insert_at_index(99, 1), Err(Error::CAPACITY_EXCEEDED));

    assert_eq!(array.delete_by_value(&25)?, 2);
    assert_eq!(array.delete_at_beginning()?, 0);
    assert_eq!(array.delete_at_end()?, 3);
    assert_eq!(array.as_slice(), &[20, 30, 40]);

    assert_eq!(array.update_value(1, 35)?, 1);
    assert_eq!(array.get(1), Some(&35));
    assert_eq!(array.delete_by_value(&99), Err(Error::VALUE_NOT_FOUND));
    Ok(())
}

#[test]
fn test_fixed_array_from_oversized_slice() {
    let result = FixedArray::<u8, 2>::from_slice(&[1, 2, 3]);
    assert_eq!(result.err().map(|e| e.category), Some(ErrorCategory::Validation));
}

#[test]
fn test_linked_list_edit_session() -> Result<()> {
    let mut list = SinglyLinkedList::new();
    list.insert_at_beginning(10);
    list.insert_at_beginning(5);
    list.insert_at_last(20);
    list.insert_at_position(3, 15)?;

    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, [5, 10, 15, 20]);

    assert_eq!(list.delete_at_position(2)?, 10);
    assert_eq!(list.delete_at_last()?, 20);
    assert_eq!(list.delete_at_beginning()?, 5);
    assert_eq!(list.front(), Some(&15));
    assert_eq!(list.back(), Some(&15));

    assert_eq!(list.insert_at_position(0, 1), Err(Error::INVALID_POSITION));
    assert_eq!(list.delete_at_position(2), Err(Error::INVALID_POSITION));
    Ok(())
}

#[test]
fn test_linked_list_holds_non_copy_values() -> Result<()> {
    let mut list: SinglyLinkedList<String> = SinglyLinkedList::new();
    list.insert_at_last("b".to_string());
    list.insert_at_beginning("a".to_string());
    assert_eq!(list.delete_at_last()?, "b");
    assert_eq!(list.len(), 1);
    Ok(())
}

#[test]
fn test_queues_through_trait_object() -> Result<()> {
    let mut buffer = ArrayQueue::<i32, 4>::new();
    let mut chain = LinkedQueue::new();
    let queues: [&mut dyn FifoQueue<i32>; 2] = [&mut buffer, &mut chain];

    for queue in queues {
        queue.enqueue(1)?;
        queue.enqueue(2)?;
        assert_eq!(queue.dequeue()?, 1);
        queue.enqueue(3)?;
        assert_eq!(queue.front()?, &2);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue()?, 2);
        assert_eq!(queue.dequeue()?, 3);
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(Error::QUEUE_EMPTY));
    }
    Ok(())
}

#[test]
fn test_stack_lifo() -> Result<()> {
    let mut stack = BoundedStack::<u32, 3>::new();
    stack.push(1)?;
    stack.push(2)?;
    stack.push(3)?;
    assert_eq!(stack.push(4), Err(Error::STACK_OVERFLOW));

    assert_eq!(stack.pop()?, 3);
    assert_eq!(stack.pop()?, 2);
    assert_eq!(stack.pop()?, 1);
    assert_eq!(stack.top_index(), None);

    let error = stack.pop().err();
    assert_eq!(error.and_then(|e| e.kind()), Some(ErrorKind::StackUnderflow));
    Ok(())
}

#[test]
fn test_default_aliases() -> Result<()> {
    let mut array = linex_foundation::DefaultFixedArray::<u16>::default();
    array.insert_at_end(7)?;
    let mut queue = linex_foundation::DefaultArrayQueue::<u16>::default();
    queue.enqueue(8)?;
    let mut stack = linex_foundation::DefaultStack::<u16>::default();
    stack.push(9)?;

    assert_eq!(array.len() + queue.len() + stack.len(), 3);
    Ok(())
}
