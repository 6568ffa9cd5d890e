//! Integration tests for the linex-error crate.

use linex_error::{codes, kinds, Error, ErrorCategory, ErrorKind, ErrorSource, Result};

fn pop_empty() -> Result<u32> {
    Err(kinds::stack_underflow("BoundedStack is empty"))
}

fn propagate() -> Result<u32> {
    let value = pop_empty()?;
    Ok(value + 1)
}

#[test]
fn test_question_mark_propagation_keeps_code() {
    let err = propagate().unwrap_err();
    assert_eq!(err.code, codes::STACK_UNDERFLOW);
    assert_eq!(err.category, ErrorCategory::Empty);
    assert_eq!(err.message, "BoundedStack is empty");
}

#[test]
fn test_from_kind() {
    let err: Error = ErrorKind::InvalidPosition.into();
    assert_eq!(err, Error::INVALID_POSITION);
    assert_eq!(ErrorSource::code(&err), codes::INVALID_POSITION);
    assert_eq!(ErrorSource::category(&err), ErrorCategory::Bounds);
}

#[test]
fn test_codes_are_grouped_by_category() {
    for kind in [ErrorKind::CapacityExceeded, ErrorKind::StackOverflow, ErrorKind::QueueFull] {
        let err = kind.to_error();
        assert!(err.is_capacity_error());
        assert!((1000..2000).contains(&err.code));
    }
    for kind in [ErrorKind::EmptyStructure, ErrorKind::StackUnderflow, ErrorKind::QueueEmpty] {
        let err = kind.to_error();
        assert!(err.is_empty_error());
        assert!((2000..3000).contains(&err.code));
    }
}

#[test]
fn test_boxed_std_error() {
    let boxed: Box<dyn std::error::Error> = Box::new(Error::QUEUE_EMPTY);
    assert_eq!(boxed.to_string(), "[Empty][E07D2] Queue is empty");
}
