//! Fallible allocation for the fixed-size buffers created at start-up.
//!
//! Field and agent storage is sized once from the layout; if the allocator
//! refuses, the caller gets `SimError::Allocation` instead of an abort.

use crate::domain::error::SimError;

/// Allocate `len` copies of `value`, reporting failure instead of aborting.
pub fn try_filled<T: Clone>(what: &'static str, len: usize, value: T) -> Result<Vec<T>, SimError> {
    let mut v = try_with_capacity(what, len)?;
    v.resize(len, value);
    Ok(v)
}

/// Allocate an empty vector with exactly `len` slots reserved.
pub fn try_with_capacity<T>(what: &'static str, len: usize) -> Result<Vec<T>, SimError> {
    let mut v: Vec<T> = Vec::new();
    v.try_reserve_exact(len).map_err(|_| SimError::Allocation {
        what,
        bytes: len.saturating_mul(std::mem::size_of::<T>()),
    })?;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_has_requested_len() {
        let v = try_filled("test", 16, 0.5f32).unwrap();
        assert_eq!(v.len(), 16);
        assert!(v.iter().all(|&x| x == 0.5));
    }

    #[test]
    fn impossible_request_is_reported() {
        let err = try_with_capacity::<u64>("huge", usize::MAX / 2).unwrap_err();
        match err {
            SimError::Allocation { what, .. } => assert_eq!(what, "huge"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
