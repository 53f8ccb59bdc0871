//! Zero-Cost Safety Macros
//!
//! Hot loops (blur kernel, deposit scatter) index channel slices with
//! coordinates that were already clamped into the field. In debug builds
//! those accesses stay bounds-checked; release builds skip the check.
//!
//! Usage:
//! ```rust
//! use slime_engine::fast;
//!
//! let width = 4usize;
//! let channel = vec![0.0f32, 0.25, 0.5, 0.75, 1.0, 0.0, 0.0, 0.0];
//! // Read: fast!(slice, [index])
//! let v = *fast!(channel, [1 * width + 0]);
//! assert_eq!(v, 1.0);
//!
//! let mut next = vec![0.0f32; 8];
//! // Write: fast!(slice, [index] = value)
//! fast!(next, [3] = 0.9);
//! assert_eq!(next[3], 0.9);
//! ```

/// Bounds-checked in debug, `get_unchecked` in release.
///
/// Only for crate-internal loops whose indices come from clamped
/// coordinates of the slice owner; debug builds enforce this with a panic.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
