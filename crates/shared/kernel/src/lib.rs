//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading and unambiguous id generation.
//!
//! ## ID generation
//! ```rust
//! # use otsav_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```

#[cfg(not(target_arch = "wasm32"))]
pub mod config;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const RECEIPT_PREFIX: &str = "REG-";
const RECEIPT_LEN: usize = 10;

pub use otsav_domain as domain;
pub use nanoid::nanoid;

/// Generates an unambiguous `NanoID` (no visually confusing characters).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}

/// Receipt number handed back for an accepted registration, e.g. `REG-7kQx2mPzaB`.
#[must_use]
pub fn receipt_id() -> String {
    format!("{RECEIPT_PREFIX}{}", safe_nanoid!(RECEIPT_LEN))
}
