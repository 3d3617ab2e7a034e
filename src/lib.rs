//! # WFR-Search
//!
//! **Exact string matching with the Weak Factor Recognizer over q-grams**
//!
//! > "A factor filter that never says no to a real factor. Misses jump, hits verify."
//!
//! ## Architecture
//!
//! - **Factor Filter**: fixed 2^12-word hashed bit table over every pattern
//!   substring of length 1..=16 (one-sided error: false positives only)
//! - **Window Scan**: right-to-left, one 7-byte gram per probe, jumping
//!   `m - Q + 1` positions on a filter miss, like a BOM matcher
//! - **Verification**: byte-exact compare of the full pattern, run only for
//!   windows the filter could not reject
//!
//! ## Performance
//!
//! | Operation | Time | Space |
//! |-----------|------|-------|
//! | Build | O(M) | **O(1)** (16 KiB table, any pattern) |
//! | Count | O(N/M) expected, O(NM) worst | O(1) |
//! | Contains | same as count | O(1) |
//!
//! ## Example
//!
//! ```
//! use wfr_search::{search, WfrMatcher};
//!
//! // One-shot
//! assert_eq!(search(b"GCAGAGAG", b"GCATCGCAGAGAGTATACAGTACG"), Ok(1));
//!
//! // Build once, scan many texts
//! let matcher = WfrMatcher::build(b"GATTACA").unwrap();
//! assert_eq!(matcher.count(b"GATTACAGATTACA"), 2);
//! assert!(matcher.contains(b"xxGATTACAxx"));
//!
//! // Patterns below the 7-byte gram width are not searchable
//! assert!(search(b"ABCDEF", b"ABCDEFABCDEF").is_err());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod filter;
pub mod qgram;
pub mod search;

pub use filter::FactorFilter;
pub use search::{search, PatternTooShort, WfrMatcher};

/// Version
pub const VERSION: &str = "0.1.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_search() {
        let matcher = WfrMatcher::build(b"GATTACA").unwrap();

        assert_eq!(matcher.count(b"GATTACAGATTACA"), 2);
        assert_eq!(matcher.count(b"xxxGATTACAxxx"), 1);
        assert_eq!(matcher.count(b"xxxxxxxxxxxxx"), 0);
    }

    #[test]
    fn test_one_shot() {
        assert_eq!(search(b"GCAGAGAG", b"GCATCGCAGAGAGTATACAGTACG"), Ok(1));
        assert_eq!(search(b"ZZZZZZZ", b"AAAAAAAAAAAAAA"), Ok(0));
    }

    #[test]
    fn test_short_pattern_sentinel() {
        assert_eq!(
            search(b"ABCDEF", b"ABCDEFABCDEF"),
            Err(PatternTooShort { len: 6 })
        );
    }

    #[test]
    fn test_full_text_match() {
        assert_eq!(search(b"exactmatch", b"exactmatch"), Ok(1));
    }
}
