//! Weak Factor Recognizer search
//!
//! **Architecture**:
//! - FactorFilter: hashed bit table over pattern factors (one-sided error)
//! - Window scan: right to left, one q-gram at a time, BOM-style jumps
//! - Verification: byte-exact compare only when a whole window weakly matched
//!
//! **Core loop**: probe the filter with the hash of the scanned window
//! suffix. A hit retreats the scan by one gram and folds the next gram into
//! the hash; a miss jumps the window right by `m - Q + 1`. Expected cost is
//! sublinear: most windows die on the first probe.

extern crate alloc;
use alloc::vec::Vec;

use log::{debug, trace};
use thiserror::Error;

use crate::filter::FactorFilter;
use crate::qgram::{gram_hash, GRAM_BITS, Q};

/// Pattern shorter than one q-gram. WFR cannot index it; callers must fall
/// back to a different algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pattern length {len} is below the q-gram width {q}", q = Q)]
pub struct PatternTooShort {
    /// Rejected pattern length.
    pub len: usize,
}

/// WFR matcher (factor filter + window scanner)
///
/// Built once per pattern, reusable across any number of texts.
/// Counting never misses an occurrence: the filter only errs toward
/// claiming membership, and every surviving window is verified byte by byte.
#[derive(Debug)]
pub struct WfrMatcher {
    /// Full original pattern, compared during verification.
    pattern: Vec<u8>,
    /// Pattern length truncated down to a multiple of Q; window width.
    m: usize,
    /// Factor membership filter over the truncated pattern.
    filter: FactorFilter,
}

impl WfrMatcher {
    /// Build the matcher from a pattern (preprocessing phase).
    ///
    /// The filter is populated over the pattern truncated to the nearest
    /// multiple of Q below its length; the original bytes are kept for
    /// verification.
    ///
    /// # Example
    /// ```
    /// use wfr_search::WfrMatcher;
    ///
    /// let matcher = WfrMatcher::build(b"GCAGAGAG").unwrap();
    /// assert_eq!(matcher.count(b"GCATCGCAGAGAGTATACAGTACG"), 1);
    /// ```
    pub fn build(pattern: &[u8]) -> Result<Self, PatternTooShort> {
        let plen = pattern.len();
        if plen < Q {
            return Err(PatternTooShort { len: plen });
        }

        let m = plen - plen % Q;
        let filter = FactorFilter::from_pattern(&pattern[..m]);
        debug!("factor filter built over {m} of {plen} pattern bytes");

        Ok(Self {
            pattern: pattern.to_vec(),
            m,
            filter,
        })
    }

    /// Count occurrences of the pattern in `text` (searching phase).
    ///
    /// Exact count over the full original pattern, overlaps included.
    ///
    /// # Example
    /// ```
    /// use wfr_search::WfrMatcher;
    ///
    /// let matcher = WfrMatcher::build(b"AAAAAAA").unwrap();
    /// assert_eq!(matcher.count(b"AAAAAAAA"), 2); // overlapping
    /// ```
    pub fn count(&self, text: &[u8]) -> usize {
        let n = text.len();
        let m = self.m;
        let plen = self.pattern.len();
        let mq = m - Q + 1;

        let mut count = 0;
        let mut j = m - 1;
        while j < n {
            let mut h = gram_hash(text, j);
            let i = j + Q - m;

            let mut test = self.filter.contains(h);
            while test && j > i + Q - 1 {
                j -= Q;
                h = (h << GRAM_BITS).wrapping_add(gram_hash(text, j));
                test = self.filter.contains(h);
            }

            if j == i && test {
                let start = i - (Q - 1);
                if start + plen <= n && text[start..start + plen] == self.pattern[..] {
                    count += 1;
                }
            }

            j += mq;
        }

        trace!("scanned {n} bytes, {count} occurrences");
        count
    }

    /// True when the pattern occurs in `text` at least once.
    #[inline]
    pub fn contains(&self, text: &[u8]) -> bool {
        self.count(text) != 0
    }

    /// Original pattern length.
    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Truncated length the window scan operates on (multiple of Q).
    #[inline]
    pub fn effective_len(&self) -> usize {
        self.m
    }

    /// Filter footprint in bytes. Fixed, whatever the pattern length.
    pub fn size_bytes(&self) -> usize {
        self.filter.size_bytes()
    }
}

/// One-shot search: build the filter, scan, discard.
///
/// Use [`WfrMatcher`] directly to amortize preprocessing across texts.
///
/// # Example
/// ```
/// use wfr_search::search;
///
/// assert_eq!(search(b"ZZZZZZZ", b"AAAAAAAAAAAAAA"), Ok(0));
/// assert!(search(b"ABCDEF", b"whatever").is_err());
/// ```
pub fn search(pattern: &[u8], text: &[u8]) -> Result<usize, PatternTooShort> {
    Ok(WfrMatcher::build(pattern)?.count(text))
}
