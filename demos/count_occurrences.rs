//! WFR Occurrence-Counting Example
//!
//! Demonstrates building the factor filter once and counting across texts.
//!
//! ```bash
//! cargo run --example count_occurrences
//! ```

use wfr_search::{search, WfrMatcher, VERSION};

fn main() {
    println!("=== WFR-Search Demo (v{}) ===\n", VERSION);

    let text = b"the quick brown fox jumps over the lazy dog. \
                 the fox was quick and the dog was lazy. \
                 a quick brown dog outfoxed a lazy fox.";

    println!("Text ({} bytes):", text.len());
    println!("  \"{}\"", std::str::from_utf8(text).unwrap());

    println!("\n--- Search Results ---\n");

    let queries = ["the quick", "lazy dog", "quick brown", "was lazy", "red panda"];

    for query in &queries {
        match search(query.as_bytes(), text) {
            Ok(0) => println!("  \"{}\" -> not found", query),
            Ok(count) => println!("  \"{}\" -> {} occurrences", query, count),
            Err(e) => println!("  \"{}\" -> {}", query, e),
        }
    }

    // Patterns below the gram width are rejected, not mis-searched
    println!("\n--- Short Pattern ---\n");
    match search(b"fox", text) {
        Ok(count) => println!("  \"fox\" -> {} occurrences", count),
        Err(e) => println!("  \"fox\" -> {}", e),
    }

    // Build once, count across many texts
    println!("\n--- Reusable Matcher ---\n");
    let matcher = WfrMatcher::build(b"lazy fox").unwrap();
    println!("  filter footprint: {} bytes (fixed)", matcher.size_bytes());
    println!(
        "  window width: {} of {} pattern bytes",
        matcher.effective_len(),
        matcher.pattern_len()
    );

    let other = b"a lazy fox naps; a lazy fox dreams";
    println!("  count in text A: {}", matcher.count(text));
    println!("  count in text B: {}", matcher.count(other));
}
