//! Print mode: one extracted URL per line on stdout.

/// Prints each URL on its own line, in the order given (already sorted by
/// the extractor). An empty list prints nothing.
pub fn run_print(urls: &[String]) {
    for url in urls {
        println!("{url}");
    }
}
