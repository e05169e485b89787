//! First-occurrence deduplication

use std::collections::HashSet;

/// Drop repeated images, keeping the first occurrence and the original order.
///
/// Works on anything that exposes the image name as a string, so it dedupes
/// plain names and `CollectedImage` (origin attached) alike.
pub fn dedupe<T: AsRef<str>>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::new();
    for item in items {
        if seen.insert(item.as_ref().to_string()) {
            result.push(item);
        }
    }
    result
}
