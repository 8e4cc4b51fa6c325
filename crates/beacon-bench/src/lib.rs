//! Shared helpers for Beacon benchmarks.

/// Build a mixed corpus of raw channel names across all tiers.
#[must_use]
pub fn channel_corpus(size: usize) -> Vec<String> {
    (0..size)
        .map(|i| match i % 4 {
            0 => format!("news-{i}"),
            1 => format!("private-room{i}"),
            2 => format!("presence-lobby{i}"),
            _ => format!("private-encrypted-vault{i}"),
        })
        .collect()
}
