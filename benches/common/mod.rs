//! Shared fixtures for the benchmarks.

use rand::prelude::*;

/// Letters weighted roughly like English text, so random words form
/// realistic anagram groups and ladders.
const LETTERS: &[u8] = b"eeeeaaaiiioootttnnsrhldcumpgbyw";

/// Generate `size` random lowercase words of 2-9 letters
pub fn create_words(size: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            let len = rng.gen_range(2..=9);
            (0..len)
                .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
                .collect()
        })
        .collect()
}
