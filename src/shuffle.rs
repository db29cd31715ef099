//! Fisher–Yates shuffling and letter scrambling.

use rand::Rng;

/// Shuffle `items` in place, every permutation equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Return a random rearrangement of the letters of `word`.
///
/// When the word has at least two distinct letters the result always
/// differs from the input. Words with a single distinct letter (or none)
/// have only one arrangement and are returned unchanged.
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let original: Vec<char> = word.chars().collect();
    let mut letters = original.clone();

    let has_other_arrangement = letters.iter().any(|&c| c != letters[0]);
    if !has_other_arrangement {
        return word.to_string();
    }

    loop {
        shuffle(&mut letters, rng);
        if letters != original {
            return letters.into_iter().collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..20).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_handles_short_slices() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut one = [42];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [42]);
    }

    #[test]
    fn scramble_returns_single_arrangement_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(scramble("aaa", &mut rng), "aaa");
        assert_eq!(scramble("z", &mut rng), "z");
        assert_eq!(scramble("", &mut rng), "");
    }

    #[test]
    fn scramble_two_letters_always_swaps() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(scramble("ab", &mut rng), "ba");
        }
    }
}
