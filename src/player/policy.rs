use rand::{Rng, seq::IndexedRandom};

/// Index played after `current` in a playlist of `len` tracks.
pub fn next_index<R: Rng + ?Sized>(len: usize, current: usize, shuffle: bool, rng: &mut R) -> usize {
    if len == 0 {
        return 0;
    }
    if shuffle {
        shuffle_index(len, current, rng)
    } else {
        (current + 1) % len
    }
}

/// Uniform pick among every index but `current`. A single-track playlist
/// has nothing else to offer and stays put.
pub fn shuffle_index<R: Rng + ?Sized>(len: usize, current: usize, rng: &mut R) -> usize {
    let candidates: Vec<usize> = (0..len).filter(|&i| i != current).collect();
    candidates.choose(rng).copied().unwrap_or(current)
}

pub fn previous_index(len: usize, current: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current == 0 { len - 1 } else { current - 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};
    use std::collections::HashSet;

    #[test]
    fn sequential_wraps_around() {
        let mut rng = SmallRng::seed_from_u64(1);
        for len in 1..8 {
            for current in 0..len {
                assert_eq!(next_index(len, current, false, &mut rng), (current + 1) % len);
            }
        }
    }

    #[test]
    fn shuffle_never_repeats_and_reaches_every_other_track() {
        let mut rng = SmallRng::seed_from_u64(7);
        let len = 5;
        for current in 0..len {
            let mut seen = HashSet::new();
            for _ in 0..500 {
                let next = next_index(len, current, true, &mut rng);
                assert_ne!(next, current);
                assert!(next < len);
                seen.insert(next);
            }
            assert_eq!(seen.len(), len - 1);
        }
    }

    #[test]
    fn shuffle_single_track_stays() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(next_index(1, 0, true, &mut rng), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        for len in 1..8 {
            for current in 0..len {
                assert_eq!(previous_index(len, current), (current + len - 1) % len);
            }
        }
    }
}
