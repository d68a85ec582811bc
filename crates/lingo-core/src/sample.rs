use rand::Rng;
use rand::seq::SliceRandom;

/// Uniformly shuffle `items` and keep at most `count` of them.
///
/// Returns everything when there are fewer than `count` items. Which
/// elements survive is decided entirely by `rng`, so callers that need
/// determinism pass a seeded generator.
pub fn sample<T, R: Rng + ?Sized>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items.truncate(count);
    items
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn keeps_requested_count_when_supply_is_larger() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample((0..20).collect(), 5, &mut rng);

        assert_eq!(picked.len(), 5);
        for value in &picked {
            assert!((0..20).contains(value));
        }
    }

    #[test]
    fn returns_everything_when_supply_is_short() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut picked = sample(vec![1, 2, 3], 10, &mut rng);

        picked.sort_unstable();
        assert_eq!(picked, vec![1, 2, 3]);
    }

    #[test]
    fn never_duplicates_elements() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut picked = sample((0..50).collect::<Vec<i32>>(), 25, &mut rng);

        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 25);
    }
}
