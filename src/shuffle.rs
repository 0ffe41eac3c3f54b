//! Answer-option shuffling.

use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a new vector holding the same elements as `items` in a uniformly
/// random permutation. The input is left untouched.
///
/// The RNG is threaded in explicitly so callers can seed it in tests.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn preserves_length_and_multiset() {
        let input = vec!["a", "b", "c", "c", "d"];
        let mut output = shuffled(&input, &mut rng());
        assert_eq!(output.len(), input.len());
        output.sort_unstable();
        let mut sorted_input = input.clone();
        sorted_input.sort_unstable();
        assert_eq!(output, sorted_input);
    }

    #[test]
    fn does_not_mutate_input() {
        let input = vec![1, 2, 3, 4, 5];
        let snapshot = input.clone();
        let _ = shuffled(&input, &mut rng());
        assert_eq!(input, snapshot);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let input: Vec<u8> = Vec::new();
        assert!(shuffled(&input, &mut rng()).is_empty());
    }

    #[test]
    fn singleton_input_is_identity() {
        let input = vec!["only"];
        assert_eq!(shuffled(&input, &mut rng()), input);
    }

    #[test]
    fn eventually_produces_a_different_order() {
        // With 6 elements and many attempts, at least one permutation must
        // differ from the input order unless the shuffle is broken.
        let input: Vec<u32> = (0..6).collect();
        let mut rng = rng();
        let moved = (0..100).any(|_| shuffled(&input, &mut rng) != input);
        assert!(moved);
    }
}
