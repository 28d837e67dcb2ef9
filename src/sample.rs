//! Uniform selection of one element from a sequence

use crate::{bounded::BoundedRandom, rand::Random};

/// Picks one element uniformly, or `None` when `items` is empty. The element is returned by value.
pub fn sample<T: Clone>(random: &impl Random, items: &[T]) -> Option<T> {
    let last = items.len().checked_sub(1)?;
    let index = usize::random_in_range(random, 0, last).ok()?;
    items.get(index).cloned()
}

/// Adds [sample] to slices, vectors and arrays
pub trait RandomItem {
    type Item;

    fn random_item(&self, random: &impl Random) -> Option<Self::Item>;
}

impl<T: Clone> RandomItem for [T] {
    type Item = T;

    fn random_item(&self, random: &impl Random) -> Option<T> {
        sample(random, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        rand::{MockRandom, RandomImpl},
        test_helpers::rand::FakeRandom,
    };

    #[test]
    fn when_items_are_empty_then_sample_returns_none_without_drawing() {
        let mut random_mock = MockRandom::new();
        random_mock.expect_draw32().never();

        let result = sample::<u8>(&random_mock, &[]);

        assert_eq!(result, None);
    }

    #[test]
    fn when_single_item_then_sample_always_returns_it() {
        for _ in 0..100 {
            assert_eq!(sample(&RandomImpl, &["only"]), Some("only"));
        }
    }

    #[test]
    fn sample_returns_item_at_drawn_index() {
        /* Arrange */
        let items = vec!["hello".to_string(), "world".to_string(), "!".to_string()];
        let random = FakeRandom::default().with_random_sequence(vec![4, 6]);

        /* Act */
        let first = sample(&random, &items);
        let second = sample(&random, &items);

        /* Assert */
        assert_eq!(first.as_deref(), Some("world"));
        assert_eq!(second.as_deref(), Some("hello"));
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn random_item_works_on_vectors_arrays_and_sub_slices() {
        let items = vec![10, 20, 30, 40];
        let random = FakeRandom::default().with_random_sequence(vec![3, 1, 0]);

        assert_eq!(items.random_item(&random), Some(40));
        assert_eq!([1, 2].random_item(&random), Some(2));
        assert_eq!(items[2..].random_item(&random), Some(30));
        assert_eq!(items[..0].random_item(&random), None);
    }

    #[test]
    fn sample_eventually_returns_every_item() {
        let items = ["a", "b", "c", "d"];

        let mut seen: Vec<&str> = (0..1000)
            .filter_map(|_| sample(&RandomImpl, &items))
            .collect();
        seen.sort_unstable();
        seen.dedup();

        assert_eq!(seen, items);
    }
}
