use crate::model::{Color, DotState, Item, ItemId, Size};
use rand::Rng;

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, options: &[T]) -> T {
    options[rng.random_range(0..options.len())]
}

/// Generates `count` items with ids `0..count` and independently drawn attributes.
pub fn generate<R: Rng + ?Sized>(count: ItemId, rng: &mut R) -> Vec<Item> {
    (0..count)
        .map(|id| Item {
            id,
            color: pick(rng, &Color::ALL),
            size: pick(rng, &Size::ALL),
            dot: pick(rng, &DotState::ALL),
        })
        .collect()
}
