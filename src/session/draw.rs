//! Dealing and replenishing hands.
//!
//! Each hand draws from its own view of the 13 ranks: only the cards it
//! already holds are excluded. The opponent's cards are not, so both
//! hands can hold the same rank at once.

use crate::core::{Card, GameRng, Hand};

/// Draw up to `count` cards uniformly without replacement from the ranks
/// not in `excluded`.
///
/// Returns fewer cards only when fewer ranks remain.
pub fn draw_cards(rng: &mut GameRng, count: usize, excluded: &Hand) -> Hand {
    let mut pool: Vec<Card> = Card::ALL
        .into_iter()
        .filter(|card| !excluded.contains(*card))
        .collect();

    let mut drawn = Hand::new();
    for _ in 0..count.min(pool.len()) {
        let idx = rng.gen_range_usize(0..pool.len());
        drawn.push(pool.remove(idx));
    }
    drawn
}

/// Deal an opening hand of `size` distinct ranks.
pub fn deal_hand(rng: &mut GameRng, size: usize) -> Hand {
    draw_cards(rng, size, &Hand::new())
}

/// Refill `hand` with `count` fresh cards if it has shrunk to `refill_at`.
///
/// Returns true if cards were drawn.
pub fn replenish(rng: &mut GameRng, hand: &mut Hand, refill_at: usize, count: usize) -> bool {
    if hand.len() != refill_at {
        return false;
    }
    let drawn = draw_cards(rng, count, hand);
    for card in drawn.iter() {
        hand.push(card);
    }
    true
}
