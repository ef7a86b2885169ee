//! Set validity.
//!
//! Three cards form a set when, for each attribute independently, the
//! three values are either all equal or pairwise distinct. "Exactly two
//! equal" on any attribute disqualifies the trio.
//!
//! Given any two cards the third card of their set is fully determined,
//! which `complete_set` exploits to find sets in O(n²) instead of O(n³).

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardId, CardTraits, Color, Count, Fill, Shape, VALUES_PER_ATTRIBUTE};

/// Check one attribute across three cards.
#[inline]
#[must_use]
pub fn all_same_or_all_different<T: PartialEq>(a: T, b: T, c: T) -> bool {
    let all_same = a == b && b == c;
    let all_different = a != b && b != c && a != c;
    all_same || all_different
}

/// Check whether three cards form a set.
///
/// ```
/// use set_engine::cards::{Card, CardId, CardTraits, Color, Count, Fill, Shape};
/// use set_engine::rules::is_set;
///
/// let card = |id, shape, count| Card::new(CardId::new(id), CardTraits {
///     shape,
///     color: Color::Red,
///     fill: Fill::Solid,
///     count,
/// });
///
/// let a = card(0, Shape::Diamond, Count::One);
/// let b = card(1, Shape::Oval, Count::Two);
/// let c = card(2, Shape::Squiggle, Count::Three);
/// assert!(is_set(&a, &b, &c));
///
/// let d = card(3, Shape::Squiggle, Count::Two);
/// assert!(!is_set(&a, &b, &d));
/// ```
#[must_use]
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    all_same_or_all_different(a.shape, b.shape, c.shape)
        && all_same_or_all_different(a.color, b.color, c.color)
        && all_same_or_all_different(a.fill, b.fill, c.fill)
        && all_same_or_all_different(a.count, b.count, c.count)
}

/// Check a slice of cards; anything other than exactly three is not a set.
#[must_use]
pub fn is_set_slice(cards: &[Card]) -> bool {
    match cards {
        [a, b, c] => is_set(a, b, c),
        _ => false,
    }
}

fn third_value<T: Copy + PartialEq>(a: T, b: T, domain: &[T; VALUES_PER_ATTRIBUTE]) -> T {
    if a == b {
        return a;
    }
    domain.iter().copied().find(|v| *v != a && *v != b).unwrap_or(a)
}

/// The traits of the unique card completing a set with `a` and `b`.
///
/// `colors` is the palette in play; the colour of the third card is
/// picked from it.
#[must_use]
pub fn complete_set(
    a: &CardTraits,
    b: &CardTraits,
    colors: &[Color; VALUES_PER_ATTRIBUTE],
) -> CardTraits {
    CardTraits {
        shape: third_value(a.shape, b.shape, &Shape::ALL),
        color: third_value(a.color, b.color, colors),
        fill: third_value(a.fill, b.fill, &Fill::ALL),
        count: third_value(a.count, b.count, &Count::ALL),
    }
}

/// Find a set among `cards`.
///
/// Returns the ids in table order, choosing the set whose first two cards
/// come earliest. `None` when the cards contain no set.
#[must_use]
pub fn find_set(cards: &[Card], colors: &[Color; VALUES_PER_ATTRIBUTE]) -> Option<[CardId; 3]> {
    let positions: FxHashMap<CardTraits, usize> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| (card.traits(), i))
        .collect();

    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let wanted = complete_set(&cards[i].traits(), &cards[j].traits(), colors);
            if let Some(&k) = positions.get(&wanted) {
                if k > j {
                    return Some([cards[i].id, cards[j].id, cards[k].id]);
                }
            }
        }
    }

    None
}

/// Count every set among `cards`.
#[must_use]
pub fn count_sets(cards: &[Card], colors: &[Color; VALUES_PER_ATTRIBUTE]) -> usize {
    let positions: FxHashMap<CardTraits, usize> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| (card.traits(), i))
        .collect();

    let mut found = 0;
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let wanted = complete_set(&cards[i].traits(), &cards[j].traits(), colors);
            if positions.get(&wanted).is_some_and(|&k| k > j) {
                found += 1;
            }
        }
    }
    found
}
