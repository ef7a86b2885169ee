//! Property tests for the model invariants.
//!
//! Random interaction sequences are replayed through the controller and
//! the table partition is checked after every step.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use set_engine::cards::{full_deck, Card, CardId, Count, Fill, Shape};
use set_engine::controller::GameController;
use set_engine::core::{SetConfig, CLASSIC_COLORS};
use set_engine::game::GameModel;
use set_engine::rules::is_set;

#[derive(Clone, Debug)]
enum Op {
    /// Tap the visible card at this index (modulo the table size).
    Tap(usize),
    MoreCards,
    Shuffle,
    Hint,
    NewGame,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0usize..81).prop_map(Op::Tap),
        2 => Just(Op::MoreCards),
        1 => Just(Op::Shuffle),
        2 => Just(Op::Hint),
        1 => Just(Op::NewGame),
    ]
}

fn any_config() -> impl Strategy<Value = SetConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(auto, shuffled)| {
        let mut config = SetConfig::new();
        if auto {
            config = config.auto_refill();
        }
        if shuffled {
            config = config.shuffled_deal();
        }
        config
    })
}

fn check_invariants(model: &GameModel) -> Result<(), TestCaseError> {
    let unmatched = model.unmatched_cards();
    let matched = model.matched_cards();

    prop_assert_eq!(unmatched.len() + matched.len(), 81);
    prop_assert!(model.visible_count() <= unmatched.len());
    prop_assert_eq!(model.deck_count() + model.visible_count(), unmatched.len());
    prop_assert_eq!(model.visible_cards().len(), model.visible_count());

    let ids: FxHashSet<CardId> = unmatched.iter().chain(matched.iter()).map(|c| c.id).collect();
    prop_assert_eq!(ids.len(), 81);

    let traits: FxHashSet<_> = unmatched.iter().chain(matched.iter()).map(Card::traits).collect();
    prop_assert_eq!(traits.len(), 81);

    prop_assert!(model.selection().len() <= 3);
    for id in model.selection().iter() {
        prop_assert!(model.table().contains(id));
    }
    Ok(())
}

/// Attribute index 0-2 of each attribute, as a base-3 digit.
fn digits(card: &Card) -> [usize; 4] {
    let shape = Shape::ALL.iter().position(|&s| s == card.shape).unwrap_or(0);
    let color = CLASSIC_COLORS.iter().position(|&c| c == card.color).unwrap_or(0);
    let fill = Fill::ALL.iter().position(|&f| f == card.fill).unwrap_or(0);
    let count = Count::ALL.iter().position(|&n| n == card.count).unwrap_or(0);
    [shape, color, fill, count]
}

proptest! {
    /// Any interaction sequence preserves the table partition and the
    /// selection bounds.
    #[test]
    fn prop_interactions_preserve_invariants(
        config in any_config(),
        seed in any::<u64>(),
        ops in prop::collection::vec(op(), 1..120),
    ) {
        let mut controller = GameController::new(GameModel::with_seed(config, seed));
        controller.start_new_game();
        check_invariants(controller.model())?;

        for op in ops {
            match op {
                Op::Tap(index) => {
                    let visible = controller.visible_cards();
                    if !visible.is_empty() {
                        let id = visible[index % visible.len()].id;
                        controller.handle_card_tap(id);
                    }
                }
                Op::MoreCards => controller.request_more_cards(),
                Op::Shuffle => controller.shuffle_visible_cards(),
                Op::Hint => {
                    if let Some(set) = controller.hint() {
                        for id in set {
                            controller.handle_card_tap(id);
                        }
                    }
                }
                Op::NewGame => controller.start_new_game(),
            }
            check_invariants(controller.model())?;
        }
    }

    /// Shuffling the table only reorders the face-up cards.
    #[test]
    fn prop_shuffle_only_reorders_table(
        seed in any::<u64>(),
        draws in 0usize..25,
    ) {
        let mut model = GameModel::with_seed(SetConfig::default(), seed);
        model.reveal_initial_cards();
        for _ in 0..draws {
            model.draw_more();
        }

        let mut visible_before: Vec<CardId> = model.visible_cards().iter().map(|c| c.id).collect();
        let deck_before = model.deck_cards();
        let matched_before = model.matched_cards().clone();

        model.shuffle_visible_portion();

        let mut visible_after: Vec<CardId> = model.visible_cards().iter().map(|c| c.id).collect();
        visible_before.sort_unstable();
        visible_after.sort_unstable();
        prop_assert_eq!(visible_before, visible_after);
        prop_assert_eq!(model.deck_cards(), deck_before);
        prop_assert_eq!(model.matched_cards(), &matched_before);
    }

    /// The attribute rule agrees with the base-3 characterisation: three
    /// cards form a set exactly when every attribute digit sums to 0 mod 3.
    #[test]
    fn prop_is_set_matches_digit_sum(
        a in 0usize..81,
        b in 0usize..81,
        c in 0usize..81,
    ) {
        prop_assume!(a != b && b != c && a != c);
        let deck = full_deck(&CLASSIC_COLORS, 0);
        let (da, db, dc) = (digits(&deck[a]), digits(&deck[b]), digits(&deck[c]));

        let by_sum = (0..4).all(|i| (da[i] + db[i] + dc[i]) % 3 == 0);
        prop_assert_eq!(is_set(&deck[a], &deck[b], &deck[c]), by_sum);
    }

    /// Drawing never reveals more cards than remain.
    #[test]
    fn prop_draw_more_is_clamped(draws in 0usize..40) {
        let mut model = GameModel::with_seed(SetConfig::default(), 0);
        for _ in 0..draws {
            model.draw_more();
            prop_assert!(model.visible_count() <= model.unmatched_cards().len());
        }
        prop_assert_eq!(model.visible_count(), (draws * 3).min(81));
    }
}
