//! The rule tables shipped with the simulator.

use crate::cards::{Card, Rank};
use crate::features::{HandFeatures, evaluate_partial_hand};
use crate::game::{Decision, PeekPolicy, Street};
use crate::strategy::{Strategy, StreetView};

const ROYAL_RANKS: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Standard basic strategy for a player with no hidden information.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategy;

impl Strategy for BasicStrategy {
    fn decide(&self, view: &StreetView<'_>) -> Decision {
        let cards = view.known_cards();
        let features = evaluate_partial_hand(&cards);
        match view.street {
            Street::Third => basic_third(view, &features),
            Street::Fourth => basic_fourth(view, &features, &cards),
            Street::Fifth => basic_fifth(view, &features),
        }
    }
}

fn basic_third(view: &StreetView<'_>, f: &HandFeatures) -> Decision {
    let [first, second] = view.hole;
    let suited_six_five = first.suit().is_some()
        && first.suit() == second.suit()
        && matches!(
            (first.rank(), second.rank()),
            (Some(Rank::Five), Some(Rank::Six)) | (Some(Rank::Six), Some(Rank::Five))
        );

    if f.pair_rank.is_some() {
        view.bet(3.0)
    } else if f.total_points >= 2 || suited_six_five {
        view.bet(1.0)
    } else {
        Decision::Fold
    }
}

fn basic_fourth(view: &StreetView<'_>, f: &HandFeatures, cards: &[Card]) -> Decision {
    let royal_draw = f.is_flush_draw
        && cards
            .iter()
            .all(|card| card.rank().is_some_and(|rank| ROYAL_RANKS.contains(&rank)));
    let suited_run = f.is_straight_draw && f.is_flush_draw;

    let raise_big = f.is_made_hand
        || royal_draw
        || (suited_run && f.straight_gaps == Some(0) && f.min_straight_rank >= 5)
        || (suited_run && f.straight_gaps == Some(1) && f.num_high_cards >= 1)
        || (suited_run && f.straight_gaps == Some(2) && f.num_high_cards >= 2);
    if raise_big {
        return view.bet(3.0);
    }

    let raise_small = f.is_flush_draw
        || (f.pair_rank.is_some() && !f.is_made_hand)
        || f.total_points >= 3
        || (f.straight_gaps == Some(0) && f.min_straight_rank >= 4)
        || (f.straight_gaps == Some(1) && f.num_mid_cards >= 2);
    if raise_small {
        view.bet(1.0)
    } else {
        Decision::Fold
    }
}

fn basic_fifth(view: &StreetView<'_>, f: &HandFeatures) -> Decision {
    let raise_big = f.is_made_hand
        || f.is_flush_draw
        || (f.straight_gaps == Some(0) && f.num_mid_cards >= 3);
    if raise_big {
        return view.bet(3.0);
    }

    let raise_small = f.is_straight_draw
        || (f.pair_rank.is_some() && !f.is_made_hand)
        || f.total_points >= 4
        || (f.num_mid_cards >= 3 && view.previously_bet(3.0));
    if raise_small {
        view.bet(1.0)
    } else {
        Decision::Fold
    }
}

/// Advantage play for a player who can see the final community card
/// from 3rd street onward.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvantagePlayFifth;

impl Strategy for AdvantagePlayFifth {
    fn decide(&self, view: &StreetView<'_>) -> Decision {
        let mut cards = view.known_cards();
        cards.extend(view.peeked_card(Street::Fifth));
        let features = evaluate_partial_hand(&cards);
        match view.street {
            Street::Third => ap5_third(view, &features),
            Street::Fourth => ap5_fourth(view, &features),
            Street::Fifth if features.is_made_hand => view.bet(3.0),
            Street::Fifth => Decision::Fold,
        }
    }

    fn peek_policy(&self) -> PeekPolicy {
        PeekPolicy {
            fifth: true,
            ..PeekPolicy::NONE
        }
    }
}

fn ap5_third(view: &StreetView<'_>, f: &HandFeatures) -> Decision {
    let suited_run = f.is_straight_draw && f.is_flush_draw;
    let gaps = f.straight_gaps;

    let raise_big = f.is_made_hand
        || (suited_run && gaps == Some(0) && f.min_straight_rank >= 5)
        || (suited_run && gaps == Some(1) && f.num_high_cards >= 1)
        || (suited_run && gaps == Some(2) && f.num_high_cards >= 2);
    if raise_big {
        return view.bet(3.0);
    }

    let raise_small = (f.pair_rank.is_some() && !f.is_made_hand)
        || (suited_run && gaps == Some(0))
        || (suited_run && gaps == Some(1))
        || (suited_run && gaps == Some(2))
        || (matches!(gaps, Some(0) | Some(1)) && f.min_straight_rank >= 3)
        || (gaps == Some(2) && f.contains_8_or_higher)
        || f.num_high_cards >= 2
        || (f.num_high_cards >= 1 && f.num_mid_cards >= 1)
        || (f.is_flush_draw && f.num_high_cards >= 1);
    if raise_small {
        view.bet(1.0)
    } else {
        Decision::Fold
    }
}

fn ap5_fourth(view: &StreetView<'_>, f: &HandFeatures) -> Decision {
    let raise_big = f.is_made_hand
        || f.is_flush_draw
        || (f.straight_gaps == Some(0) && f.min_straight_rank >= 5);
    if raise_big {
        return view.bet(3.0);
    }

    let raise_small = f.straight_gaps == Some(0)
        || f.straight_gaps == Some(1)
        || f.num_high_cards >= 2
        || (f.num_high_cards >= 1 && f.num_mid_cards >= 3)
        || (f.pair_rank.is_some() && !f.is_made_hand);
    if raise_small {
        view.bet(1.0)
    } else {
        Decision::Fold
    }
}
