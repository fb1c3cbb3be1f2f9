use rand::SeedableRng;
use rand::rngs::StdRng;

use msstud_sim::cards::{Card, parse_cards};
use msstud_sim::game::{Decision, PeekPolicy, Street};
use msstud_sim::payout::{Outcome, Payout};
use msstud_sim::playbook::BasicStrategy;
use msstud_sim::round::RoundPhase;
use msstud_sim::shoe::Shoe;
use msstud_sim::{RoundConfig, SimError, StreetView, simulate_round};

fn config(ante: f64) -> RoundConfig {
    RoundConfig {
        ante,
        ..RoundConfig::default()
    }
}

fn stacked(notation: &str) -> Shoe {
    Shoe::stacked(&parse_cards(notation).expect("valid notation"))
}

#[test]
fn folding_on_third_loses_the_ante() {
    let mut shoe = stacked("Ah Kd 2c 3d 4h");
    let fold = |_: &StreetView<'_>| Decision::Fold;
    let result = simulate_round(&mut shoe, &fold, &config(5.0)).expect("round plays");

    assert_eq!(result.profit, -5.0);
    assert_eq!(result.phase, RoundPhase::Folded(Street::Third));
    assert_eq!(result.decisions, vec![Decision::Fold]);
    assert!(result.outcome.is_none());
}

#[test]
fn folding_late_forfeits_every_earlier_bet() {
    let mut shoe = stacked("Ah Kd 2c 3d 4h");
    let strategy = |view: &StreetView<'_>| match view.street {
        Street::Third => view.bet(1.0),
        Street::Fourth => view.bet(3.0),
        Street::Fifth => Decision::Fold,
    };
    let result = simulate_round(&mut shoe, &strategy, &config(5.0)).expect("round plays");

    assert_eq!(result.profit, -(5.0 + 5.0 + 15.0));
    assert_eq!(result.total_bet, 25.0);
    assert!(result.folded());
}

#[test]
fn royal_flush_pays_five_hundred_to_one() {
    let mut shoe = stacked("As Ks Qs Js 10s");
    let strategy = |view: &StreetView<'_>| view.bet(1.0);
    let result = simulate_round(&mut shoe, &strategy, &config(5.0)).expect("round plays");

    assert_eq!(result.outcome, Some(Outcome::RoyalFlush));
    assert_eq!(result.total_bet, 20.0);
    assert_eq!(result.profit, 500.0 * 20.0);
    assert_eq!(result.phase, RoundPhase::Resolved);
}

#[test]
fn mid_pair_pushes() {
    let mut shoe = stacked("7h 7s 2c 9d Kh");
    let strategy = |view: &StreetView<'_>| view.bet(3.0);
    let result = simulate_round(&mut shoe, &strategy, &config(5.0)).expect("round plays");

    assert_eq!(result.outcome, Some(Outcome::SixesThroughTens));
    assert_eq!(result.total_bet, 50.0);
    assert_eq!(result.profit, 0.0);
}

#[test]
fn any_positive_multiple_is_accepted() {
    let mut shoe = stacked("2c 3d 8h 9s Kc");
    let strategy = |view: &StreetView<'_>| view.bet(2.0);
    let result = simulate_round(&mut shoe, &strategy, &config(1.0)).expect("round plays");

    assert_eq!(result.outcome, Some(Outcome::Loss));
    assert_eq!(result.profit, -7.0);
}

#[test]
fn non_positive_bets_fail_fast() {
    let mut shoe = stacked("2c 3d 8h 9s Kc");
    let zero = |_: &StreetView<'_>| Decision::Bet(0.0);
    assert_eq!(
        simulate_round(&mut shoe, &zero, &config(1.0)),
        Err(SimError::InvalidBet {
            street: Street::Third,
            amount: 0.0
        })
    );

    let mut shoe = stacked("2c 3d 8h 9s Kc");
    let nan = |view: &StreetView<'_>| match view.street {
        Street::Third => view.bet(1.0),
        _ => Decision::Bet(f64::NAN),
    };
    let err = simulate_round(&mut shoe, &nan, &config(1.0)).unwrap_err();
    assert!(matches!(
        err,
        SimError::InvalidBet {
            street: Street::Fourth,
            ..
        }
    ));
}

#[test]
fn community_cards_are_revealed_one_per_street() {
    let dealt: Vec<Card> = parse_cards("2c 3d 8h 9s Kc").expect("valid notation");
    let expected = dealt.clone();
    let mut shoe = Shoe::stacked(&dealt);
    let strategy = move |view: &StreetView<'_>| {
        assert_eq!(view.hole, &[expected[0], expected[1]]);
        let shown = view.street.community_index();
        assert_eq!(view.revealed, &expected[2..2 + shown]);
        assert_eq!(view.history.len(), shown);
        assert_eq!(view.current_total, 1.0 + shown as f64);
        assert_eq!(view.peeked, &[None; 3]);
        view.bet(1.0)
    };
    simulate_round(&mut shoe, &strategy, &config(1.0)).expect("round plays");
}

#[test]
fn peek_policy_exposes_the_flagged_card_until_it_turns() {
    let dealt: Vec<Card> = parse_cards("2c 3d 8h 9s Kc").expect("valid notation");
    let river = dealt[4];
    let flop = dealt[2];
    let mut shoe = Shoe::stacked(&dealt);
    let strategy = move |view: &StreetView<'_>| {
        match view.street {
            Street::Third => assert_eq!(view.peeked, &[Some(flop), None, Some(river)]),
            _ => assert_eq!(view.peeked, &[None, None, Some(river)]),
        }
        assert_eq!(view.peeked_card(Street::Fifth), Some(river));
        view.bet(1.0)
    };
    let round_config = RoundConfig {
        ante: 1.0,
        peek: PeekPolicy {
            third: true,
            fourth: false,
            fifth: true,
        },
        ..RoundConfig::default()
    };
    simulate_round(&mut shoe, &strategy, &round_config).expect("round plays");
}

#[test]
fn fourth_only_peek_is_keyed_to_its_street() {
    let dealt: Vec<Card> = parse_cards("2c 3d 8h 9s Kc").expect("valid notation");
    let turn = dealt[3];
    let mut shoe = Shoe::stacked(&dealt);
    let strategy = move |view: &StreetView<'_>| {
        match view.street {
            Street::Fifth => assert_eq!(view.peeked, &[None; 3]),
            _ => {
                assert_eq!(view.peeked, &[None, Some(turn), None]);
                assert_eq!(view.peeked_card(Street::Fourth), Some(turn));
                assert_eq!(view.peeked_card(Street::Fifth), None);
            }
        }
        view.bet(1.0)
    };
    let round_config = RoundConfig {
        ante: 1.0,
        peek: PeekPolicy {
            fourth: true,
            ..PeekPolicy::NONE
        },
        ..RoundConfig::default()
    };
    simulate_round(&mut shoe, &strategy, &round_config).expect("round plays");
}

#[test]
fn short_shoe_is_an_error() {
    let mut shoe = stacked("2c 3d 8h");
    let strategy = |view: &StreetView<'_>| view.bet(1.0);
    assert_eq!(
        simulate_round(&mut shoe, &strategy, &config(1.0)),
        Err(SimError::ShoeExhausted {
            requested: 5,
            remaining: 3
        })
    );
}

#[test]
fn profit_is_always_a_paytable_multiple_of_the_total() {
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..2_000 {
        let mut shoe = Shoe::shuffled(false, &mut rng);
        let result = simulate_round(&mut shoe, &BasicStrategy, &config(5.0)).expect("round plays");
        let expected = match result.outcome.map(Outcome::payout) {
            None | Some(Payout::Lose) => -result.total_bet,
            Some(Payout::Push) => 0.0,
            Some(Payout::Win(multiplier)) => multiplier as f64 * result.total_bet,
        };
        assert_eq!(result.profit, expected);
        let bets: f64 = result.decisions.iter().filter_map(Decision::amount).sum();
        assert_eq!(result.total_bet, 5.0 + bets);
    }
}

#[test]
fn jokers_play_wild_at_showdown() {
    let mut shoe = Shoe::stacked(&[
        Card::Joker(msstud_sim::cards::JokerColor::Red),
        Card::new(msstud_sim::cards::Rank::Ace, msstud_sim::cards::Suit::Hearts),
        Card::new(msstud_sim::cards::Rank::Two, msstud_sim::cards::Suit::Clubs),
        Card::new(msstud_sim::cards::Rank::Seven, msstud_sim::cards::Suit::Diamonds),
        Card::new(msstud_sim::cards::Rank::Nine, msstud_sim::cards::Suit::Spades),
    ]);
    let strategy = |view: &StreetView<'_>| view.bet(1.0);
    let result = simulate_round(&mut shoe, &strategy, &config(1.0)).expect("round plays");

    assert_eq!(result.outcome, Some(Outcome::JacksOrBetter));
    assert_eq!(result.profit, 4.0);
}
