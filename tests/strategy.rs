use msstud_sim::cards::{Card, parse_cards};
use msstud_sim::game::{Decision, Street};
use msstud_sim::playbook::{AdvantagePlayFifth, BasicStrategy};
use msstud_sim::{Strategy, StrategyKind, StreetView};

const ANTE: f64 = 5.0;

fn decide(
    strategy: &dyn Strategy,
    hole: &str,
    board: &str,
    peeked_last: &str,
    street: Street,
    history: &[Decision],
) -> Decision {
    let hole: Vec<Card> = parse_cards(hole).expect("valid hole");
    let hole = [hole[0], hole[1]];
    let board = parse_cards(board).expect("valid board");
    let last = parse_cards(peeked_last).expect("valid peek");
    let peeked = [None, None, last.first().copied()];
    strategy.decide(&StreetView {
        hole: &hole,
        revealed: &board,
        street,
        ante: ANTE,
        current_total: ANTE,
        peeked: &peeked,
        history,
    })
}

fn basic(hole: &str, board: &str, street: Street) -> Decision {
    decide(&BasicStrategy, hole, board, "", street, &[])
}

#[test]
fn third_street_pair_raises_three_times() {
    assert_eq!(basic("7h 7s", "", Street::Third), Decision::Bet(15.0));
}

#[test]
fn third_street_points_raise_once() {
    assert_eq!(basic("Qh 9s", "", Street::Third), Decision::Bet(5.0));
}

#[test]
fn third_street_suited_six_five_raises_once() {
    assert_eq!(basic("6h 5h", "", Street::Third), Decision::Bet(5.0));
    assert_eq!(basic("6h 5s", "", Street::Third), Decision::Fold);
}

#[test]
fn third_street_trash_folds() {
    assert_eq!(basic("2d 4c", "", Street::Third), Decision::Fold);
}

#[test]
fn fourth_street_low_pair_raises_once() {
    assert_eq!(basic("4c 4s", "7h", Street::Fourth), Decision::Bet(5.0));
}

#[test]
fn fourth_street_flush_draw_raises_once() {
    assert_eq!(basic("2h 9h", "6h", Street::Fourth), Decision::Bet(5.0));
}

#[test]
fn fourth_street_royal_draw_raises_three_times() {
    assert_eq!(basic("Kh Qh", "10h", Street::Fourth), Decision::Bet(15.0));
}

#[test]
fn fifth_street_mid_pair_raises_three_times() {
    assert_eq!(basic("8d 8c", "6s 10h", Street::Fifth), Decision::Bet(15.0));
}

#[test]
fn fifth_street_trash_folds() {
    assert_eq!(basic("3d 4c", "9s 7h", Street::Fifth), Decision::Fold);
}

#[test]
fn fifth_street_remembers_an_earlier_big_raise() {
    let hole = "6c 8d";
    let board = "10s 2h";
    assert_eq!(
        decide(&BasicStrategy, hole, board, "", Street::Fifth, &[]),
        Decision::Fold
    );
    let history = [Decision::Bet(15.0), Decision::Bet(5.0)];
    assert_eq!(
        decide(&BasicStrategy, hole, board, "", Street::Fifth, &history),
        Decision::Bet(5.0)
    );
}

#[test]
fn ap5_uses_the_peeked_card() {
    let strategy = AdvantagePlayFifth;
    assert!(strategy.peek_policy().fifth);
    assert_eq!(
        decide(&strategy, "9s 9d", "", "9c", Street::Third, &[]),
        Decision::Bet(15.0)
    );
    assert_eq!(
        decide(&strategy, "2c 7d", "Ks 4h", "9c", Street::Fifth, &[]),
        Decision::Fold
    );
    assert_eq!(
        decide(&strategy, "2c 7d", "Ks 4h", "7c", Street::Fifth, &[]),
        Decision::Bet(15.0)
    );
}

#[test]
fn closures_are_strategies() {
    let always_twice = |view: &StreetView<'_>| view.bet(2.0);
    assert_eq!(
        decide(&always_twice, "2c 3d", "", "", Street::Third, &[]),
        Decision::Bet(10.0)
    );
}

#[test]
fn strategy_kinds_build_matching_peek_policies() {
    assert!(!StrategyKind::Basic.build().peek_policy().fifth);
    assert!(StrategyKind::Ap5.build().peek_policy().fifth);
}
