use super::*;

#[test]
fn test_even_match_win_chance_is_50() {
    for seed in 0..50 {
        assert_eq!(resolve(20, 20, seed).win_chance, 50);
    }
}

#[test]
fn test_win_chance_caps_at_95() {
    // diff = 25, raw chance would be 175%
    assert_eq!(resolve(30, 5, 7).win_chance, 95);
}

#[test]
fn test_win_chance_floors_at_5() {
    // diff = -29, raw chance would be -95%
    assert_eq!(resolve(1, 30, 7).win_chance, 5);
}

#[test]
fn test_win_chance_always_within_bounds() {
    for player in [1, 2, 5, 10, 25, 60, 99] {
        for opponent in [1, 3, 11, 40, 99] {
            for seed in 0..20 {
                let outcome = resolve(player, opponent, seed);
                assert!(
                    (5..=95).contains(&outcome.win_chance),
                    "win chance {} out of bounds for {} vs {}",
                    outcome.win_chance,
                    player,
                    opponent
                );
            }
        }
    }
}

#[test]
fn test_exactly_one_side_at_zero() {
    for seed in 0..500 {
        let outcome = resolve(12, 9, seed);
        let zeroes = [outcome.player_health, outcome.opponent_health]
            .iter()
            .filter(|h| **h == 0)
            .count();
        assert_eq!(zeroes, 1, "outcome {:?}", outcome);
    }
}

#[test]
fn test_winner_health_always_in_live_range() {
    for seed in 0..500 {
        let outcome = resolve(15, 18, seed);
        let winner = if outcome.player_wins {
            outcome.player_health
        } else {
            outcome.opponent_health
        };
        assert!((10..=100).contains(&winner), "outcome {:?}", outcome);
    }
}

#[test]
fn test_decisive_band_for_big_player_advantage() {
    // diff > 10 and player wins -> health drawn from [70, 100)
    for seed in 0..200 {
        let outcome = resolve(30, 15, seed);
        if outcome.player_wins {
            assert!(outcome.player_health >= 70 && outcome.player_health <= 100);
        }
    }
}

#[test]
fn test_narrow_band_for_underdog_win() {
    // diff <= 0 and player wins -> health drawn from [10, 40)
    let outcome = find_outcome(10, 15, |o| o.player_wins);
    assert!(outcome.player_health >= 10 && outcome.player_health <= 40);
}

#[test]
fn test_decisive_band_for_big_opponent_advantage() {
    // diff = -15; the winning opponent draws from [70, 100)
    let outcome = find_outcome(5, 20, |o| !o.player_wins);
    assert_eq!(outcome.player_health, 0);
    assert!(outcome.opponent_health >= 70 && outcome.opponent_health <= 100);
}

#[test]
fn test_solid_band_for_moderate_advantage() {
    // 0 < diff <= 10 and player wins -> [40, 80)
    for seed in 0..200 {
        let outcome = resolve(20, 14, seed);
        if outcome.player_wins {
            assert!(outcome.player_health >= 40 && outcome.player_health <= 80);
        }
    }
}

#[test]
fn test_deterministic_given_seed() {
    let a = resolve(17, 13, 4242);
    let b = resolve(17, 13, 4242);
    assert_eq!(a, b);
}

#[test]
fn test_upsets_happen_even_at_max_gap() {
    // Floor of 5% means a heavily outmatched player still wins sometimes
    let upset = find_outcome(1, 50, |o| o.player_wins);
    assert!(upset.player_wins);
    assert_eq!(upset.opponent_health, 0);
}
