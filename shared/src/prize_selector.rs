//! Weighted prize draw and the rotation that lands the pointer on it.
//!
//! Every surface that spins a wheel (the public play page and the owner's
//! preview) goes through [`select_prize_and_rotation`]. The random source is
//! injected so the draw is reproducible under a seeded or mocked generator.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{JITTER_RATIO, MAX_EXTRA_ROTATIONS, MIN_EXTRA_ROTATIONS};
use crate::lot::Lot;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpinError {
    #[error("no prize on this wheel can be won")]
    NoEligiblePrize,
    #[error("the wheel is already spinning")]
    AlreadySpinning,
    #[error("the wheel has already been spun")]
    AlreadySpun,
}

/// Result of one draw. `target_rotation_degrees` is absolute, not a delta.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub winner_index: usize,
    pub winner: Lot,
    pub steps_to_rotate: usize,
    pub extra_rotations: u32,
    pub jitter_degrees: f64,
    pub target_rotation_degrees: f64,
}

pub fn segment_degrees(sectors: usize) -> f64 {
    360.0 / sectors as f64
}

/// Cumulative-weight draw over the eligible lots. Returns the index into the
/// original slice, since zero-odds lots still occupy a sector.
pub fn pick_winner<R: Rng + ?Sized>(lots: &[Lot], rng: &mut R) -> Result<usize, SpinError> {
    let eligible: Vec<(usize, u32)> = lots
        .iter()
        .enumerate()
        .map(|(index, lot)| (index, lot.weight()))
        .filter(|(_, weight)| *weight > 0)
        .collect();

    let Some(&(last_index, _)) = eligible.last() else {
        return Err(SpinError::NoEligiblePrize);
    };

    let total_weight: f64 = eligible.iter().map(|(_, weight)| *weight as f64).sum();
    let mut remaining = rng.gen::<f64>() * total_weight;

    for (index, weight) in &eligible {
        remaining -= *weight as f64;
        if remaining <= 0.0 {
            return Ok(*index);
        }
    }

    // Only reachable through float rounding on huge weights.
    Ok(last_index)
}

/// Picks a winner and the absolute rotation that brings its sector under
/// the top pointer after a few extra full turns.
///
/// The wheel always moves forward: the target is strictly greater than
/// `current_rotation_degrees`. Fails with [`SpinError::NoEligiblePrize`]
/// without drawing anything when no lot has positive odds.
pub fn select_prize_and_rotation<R: Rng + ?Sized>(
    lots: &[Lot],
    current_rotation_degrees: f64,
    rng: &mut R,
) -> Result<SpinOutcome, SpinError> {
    let winner_index = pick_winner(lots, rng)?;

    let sectors = lots.len();
    let segment = segment_degrees(sectors);
    let steps_to_rotate = (sectors - winner_index) % sectors;

    let rotation_choices = (MAX_EXTRA_ROTATIONS - MIN_EXTRA_ROTATIONS + 1) as f64;
    let extra_rotations = MIN_EXTRA_ROTATIONS
        + ((rng.gen::<f64>() * rotation_choices) as u32).min(MAX_EXTRA_ROTATIONS - MIN_EXTRA_ROTATIONS);

    let jitter_degrees = (rng.gen::<f64>() * 2.0 - 1.0) * JITTER_RATIO * segment;

    // Residue left by earlier spins is taken out so the winner still lands
    // under the pointer. It is zero whenever the wheel sits on a full turn.
    let residue = current_rotation_degrees.rem_euclid(360.0);
    let alignment = (steps_to_rotate as f64 * segment - residue).rem_euclid(360.0);

    let target_rotation_degrees =
        current_rotation_degrees + 360.0 * extra_rotations as f64 + alignment + jitter_degrees;

    log::debug!(
        "spin drew lot {} ({:?}) of {}, {} extra turns, target {:.2}°",
        winner_index,
        lots[winner_index].name,
        sectors,
        extra_rotations,
        target_rotation_degrees
    );

    Ok(SpinOutcome {
        winner_index,
        winner: lots[winner_index].clone(),
        steps_to_rotate,
        extra_rotations,
        jitter_degrees,
        target_rotation_degrees,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::sector_under_pointer;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A generator whose every `gen::<f64>()` returns (almost exactly) `value`.
    fn constant_rng(value: f64) -> StepRng {
        let bits = ((value * (1u64 << 53) as f64) as u64) << 11;
        StepRng::new(bits, 0)
    }

    fn lots_with_odds(odds: &[u32]) -> Vec<Lot> {
        odds.iter()
            .enumerate()
            .map(|(i, odds)| Lot::new(format!("Lot {}", i), *odds))
            .collect()
    }

    #[test]
    fn test_worked_example_with_fixed_draw() {
        let lots = vec![Lot::new("A", 1), Lot::new("B", 0), Lot::new("C", 3)];
        let mut rng = constant_rng(0.9);

        let outcome = select_prize_and_rotation(&lots, 0.0, &mut rng).unwrap();

        assert_eq!(outcome.winner_index, 2);
        assert_eq!(outcome.winner.name, "C");
        assert_eq!(outcome.steps_to_rotate, 1);
        assert_eq!(outcome.extra_rotations, 4);
        let base = 360.0 * outcome.extra_rotations as f64 + 120.0;
        assert!((outcome.target_rotation_degrees - outcome.jitter_degrees - base).abs() < 1e-9);
        // 0.9 -> (0.9 * 2 - 1) * 0.15 * 120
        assert!((outcome.jitter_degrees - 14.4).abs() < 1e-6);
    }

    #[test]
    fn test_all_zero_odds_refuses_to_spin() {
        let lots = lots_with_odds(&[0, 0, 0]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            select_prize_and_rotation(&lots, 90.0, &mut rng),
            Err(SpinError::NoEligiblePrize)
        );
        assert_eq!(
            select_prize_and_rotation(&[], 0.0, &mut rng),
            Err(SpinError::NoEligiblePrize)
        );
    }

    #[test]
    fn test_zero_odds_lots_never_win() {
        let lots = lots_with_odds(&[0, 2, 0, 1, 0, 5, 0, 0]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let outcome = select_prize_and_rotation(&lots, 0.0, &mut rng).unwrap();
            assert!(lots[outcome.winner_index].is_eligible());
        }
    }

    #[test]
    fn test_non_numeric_odds_count_as_one() {
        let mut lots = lots_with_odds(&[0, 0, 0]);
        lots[1].odds = "lots".to_string();
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = select_prize_and_rotation(&lots, 0.0, &mut rng).unwrap();
        assert_eq!(outcome.winner_index, 1);
    }

    #[test]
    fn test_steps_and_target_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for sectors in 1..=12 {
            let lots = lots_with_odds(&vec![1; sectors]);
            let segment = segment_degrees(sectors);
            let mut current = 0.0;
            for _ in 0..200 {
                let outcome = select_prize_and_rotation(&lots, current, &mut rng).unwrap();
                assert!(outcome.steps_to_rotate < sectors);
                assert!(outcome.target_rotation_degrees > current);
                assert!(outcome.jitter_degrees.abs() <= JITTER_RATIO * segment + 1e-9);
                assert!((MIN_EXTRA_ROTATIONS..=MAX_EXTRA_ROTATIONS).contains(&outcome.extra_rotations));
                current = outcome.target_rotation_degrees;
            }
        }
    }

    #[test]
    fn test_constant_source_is_reproducible() {
        let lots = lots_with_odds(&[1, 3, 0, 2, 1, 1, 4, 1]);
        for value in [0.0, 0.12, 0.5, 0.77, 0.999] {
            let first = select_prize_and_rotation(&lots, 720.0, &mut constant_rng(value)).unwrap();
            let second = select_prize_and_rotation(&lots, 720.0, &mut constant_rng(value)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let lots = lots_with_odds(&[1, 1, 1, 1, 1, 1, 1, 1]);
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut rotation = 0.0;
            (0..20)
                .map(|_| {
                    let outcome = select_prize_and_rotation(&lots, rotation, &mut rng).unwrap();
                    rotation = outcome.target_rotation_degrees;
                    outcome.winner_index
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_uniform_odds_frequency() {
        let lots = lots_with_odds(&[1; 8]);
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 100_000;
        let mut wins = [0usize; 8];
        for _ in 0..trials {
            wins[pick_winner(&lots, &mut rng).unwrap()] += 1;
        }
        for count in wins {
            let frequency = count as f64 / trials as f64;
            assert!((frequency - 0.125).abs() < 0.01, "frequency {}", frequency);
        }
    }

    #[test]
    fn test_sole_positive_lot_always_wins() {
        let lots = lots_with_odds(&[0, 0, 0, 0, 0, 0, 0, 1]);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100_000 {
            assert_eq!(pick_winner(&lots, &mut rng).unwrap(), 7);
        }
    }

    #[test]
    fn test_chained_spins_strictly_increase() {
        let lots = lots_with_odds(&[2, 1, 0, 1, 3, 0, 1, 1]);
        let mut rng = StdRng::seed_from_u64(11);
        let first = select_prize_and_rotation(&lots, 0.0, &mut rng).unwrap();
        let second =
            select_prize_and_rotation(&lots, first.target_rotation_degrees, &mut rng).unwrap();
        assert!(second.target_rotation_degrees > first.target_rotation_degrees);
    }

    #[test]
    fn test_target_lands_on_winner_across_spins() {
        let lots = lots_with_odds(&[1, 2, 3, 0, 1, 2, 3, 1]);
        let mut rng = StdRng::seed_from_u64(8);
        let mut rotation = 0.0;
        for _ in 0..500 {
            let outcome = select_prize_and_rotation(&lots, rotation, &mut rng).unwrap();
            assert_eq!(
                sector_under_pointer(outcome.target_rotation_degrees, lots.len()),
                outcome.winner_index
            );
            rotation = outcome.target_rotation_degrees;
        }
    }
}
