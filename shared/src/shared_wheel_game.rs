use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::prize_selector::{select_prize_and_rotation, SpinError, SpinOutcome};
use crate::lot::Lot;

/// Whether a session may spin more than once.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinPolicy {
    /// Public play page: one spin per visit.
    OncePerSession,
    /// Owner's preview: spin as often as you like.
    Unlimited,
}

/// Client-side state of one wheel on screen.
///
/// `rotation` is the running total fed back into the selector, so the wheel
/// keeps turning forward from wherever the last spin left it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelSession {
    pub rotation: f64,
    pub is_spinning: bool,
    pub has_spun: bool,
    pub policy: SpinPolicy,
    pub last_outcome: Option<SpinOutcome>,
}

impl WheelSession {
    pub fn new(policy: SpinPolicy) -> Self {
        Self {
            rotation: 0.0,
            is_spinning: false,
            has_spun: false,
            policy,
            last_outcome: None,
        }
    }

    pub fn can_spin(&self) -> bool {
        !self.is_spinning && !(self.policy == SpinPolicy::OncePerSession && self.has_spun)
    }

    /// Draws a prize and moves the rotation to the new target. On any error
    /// the session is left exactly as it was.
    pub fn start_spin<R: Rng + ?Sized>(
        &mut self,
        lots: &[Lot],
        rng: &mut R,
    ) -> Result<SpinOutcome, SpinError> {
        if self.is_spinning {
            log::warn!("spin refused: already spinning");
            return Err(SpinError::AlreadySpinning);
        }
        if self.policy == SpinPolicy::OncePerSession && self.has_spun {
            log::warn!("spin refused: wheel already used this session");
            return Err(SpinError::AlreadySpun);
        }

        let outcome = select_prize_and_rotation(lots, self.rotation, rng).map_err(|e| {
            log::warn!("spin refused: {}", e);
            e
        })?;

        self.is_spinning = true;
        self.rotation = outcome.target_rotation_degrees;
        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// Called once the animation has finished. Returns the outcome to reveal.
    pub fn complete_spin(&mut self) -> Option<SpinOutcome> {
        if !self.is_spinning {
            return None;
        }
        self.is_spinning = false;
        self.has_spun = true;
        self.last_outcome.clone()
    }

    /// Rotation to draw at `progress` (0..=1) of the animation that started
    /// from `from_rotation`.
    pub fn animated_rotation(&self, from_rotation: f64, progress: f64) -> f64 {
        from_rotation + (self.rotation - from_rotation) * ease_out(progress)
    }
}

impl Default for WheelSession {
    fn default() -> Self {
        Self::new(SpinPolicy::OncePerSession)
    }
}

pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn lots() -> Vec<Lot> {
        vec![Lot::new("Coffee", 1), Lot::new("Cake", 2), Lot::new("Nothing", 0)]
    }

    #[test]
    fn test_once_per_session_latch() {
        let mut session = WheelSession::new(SpinPolicy::OncePerSession);
        let mut rng = StdRng::seed_from_u64(1);

        let outcome = session.start_spin(&lots(), &mut rng).unwrap();
        assert!(session.is_spinning);
        assert_eq!(session.rotation, outcome.target_rotation_degrees);
        assert_eq!(session.start_spin(&lots(), &mut rng), Err(SpinError::AlreadySpinning));

        assert_eq!(session.complete_spin(), Some(outcome));
        assert!(session.has_spun);
        assert!(!session.can_spin());
        assert_eq!(session.start_spin(&lots(), &mut rng), Err(SpinError::AlreadySpun));
    }

    #[test]
    fn test_unlimited_policy_keeps_advancing() {
        let mut session = WheelSession::new(SpinPolicy::Unlimited);
        let mut rng = StdRng::seed_from_u64(2);
        let mut previous = session.rotation;
        for _ in 0..10 {
            session.start_spin(&lots(), &mut rng).unwrap();
            session.complete_spin();
            assert!(session.rotation > previous);
            previous = session.rotation;
        }
        assert!(session.can_spin());
    }

    #[test]
    fn test_refused_spin_leaves_state_untouched() {
        let mut session = WheelSession::new(SpinPolicy::OncePerSession);
        let mut rng = StdRng::seed_from_u64(3);
        let before = session.clone();
        let dead = vec![Lot::new("A", 0), Lot::new("B", 0)];
        assert_eq!(session.start_spin(&dead, &mut rng), Err(SpinError::NoEligiblePrize));
        assert_eq!(session, before);
    }

    #[test]
    fn test_complete_without_spin_is_noop() {
        let mut session = WheelSession::default();
        assert_eq!(session.complete_spin(), None);
        assert!(!session.has_spun);
    }

    #[test]
    fn test_animation_ends_on_target() {
        let mut session = WheelSession::new(SpinPolicy::Unlimited);
        let mut rng = StdRng::seed_from_u64(4);
        let from = session.rotation;
        session.start_spin(&lots(), &mut rng).unwrap();
        assert_eq!(session.animated_rotation(from, 0.0), from);
        assert!((session.animated_rotation(from, 1.0) - session.rotation).abs() < 1e-9);
        assert!(session.animated_rotation(from, 0.5) > from);
        assert_eq!(ease_out(2.0), 1.0);
    }
}
