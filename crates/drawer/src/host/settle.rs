use crate::config::SettleConfig;
use drawer_core::Settle;
use std::time::Duration;

/// Time-based interpolation of the drawer ratio towards a resting detent.
#[derive(Debug, Clone, PartialEq)]
pub struct SettleAnimation {
    from: f64,
    to: f64,
    elapsed: Duration,
    duration: Duration,
    bounce: f64,
}

impl SettleAnimation {
    pub fn new(settle: &Settle, config: &SettleConfig) -> Self {
        Self {
            from: settle.from,
            to: settle.to,
            elapsed: Duration::ZERO,
            duration: config.duration(),
            bounce: config.bounce.max(0.0),
        }
    }

    pub fn advance(&mut self, dt: Duration) -> f64 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        if self.elapsed.is_zero() {
            return self.from;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * ease_out_back(t, self.bounce)
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Ease-out curve that overshoots by an amount growing with `overshoot`
/// before coming back to rest. `overshoot == 0.0` is a plain cubic ease-out.
fn ease_out_back(t: f64, overshoot: f64) -> f64 {
    let u = t - 1.0;
    1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
}
