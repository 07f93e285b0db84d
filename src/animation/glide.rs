use crate::animation::easing::Ease;

/// A single value easing towards a target. Retargeting starts a new
/// transition from wherever the value currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glide {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
    ease: Ease,
}

impl Glide {
    /// A settled glide resting at `value`.
    pub fn at(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: 0.0,
            duration: 0.0,
            ease: Ease::Linear,
        }
    }

    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.to;
        }
        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_settled(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }

    pub fn retarget(&mut self, to: f32, duration: f32, ease: Ease) {
        self.from = self.value();
        self.to = to;
        self.elapsed = 0.0;
        self.duration = duration.max(0.0);
        self.ease = ease;
    }

    pub fn snap(&mut self, value: f32) {
        *self = Self::at(value);
    }

    pub fn advance(&mut self, dt: f32) {
        if !self.is_settled() {
            self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        }
    }
}
