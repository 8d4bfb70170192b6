//! Steering wheel animation

/// Limits and scales for the wheel animation, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringParams {
    pub max_angle: f64,
    /// Degrees per second
    pub max_velocity: f64,
    /// Wheel degrees for a full-scale input
    pub anim_scale: f64,
    /// Divisor applied to the raw input before scaling
    pub input_scale: f64,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            max_angle: 450.0,
            max_velocity: 360.0,
            anim_scale: 360.0,
            input_scale: 1.0,
        }
    }
}

/// Rate-limited wheel angle tracking the steering input
#[derive(Debug, Clone, PartialEq)]
pub struct SteeringWheelAnimator {
    params: SteeringParams,
    angle: f64,
}

impl SteeringWheelAnimator {
    pub fn new(params: SteeringParams) -> Self {
        Self { params, angle: 0.0 }
    }

    pub fn params(&self) -> &SteeringParams {
        &self.params
    }

    /// Current wheel angle
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Wheel angle the raw input asks for
    pub fn target(&self, raw_input: f64) -> f64 {
        let input_scale = if self.params.input_scale == 0.0 {
            1.0
        } else {
            self.params.input_scale
        };
        (raw_input / input_scale) * self.params.anim_scale
    }

    /// Advance the wheel by `dt` seconds toward the input.
    ///
    /// With `direct_drive` the target is applied at once. Otherwise the step
    /// is limited to the max velocity. The result is always within the max
    /// angle.
    pub fn tick(&mut self, raw_input: f64, dt: f64, direct_drive: bool) -> f64 {
        let target = self.target(raw_input);
        let next = if direct_drive {
            target
        } else {
            let max_v = self.params.max_velocity.abs();
            let delta = (target - self.angle).clamp(-max_v, max_v);
            self.angle + delta * dt.max(0.0)
        };
        let max_angle = self.params.max_angle.abs();
        self.angle = next.clamp(-max_angle, max_angle);
        self.angle
    }
}

impl Default for SteeringWheelAnimator {
    fn default() -> Self {
        Self::new(SteeringParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(max_angle: f64, max_velocity: f64) -> SteeringWheelAnimator {
        SteeringWheelAnimator::new(SteeringParams {
            max_angle,
            max_velocity,
            anim_scale: 90.0,
            input_scale: 1.0,
        })
    }

    #[test]
    fn test_rate_limited_step() {
        let mut wheel = animator(450.0, 30.0);
        let angle = wheel.tick(1.0, 0.1, false);
        assert!((angle - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_direct_drive_jumps_to_target() {
        let mut wheel = animator(450.0, 30.0);
        assert_eq!(wheel.tick(1.0, 0.1, true), 90.0);
        assert_eq!(wheel.tick(-0.5, 0.1, true), -45.0);
    }

    #[test]
    fn test_angle_clamped_to_max() {
        let mut wheel = animator(60.0, 1000.0);
        assert_eq!(wheel.tick(1.0, 1.0, true), 60.0);
        for _ in 0..10 {
            wheel.tick(-1.0, 1.0, false);
        }
        assert_eq!(wheel.angle(), -60.0);
    }

    #[test]
    fn test_input_scale_divides() {
        let wheel = SteeringWheelAnimator::new(SteeringParams {
            input_scale: 2.0,
            anim_scale: 360.0,
            ..SteeringParams::default()
        });
        assert_eq!(wheel.target(1.0), 180.0);
    }

    #[test]
    fn test_zero_input_scale_is_ignored() {
        let wheel = SteeringWheelAnimator::new(SteeringParams {
            input_scale: 0.0,
            ..SteeringParams::default()
        });
        assert_eq!(wheel.target(0.5), 180.0);
    }
}
