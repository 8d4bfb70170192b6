//! Blinker timing

/// Which blinker, if any, is lit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnIndicator {
    #[default]
    None,
    Left,
    Right,
}

impl TurnIndicator {
    /// Glyph shown on the dashboard
    pub fn glyph(self) -> &'static str {
        match self {
            TurnIndicator::None => "",
            TurnIndicator::Left => "<<<",
            TurnIndicator::Right => ">>>",
        }
    }
}

/// Left and right blinker expiry times. Activating one side cancels the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnSignalTimer {
    duration: f64,
    left_expiry: f64,
    right_expiry: f64,
}

impl TurnSignalTimer {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            left_expiry: 0.0,
            right_expiry: 0.0,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn activate_left(&mut self, now: f64) {
        self.left_expiry = now + self.duration;
        self.right_expiry = 0.0;
    }

    pub fn activate_right(&mut self, now: f64) {
        self.right_expiry = now + self.duration;
        self.left_expiry = 0.0;
    }

    pub fn display(&self, now: f64) -> TurnIndicator {
        if now < self.right_expiry {
            TurnIndicator::Right
        } else if now < self.left_expiry {
            TurnIndicator::Left
        } else {
            TurnIndicator::None
        }
    }
}

impl Default for TurnSignalTimer {
    fn default() -> Self {
        Self::new(3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_then_right_leaves_only_right() {
        let mut timer = TurnSignalTimer::new(3.0);
        timer.activate_left(10.0);
        assert_eq!(timer.display(10.5), TurnIndicator::Left);
        timer.activate_right(11.0);
        assert_eq!(timer.display(11.5), TurnIndicator::Right);
        assert_eq!(timer.display(13.9), TurnIndicator::Right);
        assert_eq!(timer.display(14.0), TurnIndicator::None);
    }

    #[test]
    fn test_right_then_left_leaves_only_left() {
        let mut timer = TurnSignalTimer::new(2.0);
        timer.activate_right(0.0);
        timer.activate_left(1.0);
        assert_eq!(timer.display(1.5), TurnIndicator::Left);
        assert_eq!(timer.display(3.0), TurnIndicator::None);
    }

    #[test]
    fn test_idle_timer_shows_nothing() {
        let timer = TurnSignalTimer::default();
        assert_eq!(timer.display(0.0), TurnIndicator::None);
        assert_eq!(timer.display(0.0).glyph(), "");
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(TurnIndicator::Left.glyph(), "<<<");
        assert_eq!(TurnIndicator::Right.glyph(), ">>>");
    }
}
