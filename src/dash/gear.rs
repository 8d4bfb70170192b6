//! Drive/reverse indicator

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gear {
    #[default]
    Drive,
    Reverse,
}

impl Gear {
    pub fn glyph(self) -> &'static str {
        match self {
            Gear::Drive => "D",
            Gear::Reverse => "R",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GearIndicator {
    gear: Gear,
}

impl GearIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gear(&self) -> Gear {
        self.gear
    }

    /// Flip between drive and reverse; returns the new gear.
    pub fn toggle_reverse(&mut self) -> Gear {
        self.gear = match self.gear {
            Gear::Drive => Gear::Reverse,
            Gear::Reverse => Gear::Drive,
        };
        self.gear
    }
}
