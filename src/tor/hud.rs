//! What the HUD is told to draw each frame

use crate::text::PresentationMode;

pub const EMERGENCY_TEXT: &str = "EMERGENCY\nTake Manual Control";
pub const RESUMING_TEXT: &str = "Autopilot Enabled\nResuming Reading Task";
pub const COMPLETE_TEXT: &str = "Reading Task\nis complete";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HudColor {
    #[default]
    Black,
    Red,
    Blue,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HudLayout {
    /// Single word in the middle of the panel
    Centered,
    /// Paragraph anchored to the top-left of the panel
    #[default]
    TopLeft,
    /// Large centered alert without the panel
    Alert,
}

impl HudLayout {
    pub fn for_mode(mode: PresentationMode) -> Self {
        match mode {
            PresentationMode::Rsvp => HudLayout::Centered,
            PresentationMode::Stp => HudLayout::TopLeft,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HudFrame {
    pub text: String,
    pub color: HudColor,
    pub layout: HudLayout,
    /// Whether the reading panel behind the text is shown
    pub hud_visible: bool,
}

impl HudFrame {
    /// Reading text on the panel
    pub fn reading(text: impl Into<String>, mode: PresentationMode) -> Self {
        Self {
            text: text.into(),
            color: HudColor::Black,
            layout: HudLayout::for_mode(mode),
            hud_visible: true,
        }
    }

    pub fn emergency() -> Self {
        Self::alert(EMERGENCY_TEXT, HudColor::Red)
    }

    pub fn resuming() -> Self {
        Self::alert(RESUMING_TEXT, HudColor::Blue)
    }

    pub fn complete() -> Self {
        Self::alert(COMPLETE_TEXT, HudColor::Green)
    }

    fn alert(text: &str, color: HudColor) -> Self {
        Self {
            text: text.to_string(),
            color,
            layout: HudLayout::Alert,
            hud_visible: false,
        }
    }

    pub fn is_alert(&self) -> bool {
        self.layout == HudLayout::Alert
    }
}
