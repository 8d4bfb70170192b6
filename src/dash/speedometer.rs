//! Speed unit conversion

use std::fmt;

/// Centimetres per second to miles per hour
const CM_S_TO_MPH: f64 = 0.022_369_4;
/// Centimetres per second to kilometres per hour
const CM_S_TO_KPH: f64 = 0.036;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedUnit {
    #[default]
    Mph,
    Kph,
}

impl SpeedUnit {
    pub fn from_mph_flag(mph: bool) -> Self {
        if mph {
            SpeedUnit::Mph
        } else {
            SpeedUnit::Kph
        }
    }

    /// Factor applied to a speed in cm/s
    pub fn scale(self) -> f64 {
        match self {
            SpeedUnit::Mph => CM_S_TO_MPH,
            SpeedUnit::Kph => CM_S_TO_KPH,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeedUnit::Mph => "mph",
            SpeedUnit::Kph => "km/h",
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Converts raw vehicle speed to the rounded value shown on the speedometer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpeedConverter {
    unit: SpeedUnit,
}

impl SpeedConverter {
    pub fn new(unit: SpeedUnit) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> SpeedUnit {
        self.unit
    }

    /// Scale and round half away from zero.
    pub fn convert(&self, speed_cm_s: f64) -> i32 {
        (speed_cm_s * self.unit.scale()).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SpeedUnit::Kph, 0.0, 0)]
    #[case(SpeedUnit::Kph, 1000.0, 36)]
    #[case(SpeedUnit::Kph, 1250.0, 45)]
    #[case(SpeedUnit::Kph, -1000.0, -36)]
    #[case(SpeedUnit::Mph, 2682.24, 60)]
    #[case(SpeedUnit::Mph, 447.04, 10)]
    fn test_convert(#[case] unit: SpeedUnit, #[case] raw: f64, #[case] expected: i32) {
        assert_eq!(SpeedConverter::new(unit).convert(raw), expected);
    }

    #[test]
    fn test_rounding_is_symmetric() {
        let kph = SpeedConverter::new(SpeedUnit::Kph);
        // 12.996 and 12.204 km/h
        assert_eq!(kph.convert(361.0), 13);
        assert_eq!(kph.convert(-361.0), -13);
        assert_eq!(kph.convert(339.0), 12);
        assert_eq!(kph.convert(-339.0), -12);
    }

    #[test]
    fn test_unit_from_flag() {
        assert_eq!(SpeedUnit::from_mph_flag(true), SpeedUnit::Mph);
        assert_eq!(SpeedUnit::from_mph_flag(false).label(), "km/h");
    }
}
