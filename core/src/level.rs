use std::fmt;

pub const BLUR_LEVEL_MIN: u8 = 0;
pub const BLUR_LEVEL_MAX: u8 = 10;

/// Blur radius in pixels, as carried by the range slider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlurLevel(u8);

impl BlurLevel {
    pub const OFF: BlurLevel = BlurLevel(BLUR_LEVEL_MIN);

    pub fn new(value: u8) -> Self {
        Self(value.min(BLUR_LEVEL_MAX))
    }

    /// Reads a slider value the way a range input sanitises it: any finite
    /// number is rounded and clamped, everything else is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let value = trimmed.parse::<f64>().ok()?;
        if !value.is_finite() {
            return None;
        }
        let clamped = value
            .round()
            .clamp(f64::from(BLUR_LEVEL_MIN), f64::from(BLUR_LEVEL_MAX));
        Some(Self(clamped as u8))
    }

    pub fn parse_or_off(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::OFF)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_active(self) -> bool {
        self.0 != 0
    }

    pub fn filter_value(self) -> String {
        format!("blur({}px)", self.0)
    }

    pub fn slider_value(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for BlurLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl From<u8> for BlurLevel {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}
