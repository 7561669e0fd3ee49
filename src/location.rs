use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Demo position shown on the home screen (Mumbai).
    pub const DEFAULT: Coordinates = Coordinates {
        latitude: 19.076722,
        longitude: 72.909870,
    };

    pub fn latitude_label(&self) -> String {
        format_coordinate(self.latitude)
    }

    pub fn longitude_label(&self) -> String {
        format_coordinate(self.longitude)
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lat: {}, Lng: {}",
            self.latitude_label(),
            self.longitude_label()
        )
    }
}

pub fn format_coordinate(value: f64) -> String {
    format!("{value:.6}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_display() {
        assert_eq!(
            Coordinates::default().to_string(),
            "Lat: 19.076722, Lng: 72.909870"
        );
    }

    #[test]
    fn test_format_pads_to_six_places() {
        assert_eq!(format_coordinate(1.5), "1.500000");
        assert_eq!(format_coordinate(-0.1234567), "-0.123457");
    }
}
