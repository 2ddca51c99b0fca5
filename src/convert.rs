use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
            Scale::Kelvin => "Kelvin",
        }
    }
}

/// The external conversion collaborator. The harness depends on this single
/// operation and nothing else about the implementation behind it.
pub trait Converter {
    fn convert(&self, value: f64, from: Scale, to: Scale) -> f64;
}

/// Reference conversion pivoting through Celsius.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceConverter;

impl Converter for ReferenceConverter {
    fn convert(&self, value: f64, from: Scale, to: Scale) -> f64 {
        if from == to {
            return value;
        }
        from_celsius(to_celsius(value, from), to)
    }
}

#[must_use]
pub fn to_celsius(value: f64, scale: Scale) -> f64 {
    match scale {
        Scale::Celsius => value,
        Scale::Fahrenheit => (value - 32.0) / 1.8,
        Scale::Kelvin => value - 273.15,
    }
}

#[must_use]
pub fn from_celsius(celsius: f64, scale: Scale) -> f64 {
    match scale {
        Scale::Celsius => celsius,
        Scale::Fahrenheit => celsius * 1.8 + 32.0,
        Scale::Kelvin => celsius + 273.15,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn celsius_anchors() {
        let converter = ReferenceConverter;
        assert_eq!(converter.convert(0.0, Scale::Celsius, Scale::Fahrenheit), 32.0);
        assert_eq!(converter.convert(100.0, Scale::Celsius, Scale::Kelvin), 373.15);
    }

    #[test]
    fn absolute_zero_is_not_celsius_zero() {
        let converter = ReferenceConverter;
        assert_eq!(converter.convert(0.0, Scale::Kelvin, Scale::Celsius), -273.15);
    }

    #[test]
    fn identity_conversion_returns_input_unchanged() {
        let converter = ReferenceConverter;
        for scale in Scale::ALL {
            assert_eq!(converter.convert(12.75, scale, scale), 12.75);
        }
    }

    #[test]
    fn fahrenheit_round_trip_within_tolerance() {
        let converter = ReferenceConverter;
        for v in [-459.67, -40.0, 0.0, 98.6, 574.6, 1234.5] {
            let celsius = converter.convert(v, Scale::Fahrenheit, Scale::Celsius);
            let back = converter.convert(celsius, Scale::Celsius, Scale::Fahrenheit);
            assert_relative_eq!(back, v, max_relative = 1e-12, epsilon = 1e-12);
        }
    }

    #[test]
    fn minus_forty_is_the_shared_point() {
        let converter = ReferenceConverter;
        assert_eq!(converter.convert(-40.0, Scale::Fahrenheit, Scale::Celsius), -40.0);
    }

    #[test]
    fn scale_labels() {
        assert_eq!(Scale::Kelvin.label(), "Kelvin");
        assert_eq!(Scale::ALL.len(), 3);
    }
}
