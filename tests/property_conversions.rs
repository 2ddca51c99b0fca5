use proptest::prelude::*;
use thermoprop::convert::{Converter, ReferenceConverter, Scale};

proptest! {
    #[test]
    fn fahrenheit_round_trip_recovers_the_input(v in -1e9f64..1e9) {
        let converter = ReferenceConverter;
        let celsius = converter.convert(v, Scale::Fahrenheit, Scale::Celsius);
        let back = converter.convert(celsius, Scale::Celsius, Scale::Fahrenheit);
        let tolerance = 1e-6_f64.max(v.abs() * 1e-12);
        prop_assert!((back - v).abs() <= tolerance, "{back} != {v}");
    }

    #[test]
    fn kelvin_to_celsius_has_no_fixed_point(v in -1e9f64..1e9) {
        let converter = ReferenceConverter;
        prop_assert_ne!(converter.convert(v, Scale::Kelvin, Scale::Celsius), v);
    }

    #[test]
    fn mid_range_fahrenheit_sits_between_celsius_and_kelvin(v in -39.9f64..574.5) {
        let converter = ReferenceConverter;
        let celsius = converter.convert(v, Scale::Fahrenheit, Scale::Celsius);
        let kelvin = converter.convert(v, Scale::Fahrenheit, Scale::Kelvin);
        prop_assert!(celsius < v, "Celsius {celsius} not below {v}");
        prop_assert!(v < kelvin, "Kelvin {kelvin} not above {v}");
    }

    #[test]
    fn high_fahrenheit_dominates_both_scales(v in 574.6f64..1e6) {
        let converter = ReferenceConverter;
        prop_assert!(converter.convert(v, Scale::Fahrenheit, Scale::Celsius) < v);
        prop_assert!(converter.convert(v, Scale::Fahrenheit, Scale::Kelvin) < v);
    }

    #[test]
    fn low_fahrenheit_trails_both_scales(v in -1e6f64..-40.1) {
        let converter = ReferenceConverter;
        prop_assert!(converter.convert(v, Scale::Fahrenheit, Scale::Celsius) > v);
        prop_assert!(converter.convert(v, Scale::Fahrenheit, Scale::Kelvin) > v);
    }
}
