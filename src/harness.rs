use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::convert::{Converter, Scale};
use crate::sampling::{InvalidRangeError, Sampler};

pub const DEFAULT_SAMPLES: usize = 10;

/// Fahrenheit reading above which a Fahrenheit value exceeds both its
/// Celsius and Kelvin conversions. The scales cross at about 574.59 °F.
pub const UPPER_PIVOT_F: f64 = 574.6;
/// Below -40 °F a Fahrenheit value trails both conversions; -40 is where
/// Fahrenheit and Celsius agree.
pub const LOWER_PIVOT_F: f64 = -40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    ZeroNeverConvertsToZero,
    KelvinNeverEqualsCelsius,
    HighFahrenheitDominates,
    LowFahrenheitTrails,
    MidRangeOrdering,
}

impl Property {
    pub const ALL: [Self; 5] = [
        Self::ZeroNeverConvertsToZero,
        Self::KelvinNeverEqualsCelsius,
        Self::HighFahrenheitDominates,
        Self::LowFahrenheitTrails,
        Self::MidRangeOrdering,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ZeroNeverConvertsToZero => "zero-never-converts-to-zero",
            Self::KelvinNeverEqualsCelsius => "kelvin-never-equals-celsius",
            Self::HighFahrenheitDominates => "high-fahrenheit-dominates",
            Self::LowFahrenheitTrails => "low-fahrenheit-trails",
            Self::MidRangeOrdering => "mid-range-ordering",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }
}

/// One failing comparison: the sample fed to the converter and the value
/// that came back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckFailure {
    pub input: f64,
    pub output: f64,
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {} caused the error", self.input, self.output)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyOutcome {
    pub property: Property,
    /// Number of individual comparisons made.
    pub checked: usize,
    pub failures: Vec<CheckFailure>,
}

impl PropertyOutcome {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs the conversion properties against a converter. Every sample in a
/// batch is an independent check: a failing comparison is recorded and the
/// walk continues, so one outcome reports every offending pair.
#[derive(Debug)]
pub struct Harness<C, R> {
    converter: C,
    sampler: Sampler<R>,
    samples: usize,
}

impl<C: Converter, R: Rng> Harness<C, R> {
    pub fn new(converter: C, rng: R) -> Self {
        Self::with_samples(converter, rng, DEFAULT_SAMPLES)
    }

    pub fn with_samples(converter: C, rng: R, samples: usize) -> Self {
        Self {
            converter,
            sampler: Sampler::new(rng),
            samples,
        }
    }

    pub fn check(&mut self, property: Property) -> Result<PropertyOutcome, InvalidRangeError> {
        let outcome = match property {
            Property::ZeroNeverConvertsToZero => self.zero_never_converts_to_zero(),
            Property::KelvinNeverEqualsCelsius => self.kelvin_never_equals_celsius(),
            Property::HighFahrenheitDominates => self.high_fahrenheit_dominates(),
            Property::LowFahrenheitTrails => self.low_fahrenheit_trails(),
            Property::MidRangeOrdering => self.mid_range_ordering()?,
        };
        Ok(outcome)
    }

    pub fn run(
        &mut self,
        properties: &[Property],
    ) -> Result<Vec<PropertyOutcome>, InvalidRangeError> {
        properties.iter().map(|p| self.check(*p)).collect()
    }

    /// Zero in one scale never reads zero in a different scale; the three
    /// zero points all sit at distinct temperatures.
    fn zero_never_converts_to_zero(&mut self) -> PropertyOutcome {
        let mut failures = Vec::new();
        let mut checked = 0;
        for from in Scale::ALL {
            for to in Scale::ALL {
                if from == to {
                    continue;
                }
                let output = self.converter.convert(0.0, from, to);
                checked += 1;
                if output == 0.0 {
                    failures.push(CheckFailure { input: 0.0, output });
                }
            }
        }
        PropertyOutcome {
            property: Property::ZeroNeverConvertsToZero,
            checked,
            failures,
        }
    }

    /// Kelvin and Celsius differ by a constant offset, so no finite reading
    /// converts to itself.
    fn kelvin_never_equals_celsius(&mut self) -> PropertyOutcome {
        let batch = self.sampler.unconstrained(self.samples);
        let mut failures = Vec::new();
        for v in &batch {
            let output = self.converter.convert(*v, Scale::Kelvin, Scale::Celsius);
            if output == *v {
                failures.push(CheckFailure { input: *v, output });
            }
        }
        PropertyOutcome {
            property: Property::KelvinNeverEqualsCelsius,
            checked: batch.len(),
            failures,
        }
    }

    /// Above the upper pivot a Fahrenheit reading exceeds both conversions.
    fn high_fahrenheit_dominates(&mut self) -> PropertyOutcome {
        let batch = self.sampler.above(self.samples, UPPER_PIVOT_F);
        self.dominance(Property::HighFahrenheitDominates, &batch, |v, out| v > out)
    }

    /// Below -40 °F a Fahrenheit reading trails both conversions.
    fn low_fahrenheit_trails(&mut self) -> PropertyOutcome {
        let batch = self.sampler.below(self.samples, LOWER_PIVOT_F);
        self.dominance(Property::LowFahrenheitTrails, &batch, |v, out| v < out)
    }

    /// Between the pivots, Celsius reads lower and Kelvin reads higher than
    /// the Fahrenheit value. Direction validated against the reference
    /// table: at 32 °F, Celsius is 0 and Kelvin is 273.15.
    fn mid_range_ordering(&mut self) -> Result<PropertyOutcome, InvalidRangeError> {
        let batch = self
            .sampler
            .between(self.samples, UPPER_PIVOT_F, LOWER_PIVOT_F)?;
        let mut failures = Vec::new();
        let mut checked = 0;
        for v in &batch {
            let celsius = self.converter.convert(*v, Scale::Fahrenheit, Scale::Celsius);
            let kelvin = self.converter.convert(*v, Scale::Fahrenheit, Scale::Kelvin);
            checked += 2;
            if celsius >= *v {
                failures.push(CheckFailure { input: *v, output: celsius });
            }
            if kelvin <= *v {
                failures.push(CheckFailure { input: *v, output: kelvin });
            }
        }
        Ok(PropertyOutcome {
            property: Property::MidRangeOrdering,
            checked,
            failures,
        })
    }

    fn dominance(
        &mut self,
        property: Property,
        batch: &[f64],
        holds: impl Fn(f64, f64) -> bool,
    ) -> PropertyOutcome {
        let mut failures = Vec::new();
        let mut checked = 0;
        for v in batch {
            for to in [Scale::Celsius, Scale::Kelvin] {
                let output = self.converter.convert(*v, Scale::Fahrenheit, to);
                checked += 1;
                if !holds(*v, output) {
                    failures.push(CheckFailure { input: *v, output });
                }
            }
        }
        PropertyOutcome {
            property,
            checked,
            failures,
        }
    }
}
