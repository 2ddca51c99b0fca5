use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Width of the integer draws, kept at the historical 32-bit signed maximum.
const DRAW_WIDTH: i64 = i32::MAX as i64;
/// Offset that centres an unconstrained draw near zero.
const HALF_WIDTH: i64 = 1_073_741_823;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("min {min} must be strictly less than max {max}")]
pub struct InvalidRangeError {
    pub min: f64,
    pub max: f64,
}

/// Constraint on a generated batch: none, one-sided, or an interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Free,
    Above(f64),
    Below(f64),
    Between { min: f64, max: f64 },
}

impl Bound {
    /// Interval bound. `min` must be strictly less than `max`; anything else
    /// is a construction error, never a clamp.
    pub fn between(min: f64, max: f64) -> Result<Self, InvalidRangeError> {
        if min >= max {
            return Err(InvalidRangeError { min, max });
        }
        Ok(Self::Between { min, max })
    }
}

/// Range-constrained random sampler over an injected RNG.
///
/// Bounds are plausible, not guaranteed: each mode aims its draws at the
/// requested range, but the arithmetic can land just outside it. Callers
/// that need a hard bound must filter. Every batch is shuffled before it is
/// returned, so position carries no meaning.
#[derive(Debug)]
pub struct Sampler<R> {
    rng: R,
}

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn batch(&mut self, count: usize, bound: Bound) -> Vec<f64> {
        match bound {
            Bound::Free => self.unconstrained(count),
            Bound::Above(floor) => self.above(count, floor),
            Bound::Below(ceiling) => self.below(count, ceiling),
            Bound::Between { min, max } => self.ranged(count, min, max),
        }
    }

    /// Unconstrained samples, dispersed symmetrically across roughly
    /// `[-2^30, 2^30]`.
    pub fn unconstrained(&mut self, count: usize) -> Vec<f64> {
        self.collect(count, |rng| {
            rng.random::<f64>() * (rng.random_range(0..DRAW_WIDTH) - HALF_WIDTH) as f64
        })
    }

    /// Samples intended to exceed `floor`. A non-negative floor holds
    /// unconditionally; a negative one can be undershot when the integer
    /// draw lands on zero.
    pub fn above(&mut self, count: usize, floor: f64) -> Vec<f64> {
        self.collect(count, move |rng| {
            rng.random_range(0..DRAW_WIDTH) as f64 + rng.random::<f64>() + floor
        })
    }

    /// Samples intended to stay below `ceiling`.
    pub fn below(&mut self, count: usize, ceiling: f64) -> Vec<f64> {
        if ceiling < 0.0 {
            self.collect(count, move |rng| {
                (rng.random_range(0..DRAW_WIDTH) - DRAW_WIDTH) as f64 - rng.random::<f64>()
                    + ceiling
            })
        } else {
            // A ceiling under 1 truncates to an empty draw; it contributes
            // nothing instead of panicking.
            let cap = ceiling as i64;
            self.collect(count, move |rng| {
                let head = if cap > 0 {
                    rng.random_range(0..cap) as f64
                } else {
                    0.0
                };
                head - rng.random::<f64>() - rng.random_range(0..DRAW_WIDTH) as f64
            })
        }
    }

    /// Samples aimed at `[min, max]`. Fails when `min >= max`; the caller
    /// never receives a partial batch.
    pub fn between(
        &mut self,
        count: usize,
        max: f64,
        min: f64,
    ) -> Result<Vec<f64>, InvalidRangeError> {
        Bound::between(min, max)?;
        Ok(self.ranged(count, min, max))
    }

    fn ranged(&mut self, count: usize, min: f64, max: f64) -> Vec<f64> {
        if max < 0.0 {
            let span = max.ceil() as i64 - min.floor() as i64 + 1;
            self.collect(count, move |rng| {
                -((rng.random_range(0..span) as f64 + min) + rng.random::<f64>())
            })
        } else if min < 0.0 {
            let head = max.ceil() as i64 + 1;
            let shift = min.abs().floor();
            self.collect(count, move |rng| {
                (rng.random_range(0..head) as f64 - shift) + rng.random::<f64>()
            })
        } else {
            let span = max.ceil() as i64 - min.floor() as i64 + 1;
            self.collect(count, move |rng| {
                (rng.random_range(0..span) as f64 + min) + rng.random::<f64>()
            })
        }
    }

    fn collect(&mut self, count: usize, mut draw: impl FnMut(&mut R) -> f64) -> Vec<f64> {
        let mut batch: Vec<f64> = (0..count).map(|_| draw(&mut self.rng)).collect();
        batch.shuffle(&mut self.rng);
        batch
    }
}
