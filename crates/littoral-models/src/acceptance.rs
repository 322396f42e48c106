//! Precomputed Metropolis acceptance factors.
//!
//! For each integer energy change `i` in `1..=k_max`:
//!
//! ```text
//! factor[i] = tau * exp(-i / (T * kB * s))
//! ```
//!
//! `kB` is the physical Boltzmann constant and `s` a scaling factor that
//! keeps the exponent representable (without it every factor underflows to
//! zero at any sensible `T`). `tau` is a dimensionless tuning scale.
//! `factor[0]` is pinned to 1 so a zero energy change is always accepted.

use littoral_core::ModelError;

/// Boltzmann constant in J/K (exact SI value).
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Largest `|ΔE|` a single exchange can produce: the moved Fluid cell loses
/// or gains at most three bonds at unit coupling.
pub const MAX_EXCHANGE_DELTA: usize = 3;

/// Default table length.
pub const DEFAULT_MAX_ENERGY_CHANGE: usize = 8;

/// Parameters of the acceptance table.
#[derive(Clone, Debug, PartialEq)]
pub struct AcceptanceParams {
    /// Simulation temperature `T`. Default: 14.0.
    pub temperature: f64,
    /// Dimensionless acceptance scale `tau`, in `(0, 1]`. Default: 0.574.
    pub tau: f64,
    /// Boltzmann constant `kB`. Default: [`BOLTZMANN`].
    pub boltzmann: f64,
    /// Exponent scaling factor `s`. Default: 1e23.
    pub scaling: f64,
    /// Largest tabulated energy change `k_max`, at least
    /// [`MAX_EXCHANGE_DELTA`]. Default: 8.
    pub max_energy_change: usize,
}

impl Default for AcceptanceParams {
    fn default() -> Self {
        Self {
            temperature: 14.0,
            tau: 0.574,
            boltzmann: BOLTZMANN,
            scaling: 1e23,
            max_energy_change: DEFAULT_MAX_ENERGY_CHANGE,
        }
    }
}

impl AcceptanceParams {
    /// Check every parameter against its domain.
    pub fn validate(&self) -> Result<(), ModelError> {
        let positive = |name: &'static str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ModelError::invalid(
                    name,
                    format!("must be finite and > 0, got {v}"),
                ))
            }
        };
        positive("temperature", self.temperature)?;
        positive("boltzmann", self.boltzmann)?;
        positive("scaling", self.scaling)?;
        if !self.tau.is_finite() || self.tau <= 0.0 || self.tau > 1.0 {
            return Err(ModelError::invalid(
                "tau",
                format!("must lie in (0, 1], got {}", self.tau),
            ));
        }
        if self.max_energy_change < MAX_EXCHANGE_DELTA {
            return Err(ModelError::invalid(
                "max_energy_change",
                format!(
                    "must cover the {MAX_EXCHANGE_DELTA}-bond exchange bound, got {}",
                    self.max_energy_change
                ),
            ));
        }
        let thermal = self.thermal_scale();
        if !thermal.is_finite() || thermal <= 0.0 {
            return Err(ModelError::invalid(
                "temperature",
                format!("T * kB * s must be finite and > 0, got {thermal}"),
            ));
        }
        Ok(())
    }

    /// `T * kB * s`, the denominator of the exponent.
    pub fn thermal_scale(&self) -> f64 {
        self.temperature * self.boltzmann * self.scaling
    }
}

/// Metropolis acceptance probabilities indexed by rounded energy change.
#[derive(Clone, Debug, PartialEq)]
pub struct AcceptanceTable {
    factors: Vec<f64>,
}

impl AcceptanceTable {
    /// Build the table for `0..=params.max_energy_change`.
    pub fn new(params: &AcceptanceParams) -> Result<Self, ModelError> {
        params.validate()?;
        let thermal = params.thermal_scale();
        let factors = (0..=params.max_energy_change)
            .map(|i| {
                if i == 0 {
                    1.0
                } else {
                    params.tau * (-(i as f64) / thermal).exp()
                }
            })
            .collect();
        Ok(Self { factors })
    }

    /// Acceptance probability for an exchange with energy change `delta`.
    ///
    /// Non-positive changes are always accepted. Positive changes are
    /// rounded to the nearest integer and looked up.
    ///
    /// # Errors
    ///
    /// `ModelError::EnergyOutOfRange` if `delta` is non-finite or rounds
    /// above the tabulated maximum.
    pub fn probability(&self, delta: f64) -> Result<f64, ModelError> {
        if delta <= 0.0 {
            return Ok(1.0);
        }
        let max = self.max_energy_change();
        let rounded = delta.round();
        if !rounded.is_finite() || rounded > max as f64 {
            return Err(ModelError::EnergyOutOfRange { delta: rounded, max });
        }
        Ok(self.factors[rounded as usize])
    }

    /// Largest tabulated energy change.
    pub fn max_energy_change(&self) -> usize {
        self.factors.len() - 1
    }

    /// All factors, index = energy change.
    pub fn factors(&self) -> &[f64] {
        &self.factors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_zero_is_one_and_tail_strictly_decreases() {
        let table = AcceptanceTable::new(&AcceptanceParams::default()).unwrap();
        let f = table.factors();
        assert_eq!(f.len(), 9);
        assert_eq!(f[0], 1.0);
        for i in 1..=8 {
            assert!(f[i] < f[i - 1], "factor[{i}] = {} not < {}", f[i], f[i - 1]);
            assert!(f[i] > 0.0 && f[i] <= 1.0);
        }
    }

    #[test]
    fn factor_one_matches_formula() {
        let params = AcceptanceParams::default();
        let table = AcceptanceTable::new(&params).unwrap();
        let expected = 0.574 * (-1.0 / (14.0 * BOLTZMANN * 1e23)).exp();
        assert!((table.factors()[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn non_positive_delta_always_accepted() {
        let table = AcceptanceTable::new(&AcceptanceParams::default()).unwrap();
        assert_eq!(table.probability(0.0).unwrap(), 1.0);
        assert_eq!(table.probability(-3.0).unwrap(), 1.0);
    }

    #[test]
    fn delta_is_rounded() {
        let table = AcceptanceTable::new(&AcceptanceParams::default()).unwrap();
        assert_eq!(table.probability(1.4).unwrap(), table.factors()[1]);
        assert_eq!(table.probability(2.6).unwrap(), table.factors()[3]);
        // 0.3 rounds to zero
        assert_eq!(table.probability(0.3).unwrap(), 1.0);
    }

    #[test]
    fn delta_above_range_fails_fast() {
        let table = AcceptanceTable::new(&AcceptanceParams::default()).unwrap();
        assert!(table.probability(8.0).is_ok());
        assert!(matches!(
            table.probability(9.0),
            Err(ModelError::EnergyOutOfRange { max: 8, .. })
        ));
        assert!(table.probability(f64::INFINITY).is_err());
        assert!(table.probability(f64::NAN).is_err());
    }

    #[test]
    fn validate_rejects_bad_params() {
        let bad = [
            AcceptanceParams {
                temperature: 0.0,
                ..Default::default()
            },
            AcceptanceParams {
                temperature: f64::NAN,
                ..Default::default()
            },
            AcceptanceParams {
                tau: 1.5,
                ..Default::default()
            },
            AcceptanceParams {
                tau: 0.0,
                ..Default::default()
            },
            AcceptanceParams {
                scaling: -1.0,
                ..Default::default()
            },
            AcceptanceParams {
                max_energy_change: 0,
                ..Default::default()
            },
            AcceptanceParams {
                max_energy_change: MAX_EXCHANGE_DELTA - 1,
                ..Default::default()
            },
        ];
        for params in bad {
            assert!(AcceptanceTable::new(&params).is_err(), "{params:?}");
        }
    }

    #[test]
    fn smallest_valid_table_covers_every_exchange() {
        let params = AcceptanceParams {
            max_energy_change: MAX_EXCHANGE_DELTA,
            ..Default::default()
        };
        let table = AcceptanceTable::new(&params).unwrap();
        for delta in -3..=3 {
            assert!(table.probability(delta as f64).is_ok(), "delta = {delta}");
        }
    }

    #[test]
    fn unscaled_constant_underflows() {
        // Without the scaling factor every non-zero factor is exactly zero.
        let params = AcceptanceParams {
            scaling: 1.0,
            ..Default::default()
        };
        let table = AcceptanceTable::new(&params).unwrap();
        assert!(table.factors()[1..].iter().all(|&f| f == 0.0));
    }
}
