//! Periodic series evaluation.
//!
//! VSOP87-style tables group periodic terms by the power of time they are
//! multiplied with:
//!
//! ```text
//! X(t) = Σₐ tᵃ · Σᵢ Aᵢ · cos(Bᵢ + Cᵢ·t)
//! ```

use crate::math::{cos, powi};

/// One periodic term `A · cos(B + C·t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    /// Amplitude, in the unit of the series result
    pub amplitude: f64,
    /// Phase in radians
    pub phase: f64,
    /// Frequency in radians per unit of `t`
    pub frequency: f64,
}

impl PeriodicTerm {
    /// Creates a periodic term.
    #[must_use]
    pub const fn new(amplitude: f64, phase: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            phase,
            frequency,
        }
    }

    /// Value of this term at `t`.
    #[inline]
    #[must_use]
    pub fn value(&self, t: f64) -> f64 {
        self.amplitude * cos(self.phase + self.frequency * t)
    }
}

/// Evaluates a table of term groups at `t`.
///
/// Group `a` of `table` is multiplied by `tᵃ`. An empty table, or empty
/// groups, contribute zero.
///
/// # Example
/// ```
/// # use meeus_sun::series::{evaluate, PeriodicTerm};
/// // 2 + t·(3·cos(0))
/// let table: [&[PeriodicTerm]; 2] = [
///     &[PeriodicTerm::new(2.0, 0.0, 0.0)],
///     &[PeriodicTerm::new(3.0, 0.0, 0.0)],
/// ];
/// assert_eq!(evaluate(&table, 0.5), 3.5);
/// ```
#[must_use]
pub fn evaluate<S: AsRef<[PeriodicTerm]>>(table: &[S], t: f64) -> f64 {
    let mut result = 0.0;
    for (power, group) in (0_i32..).zip(table) {
        let group_sum: f64 = group.as_ref().iter().map(|term| term.value(t)).sum();
        result += group_sum * powi(t, power);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_empty_table_is_zero() {
        let table: [&[PeriodicTerm]; 0] = [];
        assert_eq!(evaluate(&table, 1.7), 0.0);

        let table: [&[PeriodicTerm]; 2] = [&[], &[]];
        assert_eq!(evaluate(&table, 1.7), 0.0);
    }

    #[test]
    fn test_single_term() {
        let table: [&[PeriodicTerm]; 1] = [&[PeriodicTerm::new(2.0, PI, 0.0)]];
        assert!((evaluate(&table, 123.0) + 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_power_weighting() {
        let one = PeriodicTerm::new(1.0, 0.0, 0.0);
        let table: [&[PeriodicTerm]; 3] = [&[one], &[one, one], &[one]];
        // 1 + 2t + t²
        assert!((evaluate(&table, 3.0) - 16.0).abs() < EPSILON);
        assert!((evaluate(&table, 0.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_frequency_and_phase() {
        let term = PeriodicTerm::new(1.0, PI / 2.0, PI / 2.0);
        // cos(π/2 + π/2) = -1
        assert!((term.value(1.0) + 1.0).abs() < EPSILON);

        let table = [[term]];
        assert!((evaluate(&table, 1.0) + 1.0).abs() < EPSILON);
    }
}
