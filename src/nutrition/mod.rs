//! Nutrition arithmetic: macro totals, portion scaling, aggregation over meals and
//! progress against daily goals.

pub mod aggregate;
pub mod goals;
pub mod portion;

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Summed values for the four macros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Totals {
    pub const ZERO: Totals = Totals {
        calories: 0.0,
        proteins: 0.0,
        carbs: 0.0,
        fats: 0.0,
    };

    pub fn new(calories: f64, proteins: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            proteins,
            carbs,
            fats,
        }
    }

    /// Applies `f` to every macro independently.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            proteins: f(self.proteins),
            carbs: f(self.carbs),
            fats: f(self.fats),
        }
    }

    /// Rounds every macro to the nearest integer, halves away from zero.
    pub fn rounded(self) -> Self {
        self.map(f64::round)
    }

    /// Divides every macro by `divisor` and rounds the result.
    ///
    /// A zero divisor yields zero totals instead of infinities.
    pub fn divided_rounded(self, divisor: f64) -> Self {
        if divisor == 0.0 {
            return Self::ZERO;
        }
        self.map(|v| (v / divisor).round())
    }

    pub fn scaled(self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Totals) -> Totals {
        Totals {
            calories: self.calories + rhs.calories,
            proteins: self.proteins + rhs.proteins,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
        }
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, rhs: Totals) {
        *self = *self + rhs;
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Totals {
        iter.fold(Totals::ZERO, Add::add)
    }
}

/// Anything carrying absolute macro values that can be summed: meals,
/// recipe ingredients and totals themselves.
pub trait Nutrients {
    fn nutrients(&self) -> Totals;
}

impl Nutrients for Totals {
    fn nutrients(&self) -> Totals {
        *self
    }
}

#[cfg(test)]
mod totals_tests {
    use super::*;

    #[test]
    fn test_add_and_sum_are_elementwise() {
        let a = Totals::new(100.0, 10.0, 20.0, 5.0);
        let b = Totals::new(50.0, 1.0, 2.0, 0.5);
        assert_eq!(a + b, Totals::new(150.0, 11.0, 22.0, 5.5));
        let summed: Totals = vec![a, b, Totals::ZERO].into_iter().sum();
        assert_eq!(summed, a + b);
    }

    #[test]
    fn test_divided_rounded_handles_zero_divisor() {
        let t = Totals::new(300.0, 25.0, 41.0, 9.0);
        assert_eq!(t.divided_rounded(2.0), Totals::new(150.0, 13.0, 21.0, 5.0));
        assert_eq!(t.divided_rounded(0.0), Totals::ZERO);
    }
}
