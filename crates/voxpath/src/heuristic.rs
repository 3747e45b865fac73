//! Distance heuristics over per-axis coordinate deltas.
//!
//! Every function takes `(dx, dy, dz)` and returns a non-negative estimate;
//! signs of the deltas are ignored. Which one is admissible depends on the
//! step costs a finder charges (see [`Heuristic::recommended_for`]).

use std::fmt;
use std::str::FromStr;

use voxpath_core::Point3;

use crate::backtrace::{SQRT2, SQRT3};
use crate::error::GridError;
use crate::movement::DiagonalMovement;

/// Signature shared by all heuristics.
pub type HeuristicFn = fn(i32, i32, i32) -> f64;

// Formulas take per-axis magnitudes, widened to f64 before any arithmetic.
type Magnitudes = [f64; 3];

#[inline]
fn magnitudes(dx: i32, dy: i32, dz: i32) -> Magnitudes {
    [f64::from(dx).abs(), f64::from(dy).abs(), f64::from(dz).abs()]
}

#[inline]
fn l1([x, y, z]: Magnitudes) -> f64 {
    x + y + z
}

#[inline]
fn l2([x, y, z]: Magnitudes) -> f64 {
    (x * x + y * y + z * z).sqrt()
}

#[inline]
fn linf([x, y, z]: Magnitudes) -> f64 {
    x.max(y).max(z)
}

#[inline]
fn diagonal(mut d: Magnitudes) -> f64 {
    d.sort_unstable_by(f64::total_cmp);
    let [dmin, dmid, dmax] = d;
    dmax + (SQRT2 - 1.0) * dmid + (SQRT3 - SQRT2) * dmin
}

/// Always 0. Turns best-first search into uniform-cost search.
#[inline]
pub fn null(_dx: i32, _dy: i32, _dz: i32) -> f64 {
    0.0
}

/// L1 distance. Admissible with face steps only.
#[inline]
pub fn manhattan(dx: i32, dy: i32, dz: i32) -> f64 {
    l1(magnitudes(dx, dy, dz))
}

/// Straight-line distance.
#[inline]
pub fn euclidean(dx: i32, dy: i32, dz: i32) -> f64 {
    l2(magnitudes(dx, dy, dz))
}

/// L∞ distance. Admissible when every step costs 1.
#[inline]
pub fn chebyshev(dx: i32, dy: i32, dz: i32) -> f64 {
    linf(magnitudes(dx, dy, dz))
}

/// Exact cost of the cheapest obstacle-free route when face, edge and corner
/// steps cost 1, √2 and √3.
#[inline]
pub fn octile(dx: i32, dy: i32, dz: i32) -> f64 {
    diagonal(magnitudes(dx, dy, dz))
}

/// Name → function lookup table.
pub const TABLE: [(&str, HeuristicFn); 5] = [
    ("null", null),
    ("manhattan", manhattan),
    ("euclidean", euclidean),
    ("chebyshev", chebyshev),
    ("octile", octile),
];

/// Look up a heuristic function by name.
pub fn by_name(name: &str) -> Option<HeuristicFn> {
    TABLE.iter().find(|(n, _)| *n == name).map(|&(_, f)| f)
}

/// A named handle to one of the heuristic functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Heuristic {
    Null,
    Manhattan,
    Euclidean,
    Chebyshev,
    Octile,
}

impl Heuristic {
    pub const ALL: [Self; 5] = [
        Self::Null,
        Self::Manhattan,
        Self::Euclidean,
        Self::Chebyshev,
        Self::Octile,
    ];

    pub fn name(self) -> &'static str {
        TABLE[self as usize].0
    }

    /// The underlying function.
    #[inline]
    pub fn func(self) -> HeuristicFn {
        TABLE[self as usize].1
    }

    #[inline]
    pub fn eval(self, dx: i32, dy: i32, dz: i32) -> f64 {
        (self.func())(dx, dy, dz)
    }

    /// Estimate between two points. Defined for any pair, even when their
    /// delta does not fit in an `i32`.
    #[inline]
    pub fn between(self, a: Point3, b: Point3) -> f64 {
        let (dx, dy, dz) = a.abs_delta(b);
        let d = [f64::from(dx), f64::from(dy), f64::from(dz)];
        match self {
            Self::Null => 0.0,
            Self::Manhattan => l1(d),
            Self::Euclidean => l2(d),
            Self::Chebyshev => linf(d),
            Self::Octile => diagonal(d),
        }
    }

    /// An admissible default for finders charging 1/√2/√3 per step.
    pub fn recommended_for(movement: DiagonalMovement) -> Self {
        match movement {
            DiagonalMovement::Never => Self::Manhattan,
            _ => Self::Octile,
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| GridError::UnknownHeuristic(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn reference_values() {
        assert_eq!(null(4, 5, 6), 0.0);
        assert_eq!(manhattan(1, 2, 3), 6.0);
        assert_eq!(euclidean(3, 4, 0), 5.0);
        assert_eq!(chebyshev(1, 5, 2), 5.0);
        let expected = 3.0 + (SQRT2 - 1.0) * 2.0 + (SQRT3 - SQRT2) * 1.0;
        assert!((octile(3, 2, 1) - expected).abs() < EPS);
    }

    #[test]
    fn null_is_always_zero() {
        for (dx, dy, dz) in [(0, 0, 0), (1, 0, 0), (-9, 4, 100)] {
            assert_eq!(null(dx, dy, dz), 0.0);
        }
    }

    #[test]
    fn octile_is_argument_order_independent() {
        let a = octile(3, 2, 1);
        for (dx, dy, dz) in [(1, 2, 3), (2, 3, 1), (1, 3, 2), (3, 1, 2), (-2, 1, -3)] {
            assert!((octile(dx, dy, dz) - a).abs() < EPS);
        }
    }

    #[test]
    fn octile_matches_unit_step_costs() {
        assert!((octile(1, 0, 0) - 1.0).abs() < EPS);
        assert!((octile(1, 1, 0) - SQRT2).abs() < EPS);
        assert!((octile(1, 1, 1) - SQRT3).abs() < EPS);
    }

    #[test]
    fn ordering_between_heuristics() {
        for (dx, dy, dz) in [(3, 2, 1), (0, 7, 2), (5, 5, 5), (1, 0, 0)] {
            let c = chebyshev(dx, dy, dz);
            let e = euclidean(dx, dy, dz);
            let o = octile(dx, dy, dz);
            let m = manhattan(dx, dy, dz);
            assert!(c <= e + EPS);
            assert!(e <= o + EPS);
            assert!(o <= m + EPS);
        }
    }

    #[test]
    fn lookup_by_name() {
        for h in Heuristic::ALL {
            let f = by_name(h.name()).unwrap();
            assert_eq!(f(3, 2, 1), h.eval(3, 2, 1));
            assert_eq!(h.to_string().parse::<Heuristic>(), Ok(h));
        }
        assert!(by_name("taxicab").is_none());
        assert!(matches!(
            "taxicab".parse::<Heuristic>(),
            Err(GridError::UnknownHeuristic(_))
        ));
    }

    #[test]
    fn between_points() {
        let a = Point3::new(0, 0, 0);
        let b = Point3::new(-3, 4, 0);
        assert_eq!(Heuristic::Euclidean.between(a, b), 5.0);
        assert_eq!(Heuristic::Manhattan.between(b, a), 7.0);
    }

    #[test]
    fn extreme_deltas_do_not_overflow() {
        let max = f64::from(i32::MAX);
        let min = f64::from(i32::MIN).abs();
        assert_eq!(manhattan(i32::MAX, 1, 0), max + 1.0);
        assert_eq!(manhattan(i32::MIN, i32::MIN, i32::MIN), 3.0 * min);
        assert_eq!(chebyshev(i32::MIN, 0, 0), min);
        assert_eq!(chebyshev(i32::MAX, i32::MIN, 3), min);
        assert_eq!(euclidean(i32::MIN, 0, 0), min);
        let o = octile(i32::MIN, i32::MAX, 0);
        assert!((o - (min + (SQRT2 - 1.0) * max)).abs() < 1.0);
        assert_eq!(null(i32::MIN, i32::MAX, i32::MIN), 0.0);
        for h in Heuristic::ALL {
            let v = h.eval(i32::MIN, i32::MIN, i32::MAX);
            assert!(v.is_finite() && v >= 0.0, "{h}");
        }
    }

    #[test]
    fn between_far_apart_points() {
        let a = Point3::new(i32::MIN, 0, 0);
        let b = Point3::new(i32::MAX, 0, 0);
        let span = f64::from(u32::MAX);
        assert_eq!(
            Heuristic::Euclidean.between(a, Point3::new(1, 0, 0)),
            2f64.powi(31) + 1.0
        );
        for h in [
            Heuristic::Manhattan,
            Heuristic::Euclidean,
            Heuristic::Chebyshev,
            Heuristic::Octile,
        ] {
            assert_eq!(h.between(a, b), span, "{h}");
            assert_eq!(h.between(b, a), span, "{h}");
        }
        let c = Point3::new(i32::MAX, i32::MIN, i32::MAX);
        let d = Point3::new(i32::MIN, i32::MAX, i32::MIN);
        assert_eq!(Heuristic::Manhattan.between(c, d), 3.0 * span);
        assert_eq!(Heuristic::Chebyshev.between(c, d), span);
    }

    #[test]
    fn between_agrees_with_eval_on_small_deltas() {
        let a = Point3::new(2, -1, 7);
        let b = Point3::new(-3, 4, 5);
        for h in Heuristic::ALL {
            assert!((h.between(a, b) - h.eval(5, -5, 2)).abs() < EPS, "{h}");
        }
    }

    #[test]
    fn recommended_defaults() {
        assert_eq!(
            Heuristic::recommended_for(DiagonalMovement::Never),
            Heuristic::Manhattan
        );
        assert_eq!(
            Heuristic::recommended_for(DiagonalMovement::Always),
            Heuristic::Octile
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_by_name() {
        let json = serde_json::to_string(&Heuristic::Octile).unwrap();
        assert_eq!(json, "\"octile\"");
        let back: Heuristic = serde_json::from_str("\"chebyshev\"").unwrap();
        assert_eq!(back, Heuristic::Chebyshev);
    }
}
