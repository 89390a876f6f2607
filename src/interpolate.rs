use crate::config::{Division, DuplicateCheck, Settings};
use crate::error::{ArithmeticFault, Error, Result};
use crate::point::Point;
use log::{debug, trace};
use rug::{Integer, Rational};

/// Numerator and denominator of `y_j * L_j(0)`, or `None` when `j` is out
/// of range.
///
/// Every point that is not equal to `points[j]` as a whole pair contributes
/// `x_i / (x_i - x_j)`. A distinct point sharing `x_j` therefore drives the
/// denominator to zero instead of being skipped.
pub fn lagrange_term(points: &[Point], j: usize) -> Option<(Integer, Integer)> {
    points.get(j).map(|pj| term(points, pj))
}

fn term(points: &[Point], pj: &Point) -> (Integer, Integer) {
    let mut num = pj.y().clone();
    let mut den = Integer::from(1);
    for pi in points.iter().filter(|p| *p != pj) {
        num *= pi.x();
        den *= Integer::from(pi.x() - pj.x());
    }
    (num, den)
}

#[derive(Debug, Clone, Default)]
pub struct Interpolator {
    settings: Settings,
}

impl Interpolator {
    pub fn new(settings: Settings) -> Self {
        Interpolator { settings }
    }

    /// Value at x = 0 of the polynomial through `points`.
    pub fn secret(&self, points: &[Point]) -> Result<Integer> {
        if points.is_empty() {
            return Err(Error::NoPoints);
        }
        if self.settings.duplicate_x == DuplicateCheck::Reject {
            check_distinct_x(points)?;
        }
        debug!("interpolating {} points at x = 0", points.len());
        match self.settings.division {
            Division::Rational => self.rational_sum(points),
            Division::PerTerm => self.per_term_sum(points),
        }
    }

    fn rational_sum(&self, points: &[Point]) -> Result<Integer> {
        let mut sum = Rational::new();
        for pj in points {
            let (num, den) = nonzero_term(points, pj)?;
            sum += Rational::from((num, den));
        }
        let (numer, denom) = sum.into_numer_denom();
        if denom != 1 {
            return Err(ArithmeticFault::NonIntegerSecret {
                value: format!("{}/{}", numer, denom),
            }
            .into());
        }
        Ok(numer)
    }

    fn per_term_sum(&self, points: &[Point]) -> Result<Integer> {
        let mut sum = Integer::new();
        for pj in points {
            let (num, den) = nonzero_term(points, pj)?;
            let (q, r) = num.div_rem(den);
            if r != 0 {
                return Err(ArithmeticFault::InexactDivision { x: pj.x().clone() }.into());
            }
            sum += q;
        }
        Ok(sum)
    }
}

fn nonzero_term(points: &[Point], pj: &Point) -> Result<(Integer, Integer)> {
    let (num, den) = term(points, pj);
    trace!("term x = {}: {} / {}", pj.x(), num, den);
    if den == 0 {
        return Err(ArithmeticFault::ZeroDenominator { x: pj.x().clone() }.into());
    }
    Ok((num, den))
}

/// Fails on two distinct points with the same x. Identical pairs pass,
/// matching the skip rule in `lagrange_term`.
pub fn check_distinct_x(points: &[Point]) -> Result<()> {
    for (m, a) in points.iter().enumerate() {
        if let Some(b) = points[m + 1..].iter().find(|b| b.x() == a.x() && *b != a) {
            return Err(ArithmeticFault::DuplicateX { x: b.x().clone() }.into());
        }
    }
    Ok(())
}

/// Reconstructs the secret with the default settings.
pub fn reconstruct_secret(points: &[Point]) -> Result<Integer> {
    Interpolator::default().secret(points)
}
