use crate::point::Point;
use rug::Integer;

/// Evaluates `c[0] + c[1] x + ... + c[d] x^d` by Horner's rule.
pub fn eval_poly(c: &[Integer], x: &Integer) -> Integer {
    c.iter().rev().fold(Integer::new(), |mut acc, a| {
        acc *= x;
        acc += a;
        acc
    })
}

/// The points `(1, P(1)) .. (k, P(k))` of the polynomial with coefficients `c`.
pub fn points_from_coeffs(c: &[Integer], k: u64) -> Vec<Point> {
    (1..=k)
        .map(|i| {
            let x = Integer::from(i);
            let y = eval_poly(c, &x);
            Point::new(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner() {
        let c = vec![Integer::from(1), Integer::from(-1), Integer::from(1)];
        let ys: Vec<Integer> = points_from_coeffs(&c, 3)
            .iter()
            .map(|p| p.y().clone())
            .collect();
        assert_eq!(ys, vec![Integer::from(1), Integer::from(3), Integer::from(7)]);
        assert_eq!(eval_poly(&[], &Integer::from(9)), 0);
    }
}
