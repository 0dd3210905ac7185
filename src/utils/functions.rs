use polars::prelude::*;
use std::f64::consts::PI;

/// Azimuthal difference `a - b` wrapped into $`(-\pi, \pi]`$.
///
/// Inputs are assumed to lie in $`(-\pi, \pi]`$ themselves (the range of
/// `atan2` and of stored `phi` columns), so a single correction suffices.
pub fn delta_phi(a: Expr, b: Expr) -> Expr {
    let dphi = a - b;
    when(dphi.clone().gt(lit(PI)))
        .then(dphi.clone() - lit(2.0 * PI))
        .when(dphi.clone().lt_eq(lit(-PI)))
        .then(dphi.clone() + lit(2.0 * PI))
        .otherwise(dphi)
}

/// Transverse mass of two objects,
/// $`m_T = \sqrt{2 p_{T,a} p_{T,b} (1 - \cos\Delta\phi)}`$.
///
/// Insensitive to the longitudinal momentum of either object, which makes it
/// the standard observable for pairings with an undetected neutrino.
pub fn transverse_mass(pt_a: Expr, phi_a: Expr, pt_b: Expr, phi_b: Expr) -> Expr {
    (lit(2.0) * pt_a * pt_b * (lit(1.0) - delta_phi(phi_a, phi_b).cos())).sqrt()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use polars::prelude::*;
    use std::f64::consts::PI;

    use super::*;
    use crate::tests::val;

    fn eval(expr: Expr) -> f64 {
        let df = DataFrame::new(vec![Series::new("row".into(), &[0i32]).into()]).unwrap();
        let res = df.lazy().with_column(expr.alias("out")).collect().unwrap();
        val(&res, "out", 0)
    }

    #[test]
    fn test_delta_phi_no_wrap() {
        assert_relative_eq!(eval(delta_phi(lit(0.1), lit(-0.1))), 0.2, epsilon = 1e-12);
        assert_relative_eq!(eval(delta_phi(lit(-1.0), lit(2.0))), -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_delta_phi_wraps() {
        assert_relative_eq!(
            eval(delta_phi(lit(3.0), lit(-3.0))),
            6.0 - 2.0 * PI,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            eval(delta_phi(lit(-3.0), lit(3.0))),
            2.0 * PI - 6.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_delta_phi_boundary() {
        // the wrapped range is (-pi, pi]: a separation of exactly pi stays at +pi
        assert_relative_eq!(eval(delta_phi(lit(PI), lit(0.0))), PI, epsilon = 1e-12);
        assert_relative_eq!(eval(delta_phi(lit(0.0), lit(PI))), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_transverse_mass() {
        assert_relative_eq!(
            eval(transverse_mass(
                lit(40.0),
                lit(0.0),
                lit(20.0),
                lit(PI / 2.0)
            )),
            40.0,
            epsilon = 1e-9
        );
        // symmetric in the two objects
        assert_relative_eq!(
            eval(transverse_mass(
                lit(20.0),
                lit(PI / 2.0),
                lit(40.0),
                lit(0.0)
            )),
            40.0,
            epsilon = 1e-9
        );
        // aligned objects have vanishing transverse mass
        assert_relative_eq!(
            eval(transverse_mass(lit(40.0), lit(0.3), lit(20.0), lit(0.3))),
            0.0,
            epsilon = 1e-9
        );
    }
}
