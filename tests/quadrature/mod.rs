use proptest::prelude::*;

use lpquad::error::IntegrationError;
use lpquad::integration::quadrature::{GaussKronrod, Quadrature};

#[test]
fn parabola() {
    let estimate = GaussKronrod::default().integrate(|x| x * x, 0.0, 2.0).unwrap();
    assert!((estimate.value - 8.0 / 3.0).abs() < 1e-9);
    assert!(estimate.abs_error < 1e-12);
}

#[test]
fn exponential() {
    let estimate = GaussKronrod::default().integrate(f64::exp, 0.0, 1.0).unwrap();
    assert!((estimate.value - (std::f64::consts::E - 1.0)).abs() < 1e-12);
}

#[test]
fn non_finite_integrand() {
    let result = GaussKronrod::default().integrate(|x| if x > 0.5 { f64::INFINITY } else { x }, 0.0, 1.0);
    assert!(matches!(result, Err(IntegrationError::NonFinite { .. })));
}

proptest! {
    #[test]
    fn polynomials_up_to_degree_three(
        a in -5.0_f64..5.0, width in 0.0_f64..5.0, c0 in -3.0_f64..3.0, c3 in -3.0_f64..3.0,
    ) {
        let b = a + width;
        let antiderivative = |x: f64| c0 * x + c3 * x.powi(4) / 4.0;
        let exact = antiderivative(b) - antiderivative(a);

        let estimate = GaussKronrod::default().integrate(|x| c0 + c3 * x.powi(3), a, b).unwrap();
        prop_assert!((estimate.value - exact).abs() <= 1e-9 * (1.0 + exact.abs()));
    }

    #[test]
    fn reversing_limits_negates(a in -5.0_f64..5.0, b in -5.0_f64..5.0) {
        let forward = GaussKronrod::default().integrate(f64::cos, a, b).unwrap();
        let backward = GaussKronrod::default().integrate(f64::cos, b, a).unwrap();
        prop_assert_eq!(forward.value, -backward.value);
    }
}
