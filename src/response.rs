//! Ideal magnitude response of a designed filter.
//!
//! The lowpass prototype response is mapped onto the passband with the
//! narrowband bandpass transform
//!
//! ```text
//! W = (f / f0 - f0 / f) / FBW
//! ```
//!
//! - Butterworth: `|H|^2 = 1 / (1 + W^(2n))`
//! - Chebyshev:   `|H|^2 = 1 / (1 + eps^2 * Tn(W)^2)`,  `eps^2 = 10^(A/10) - 1`
//!
//! Component losses and coupling dispersion are ignored; this is the shape
//! the design is aiming for.

use serde::Serialize;

use crate::calculator::FilterResult;
use crate::design::ResponseType;
use crate::prototype::Ripple;

/// Number of sweep points used when none is requested.
pub const DEFAULT_SWEEP_POINTS: usize = 60;

/// Sweep half-width in multiples of the bandwidth.
pub const DEFAULT_SWEEP_SPAN: f64 = 3.0;

/// One point of a magnitude sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponsePoint {
    pub frequency_hz: f64,
    pub magnitude_db: f64,
}

/// Chebyshev polynomial of the first kind, `Tn(x)`, for any real `x`.
pub fn chebyshev_polynomial(n: usize, x: f64) -> f64 {
    let n_f = n as f64;
    if x.abs() <= 1.0 {
        (n_f * x.acos()).cos()
    } else if x > 1.0 {
        (n_f * x.acosh()).cosh()
    } else {
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        sign * (n_f * (-x).acosh()).cosh()
    }
}

/// Normalized lowpass frequency for `f` in a bandpass centred on `f0`.
pub fn bandpass_omega(frequency_hz: f64, center_hz: f64, fbw: f64) -> f64 {
    (frequency_hz / center_hz - center_hz / frequency_hz) / fbw
}

/// Lowpass prototype `|H(jW)|^2`.
pub fn lowpass_power_gain(response: ResponseType, order: usize, ripple: Option<Ripple>, omega: f64) -> f64 {
    match response {
        ResponseType::Butterworth => 1.0 / (1.0 + omega.abs().powi(2 * order as i32)),
        ResponseType::Chebyshev => {
            let eps2 = ripple.unwrap_or(Ripple::Db0_5).epsilon_squared();
            let t = chebyshev_polynomial(order, omega);
            1.0 / (1.0 + eps2 * t * t)
        }
    }
}

/// Magnitude of the designed filter at `frequency_hz`, in dB.
pub fn magnitude_db(result: &FilterResult, frequency_hz: f64) -> f64 {
    let spec = &result.spec;
    let ripple = spec.ripple().and_then(|db| Ripple::from_db(db).ok());
    let omega = bandpass_omega(frequency_hz, spec.center_hz(), result.fractional_bandwidth);
    10.0 * lowpass_power_gain(spec.response, spec.order, ripple, omega).log10()
}

/// Log-spaced sweep over `f0 * (1 +/- span * FBW)`.
///
/// The lower bound is clamped to stay above zero.
pub fn frequency_sweep(result: &FilterResult, span: f64, points: usize) -> Vec<ResponsePoint> {
    let f0 = result.spec.center_hz();
    let reach = span * result.fractional_bandwidth;
    let f_min = (f0 * (1.0 - reach)).max(f0 * 1e-3);
    let f_max = f0 * (1.0 + reach);
    let points = points.max(2);

    let (log_min, log_max) = (f_min.log10(), f_max.log10());
    (0..points)
        .map(|i| {
            let t = i as f64 / (points - 1) as f64;
            let frequency_hz = 10f64.powf(log_min + t * (log_max - log_min));
            ResponsePoint {
                frequency_hz,
                magnitude_db: magnitude_db(result, frequency_hz),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;
    use crate::design::{FilterSpec, FrequencyPlan, Topology};
    use approx::assert_abs_diff_eq;

    fn result(response: ResponseType, order: usize) -> FilterResult {
        let plan = FrequencyPlan::from_center(14.2e6, 500e3).unwrap();
        compute(&FilterSpec::new(response, Topology::TopC, order, plan)).unwrap()
    }

    #[test]
    fn test_chebyshev_polynomial() {
        assert_abs_diff_eq!(chebyshev_polynomial(3, 0.5), 4.0 * 0.125 - 3.0 * 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(chebyshev_polynomial(3, 2.0), 4.0 * 8.0 - 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(chebyshev_polynomial(3, -2.0), -26.0, epsilon = 1e-9);
        assert_abs_diff_eq!(chebyshev_polynomial(2, -2.0), 7.0, epsilon = 1e-9);
    }

    #[test]
    fn test_butterworth_band_edge_is_three_db() {
        let r = result(ResponseType::Butterworth, 5);
        let f0 = r.spec.center_hz();
        let fbw = r.fractional_bandwidth;
        // Upper edge where W = 1: f/f0 - f0/f = FBW
        let x = (fbw + (fbw * fbw + 4.0).sqrt()) / 2.0;
        assert_abs_diff_eq!(magnitude_db(&r, f0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(magnitude_db(&r, x * f0), -3.0103, epsilon = 1e-3);
    }

    #[test]
    fn test_chebyshev_ripple_bounded_in_passband() {
        let r = result(ResponseType::Chebyshev, 5);
        let f0 = r.spec.center_hz();
        for i in 0..50 {
            let f = f0 * (1.0 - 0.0150 + 0.0006 * i as f64);
            let omega = bandpass_omega(f, f0, r.fractional_bandwidth);
            if omega.abs() <= 1.0 {
                assert!(magnitude_db(&r, f) >= -0.5 - 1e-9);
            }
        }
    }

    #[test]
    fn test_sweep_is_log_spaced_and_bounded() {
        let r = result(ResponseType::Butterworth, 3);
        let sweep = frequency_sweep(&r, DEFAULT_SWEEP_SPAN, DEFAULT_SWEEP_POINTS);
        assert_eq!(sweep.len(), DEFAULT_SWEEP_POINTS);
        assert!(sweep.windows(2).all(|w| w[1].frequency_hz > w[0].frequency_hz));
        assert!(sweep.iter().all(|p| p.magnitude_db <= 1e-12));
    }
}
