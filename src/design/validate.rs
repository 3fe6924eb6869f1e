//! Filter spec validation.

use crate::error::{Result, SynthesisError};
use crate::prototype;
use crate::MAX_IMPEDANCE_OHMS;

use super::types::check_center_and_bandwidth;
use super::FilterSpec;

/// Validate a spec before synthesis.
///
/// Checks, in order:
/// - Center frequency and bandwidth (positive, finite, `BW < f0`)
/// - Impedance (positive, at most 1 MOhm)
/// - Q safety factor (positive)
/// - Order and ripple are supported by the response family
///
/// The first failure is returned; nothing is computed on a failed spec.
pub fn validate_spec(spec: &FilterSpec) -> Result<()> {
    check_center_and_bandwidth(spec.plan.center_hz, spec.plan.bandwidth_hz)?;

    let z0 = spec.impedance_ohms;
    if !z0.is_finite() || z0 <= 0.0 {
        return Err(SynthesisError::InvalidImpedance {
            value: z0,
            message: "impedance must be positive".to_string(),
        });
    }
    if z0 > MAX_IMPEDANCE_OHMS {
        return Err(SynthesisError::InvalidImpedance {
            value: z0,
            message: format!("exceeds {:.0} MOhm limit", MAX_IMPEDANCE_OHMS / 1e6),
        });
    }

    if !spec.q_safety.is_finite() || spec.q_safety <= 0.0 {
        return Err(SynthesisError::InvalidQSafety {
            value: spec.q_safety,
        });
    }

    prototype::family(spec.response, spec.ripple())?.check_order(spec.order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{FrequencyPlan, ResponseType, Topology};

    fn spec(response: ResponseType, order: usize) -> FilterSpec {
        let plan = FrequencyPlan::from_center(14.2e6, 500e3).unwrap();
        FilterSpec::new(response, Topology::TopC, order, plan)
    }

    #[test]
    fn test_valid_spec_passes() {
        assert!(validate_spec(&spec(ResponseType::Butterworth, 5)).is_ok());
        assert!(validate_spec(&spec(ResponseType::Chebyshev, 7)).is_ok());
    }

    #[test]
    fn test_even_chebyshev_rejected() {
        let err = validate_spec(&spec(ResponseType::Chebyshev, 4)).unwrap_err();
        assert!(matches!(err, SynthesisError::UnsupportedOrder { order: 4, .. }));
    }

    #[test]
    fn test_order_range() {
        assert!(validate_spec(&spec(ResponseType::Butterworth, 1)).is_err());
        assert!(validate_spec(&spec(ResponseType::Butterworth, 10)).is_err());
        assert!(validate_spec(&spec(ResponseType::Butterworth, 2)).is_ok());
        assert!(validate_spec(&spec(ResponseType::Butterworth, 9)).is_ok());
    }

    #[test]
    fn test_bad_ripple_rejected_only_for_chebyshev() {
        let s = spec(ResponseType::Chebyshev, 3).with_ripple_db(0.25);
        assert!(matches!(
            validate_spec(&s),
            Err(SynthesisError::UnsupportedRipple { .. })
        ));
        let s = spec(ResponseType::Butterworth, 3).with_ripple_db(0.25);
        assert!(validate_spec(&s).is_ok());
    }

    #[test]
    fn test_impedance_and_q_safety() {
        let s = spec(ResponseType::Butterworth, 3).with_impedance(0.0);
        assert!(matches!(validate_spec(&s), Err(SynthesisError::InvalidImpedance { .. })));
        let s = spec(ResponseType::Butterworth, 3).with_impedance(2e6);
        assert!(matches!(validate_spec(&s), Err(SynthesisError::InvalidImpedance { .. })));
        let s = spec(ResponseType::Butterworth, 3).with_q_safety(-1.0);
        assert!(matches!(validate_spec(&s), Err(SynthesisError::InvalidQSafety { .. })));
    }

    #[test]
    fn test_tampered_plan_is_caught() {
        let mut s = spec(ResponseType::Butterworth, 3);
        s.plan.bandwidth_hz = s.plan.center_hz * 2.0;
        assert!(matches!(validate_spec(&s), Err(SynthesisError::InvalidBandwidth { .. })));
    }
}
