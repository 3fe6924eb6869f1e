//! Plain-language description of each response type.

use crate::design::ResponseType;

const BUTTERWORTH: &str = "\
Butterworth Bandpass Filter
===========================

A coupled-resonator bandpass filter is a chain of parallel LC tanks, all tuned
to the center frequency, joined by small coupling capacitors. The tanks set
where the passband sits; the coupling capacitors set how wide it is and what
shape it has. Each extra resonator steepens the skirts at the cost of more
parts and tighter tuning.

The Butterworth response is maximally flat: nothing in the passband is
boosted or cut relative to the center, and the response falls to -3 dB
exactly at the band edges. The price is a gentler transition into the
stopband than a Chebyshev filter of the same order.

Key parameters:
  - Center frequency (f0): middle of the passband
  - Bandwidth (BW): distance between the -3 dB points
  - Fractional BW: BW / f0, keep below 40% for accurate results

Inductor Q: the unloaded Q of every inductor should exceed (f0 / BW) * 2 to
keep insertion loss reasonable. Air-core coils typically reach 100-300.

Any resonator count from 2 to 9 is supported.
";

const CHEBYSHEV: &str = "\
Chebyshev Bandpass Filter
=========================

A coupled-resonator bandpass filter is a chain of parallel LC tanks, all tuned
to the center frequency, joined by small coupling capacitors. The tanks set
where the passband sits; the coupling capacitors set how wide it is and what
shape it has.

The Chebyshev response allows a small, controlled ripple across the passband
in exchange for a much sharper fall-off outside it. The ripple setting picks
the trade:
  - 0.1 dB: nearly flat, modest gain in selectivity
  - 0.5 dB: a good balance (default)
  - 1.0 dB: steepest skirts, visible passband ripple

Key parameters:
  - Center frequency (f0): middle of the passband
  - Bandwidth (BW): width of the passband
  - Fractional BW: BW / f0, keep below 40% for accurate results

Inductor Q: the unloaded Q of every inductor should exceed (f0 / BW) * 2.
Chebyshev designs are more sensitive to component loss than Butterworth.

Equal source and load impedances require an odd resonator count (3, 5, 7
or 9). Use Butterworth for even counts.
";

/// Description of how a response type behaves and when to choose it.
pub fn explain(response: ResponseType) -> &'static str {
    match response {
        ResponseType::Butterworth => BUTTERWORTH,
        ResponseType::Chebyshev => CHEBYSHEV,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_response_has_text() {
        assert!(explain(ResponseType::Butterworth).starts_with("Butterworth"));
        assert!(explain(ResponseType::Chebyshev).contains("odd resonator count"));
    }
}
