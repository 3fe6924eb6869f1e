//! Unit-suffixed quantities: parsing user input and formatting results.
//!
//! Parsing accepts plain numbers or an SI-prefixed unit suffix
//! (`14.2MHz`, `500kHz`, `50ohm`, `1kΩ`). Formatting picks the largest
//! prefix the value reaches (`224.16 pF`, `560.40 nH`, `14.2 MHz`).

mod format;
mod parse;

pub use format::{format_capacitance, format_frequency, format_inductance, format_value, split_value_unit};
pub use parse::{parse_frequency, parse_impedance};
