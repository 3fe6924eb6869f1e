//! ASCII schematics of the two coupling topologies.
//!
//! Top-C places the coupling capacitors in series along the signal line:
//!
//! ```text
//!                Cs12
//!   IN ──────┬──────┤├──────┬────── OUT
//!            │              │
//!         ┌──┴──┐        ┌──┴──┐
//!         │     │        │     │
//!         Cp1  L1        Cp2  L2
//!         │     │        │     │
//!         └──┬──┘        └──┬──┘
//!            │              │
//!           GND            GND
//! ```
//!
//! Shunt-C joins the tank bottoms with a coupling rail that returns to ground
//! at the middle tank.

use crate::design::Topology;
use crate::network::coupling_label;

const TOP_C_SEGMENT: &str = "──────┤├──────┬";
const SHUNT_C_SEGMENT: &str = "────────────┬";
const LINE_HEAD: &str = "  IN ──────┬";
const LINE_TAIL: &str = "────── OUT";

/// Column of the first tank's tap on the signal line.
const FIRST_TAP: usize = 11;

/// Lines of the schematic for `order` resonators.
pub fn topology_diagram(topology: Topology, order: usize) -> Vec<String> {
    match topology {
        Topology::TopC => top_c(order),
        Topology::ShuntC => shunt_c(order),
    }
}

/// A fixed-width row of characters with centred placement.
struct Row(Vec<char>);

impl Row {
    fn blank(width: usize) -> Self {
        Row(vec![' '; width])
    }

    fn put(&mut self, centre: usize, text: &str) {
        let len = text.chars().count() as isize;
        let start = centre as isize - len / 2;
        for (j, ch) in text.chars().enumerate() {
            let at = start + j as isize;
            if at >= 0 && (at as usize) < self.0.len() {
                self.0[at as usize] = ch;
            }
        }
    }

    fn finish(self) -> String {
        self.0.into_iter().collect()
    }
}

fn signal_line(segment: &str, order: usize) -> String {
    format!("{LINE_HEAD}{}{LINE_TAIL}", segment.repeat(order.saturating_sub(1)))
}

fn taps(segment: &str, order: usize) -> Vec<usize> {
    let step = segment.chars().count();
    (0..order).map(|i| FIRST_TAP + i * step).collect()
}

fn tank_rows(taps: &[usize], width: usize) -> Vec<String> {
    let row = |cells: &dyn Fn(usize) -> String| {
        let mut r = Row::blank(width);
        for (i, &pos) in taps.iter().enumerate() {
            r.put(pos, &cells(i));
        }
        r.finish()
    };
    vec![
        row(&|_| "┌──┴──┐".to_string()),
        row(&|_| "│     │".to_string()),
        row(&|i| format!("Cp{:<2} L{}", i + 1, i + 1)),
        row(&|_| "│     │".to_string()),
        row(&|_| "└──┬──┘".to_string()),
    ]
}

fn wires(taps: &[usize], width: usize, text: &str) -> String {
    let mut r = Row::blank(width);
    for &pos in taps {
        r.put(pos, text);
    }
    r.finish()
}

fn top_c(order: usize) -> Vec<String> {
    let main = signal_line(TOP_C_SEGMENT, order);
    let width = main.chars().count();
    let taps = taps(TOP_C_SEGMENT, order);

    let mut labels = Row::blank(width);
    for (i, pair) in taps.windows(2).enumerate() {
        labels.put((pair[0] + pair[1]) / 2, &coupling_label(i));
    }

    let mut lines = vec![labels.finish(), main, wires(&taps, width, "│")];
    lines.extend(tank_rows(&taps, width));
    lines.push(wires(&taps, width, "│"));
    lines.push(wires(&taps, width, "GND"));
    lines
}

fn shunt_c(order: usize) -> Vec<String> {
    let main = signal_line(SHUNT_C_SEGMENT, order);
    let width = main.chars().count();
    let taps = taps(SHUNT_C_SEGMENT, order);

    let mut rail = Row::blank(width);
    for (i, &pos) in taps.iter().enumerate() {
        let junction = if i == 0 {
            "├"
        } else if i == order - 1 {
            "┤"
        } else {
            "┼"
        };
        rail.put(pos, junction);
        if let Some(&next) = taps.get(i + 1) {
            for c in rail.0.iter_mut().take(next).skip(pos + 1) {
                *c = '─';
            }
            rail.put((pos + next) / 2, &coupling_label(i));
        }
    }

    let ground = taps.get(order / 2).copied().unwrap_or(FIRST_TAP);
    let mut ground_wire = Row::blank(width);
    ground_wire.put(ground, "│");
    let mut ground_label = Row::blank(width);
    ground_label.put(ground, "GND");

    let mut lines = vec![main, wires(&taps, width, "│")];
    lines.extend(tank_rows(&taps, width));
    lines.push(wires(&taps, width, "│"));
    lines.push(rail.finish());
    lines.push(ground_wire.finish());
    lines.push(ground_label.finish());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(line: &str, needle: char) -> Vec<usize> {
        line.chars()
            .enumerate()
            .filter(|(_, c)| *c == needle)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_top_c_taps_line_up_with_tanks() {
        let lines = topology_diagram(Topology::TopC, 3);
        assert_eq!(lines.len(), 10);
        assert_eq!(col(&lines[1], '┬'), vec![11, 26, 41]);
        assert_eq!(col(&lines[3], '┴'), vec![11, 26, 41]);
        assert!(lines[0].contains("Cs12") && lines[0].contains("Cs23"));
        assert!(lines[5].contains("Cp3  L3"));
        assert!(lines[1].ends_with("OUT"));
    }

    #[test]
    fn test_shunt_c_rail() {
        let lines = topology_diagram(Topology::ShuntC, 4);
        let rail = &lines[8];
        assert_eq!(col(rail, '├'), vec![11]);
        assert_eq!(col(rail, '┤'), vec![11 + 3 * 13]);
        assert_eq!(col(rail, '┼').len(), 2);
        assert!(rail.contains("Cs34"));
        assert_eq!(col(&lines[9], '│'), vec![11 + 2 * 13]);
        assert_eq!(lines[10].trim(), "GND");
    }

    #[test]
    fn test_two_tank_diagrams() {
        assert!(topology_diagram(Topology::TopC, 2)[0].contains("Cs12"));
        assert!(topology_diagram(Topology::ShuntC, 2)[8].contains("Cs12"));
    }
}
