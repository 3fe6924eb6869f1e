//! Terminal plot of a magnitude sweep.

use crate::response::ResponsePoint;

/// Plot geometry.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub width: usize,
    pub height: usize,
    /// Floor of the dB axis (negative)
    pub db_min: f64,
    pub title: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 60,
            height: 10,
            db_min: -60.0,
            title: "Frequency Response".to_string(),
        }
    }
}

fn freq_to_col(f: f64, f_min: f64, f_max: f64, width: usize) -> usize {
    if f_min == f_max {
        return width / 2;
    }
    let (log_min, log_max) = (f_min.log10(), f_max.log10());
    let col = ((f.log10() - log_min) / (log_max - log_min) * (width - 1) as f64) as isize;
    col.clamp(0, width as isize - 1) as usize
}

fn db_to_row(db: f64, db_min: f64, height: usize) -> usize {
    let clamped = db.clamp(db_min, 0.0);
    let row = (-clamped / -db_min * (height - 1) as f64) as isize;
    row.clamp(0, height as isize - 1) as usize
}

fn short_freq(f: f64) -> String {
    if f >= 1e9 {
        format!("{:.2}G", f / 1e9)
    } else if f >= 1e6 {
        format!("{:.2}M", f / 1e6)
    } else if f >= 1e3 {
        format!("{:.2}k", f / 1e3)
    } else {
        format!("{:.1}", f)
    }
}

/// Filled magnitude plot with a -3 dB reference line and an `f0` marker.
///
/// Columns are log-spaced between the first and last sweep frequency.
pub fn render_ascii_plot(points: &[ResponsePoint], center_hz: f64, bandwidth_hz: f64, opts: &PlotOptions) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return "No data to plot".to_string();
    };
    let width = opts.width.max(2);
    let height = opts.height.max(2);
    let (f_min, f_max) = (first.frequency_hz, last.frequency_hz);

    let mut grid = vec![vec![' '; width]; height];

    for p in points {
        let col = freq_to_col(p.frequency_hz, f_min, f_max, width);
        let row = db_to_row(p.magnitude_db, opts.db_min, height);
        for line in grid.iter_mut().take(row + 1) {
            line[col] = '#';
        }
    }

    let row_3db = db_to_row(-3.0, opts.db_min, height);
    for c in grid[row_3db].iter_mut().filter(|c| **c == ' ') {
        *c = '-';
    }

    let col_f0 = freq_to_col(center_hz, f_min, f_max, width);
    for line in grid.iter_mut() {
        if matches!(line[col_f0], ' ' | '-') {
            line[col_f0] = '|';
        }
    }
    grid[row_3db][col_f0] = '+';

    let mut lines = vec![opts.title.clone(), "  dB".to_string()];
    for (row, cells) in grid.iter().enumerate() {
        // 0 dB wins when the -3 dB row collapses onto the top row
        let label = if row == 0 {
            Some(0)
        } else if row == height - 1 {
            Some(opts.db_min as i32)
        } else if row == row_3db {
            Some(-3)
        } else {
            None
        };
        let prefix = match label {
            Some(db) => format!("{db:4} |"),
            None => "     |".to_string(),
        };
        lines.push(format!("{prefix}{}", cells.iter().collect::<String>()));
    }
    lines.push(format!("     +{}", "-".repeat(width)));

    let axis = format!(
        "     {:>10}  {:>10}  {:>8}  {:>10}  {:>10}",
        short_freq(f_min),
        short_freq(center_hz - bandwidth_hz / 2.0),
        short_freq(center_hz),
        short_freq(center_hz + bandwidth_hz / 2.0),
        short_freq(f_max)
    );
    lines.push(axis.chars().take(6 + width).collect());
    lines.push("     Frequency (Hz)".to_string());

    lines.join("\n")
}
