use std::collections::HashMap;

use super::model::JobRecord;

/// Number of equal-width bins in the salary histogram.
pub const SALARY_BINS: usize = 15;

/// How many localities the locality chart keeps.
pub const TOP_LOCALITIES: usize = 10;

/// Sample points along the density curve.
pub const DENSITY_POINTS: usize = 200;

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Split `[min, max]` of `values` into `bins` equal-width bins and count.
///
/// The last bin is closed on the right. When every value is equal the range
/// becomes `[v - 0.5, v + 0.5]`. No values, no bins.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let (mut lo, mut hi) = min_max(values);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Kernel density estimate
// ---------------------------------------------------------------------------

/// Gaussian KDE of `values` with Scott's bandwidth, scaled to histogram counts
/// (`density * n * bin_width`) and sampled at `points` positions over
/// `[min, max]`.
///
/// Empty when there are fewer than two values or they have no spread.
pub fn density_curve(values: &[f64], bin_width: f64, points: usize) -> Vec<[f64; 2]> {
    let n = values.len();
    if n < 2 || points < 2 {
        return Vec::new();
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std_dev = variance.sqrt();
    if std_dev <= 0.0 || !std_dev.is_finite() {
        return Vec::new();
    }

    let bandwidth = std_dev * (n as f64).powf(-0.2);
    let norm = 1.0 / (n as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let scale = n as f64 * bin_width;

    let (lo, hi) = min_max(values);
    let step = (hi - lo) / (points - 1) as f64;
    (0..points)
        .map(|i| {
            let x = lo + step * i as f64;
            let density: f64 = values
                .iter()
                .map(|v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            [x, density * scale]
        })
        .collect()
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}

// ---------------------------------------------------------------------------
// Locality counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityCount {
    pub locality: String,
    pub count: usize,
}

/// Count postings per locality, most frequent first, keeping `limit` entries.
/// Ties keep the order in which localities first appear. Blank localities are
/// not counted.
pub fn top_localities(records: &[&JobRecord], limit: usize) -> Vec<LocalityCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<LocalityCount> = Vec::new();

    for record in records.iter().filter(|r| !r.locality.is_empty()) {
        match index.get(record.locality.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(record.locality.as_str(), counts.len());
                counts.push(LocalityCount {
                    locality: record.locality.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Non-missing salaries of `records`.
pub fn salaries(records: &[&JobRecord]) -> Vec<f64> {
    records.iter().filter_map(|r| r.salary).collect()
}
