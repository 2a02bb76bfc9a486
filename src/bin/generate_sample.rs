//! Writes a deterministic `sample_jobs.csv` for trying the viewer offline
//! (File → Open…). Usage: `generate_sample [OUTPUT]`.

use anyhow::{Context, Result};

/// Seeded xoshiro256** so every run writes the same postings.
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Normally distributed salary around `mean` (Box-Muller).
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// `1234567` -> `1,234,567`.
fn with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_jobs.csv".to_string());

    let mut rng = SimpleRng::new(42);

    // (raw city spelling variants, localities, salary median)
    let cities: [(&[&str], &[&str], f64); 4] = [
        (&["mumbai", "Mumbai", " MUMBAI "], &["Andheri", "Bandra", "Powai", "Colaba", "Dadar"], 42_000.0),
        (&["pune", "Pune"], &["Baner", "Hinjewadi", "Kothrud", "Viman Nagar"], 35_000.0),
        (&["new delhi", "New Delhi"], &["Saket", "Karol Bagh", "Dwarka", "Connaught Place", "Lajpat Nagar", "Rohini"], 38_000.0),
        (&["navi-mumbai"], &["Vashi", "Nerul"], 30_000.0),
    ];
    let titles = ["Chef", "Delivery Executive", "Accountant", "Software Engineer", "Receptionist", "Sales Associate", "Driver"];

    let file = std::fs::File::create(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(["Job Title", "City", "Salary", "Locality"])?;

    let mut rows = 0;
    for (spellings, localities, median) in &cities {
        for _ in 0..40 {
            let salary = rng.gauss(*median, median * 0.25).max(8_000.0).round() as u64;
            let salary_text = match rng.next_u64() % 10 {
                0 => "N/A".to_string(),
                1 | 2 => format!("{salary}"),
                3 => format!("Rs {}/month", with_commas(salary)),
                _ => format!("₹{}", with_commas(salary)),
            };
            writer.write_record([
                rng.pick(&titles),
                rng.pick(spellings),
                salary_text.as_str(),
                rng.pick(localities),
            ])?;
            rows += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} job postings to {output_path}");
    Ok(())
}
