//! Writes a synthetic `heart.csv` with the same 14-column layout as the public
//! heart-disease table, so the dashboard can run without the real file.
//!
//! Usage: `generate_sample [output.csv]`

use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**)
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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Index drawn from unnormalised `weights`.
    fn pick(&mut self, weights: &[f64]) -> i64 {
        let total: f64 = weights.iter().sum();
        let mut r = self.next_f64() * total;
        for (i, w) in weights.iter().enumerate() {
            if r < *w {
                return i as i64;
            }
            r -= w;
        }
        weights.len() as i64 - 1
    }
}

#[derive(Serialize)]
struct Row {
    age: i64,
    sex: i64,
    cp: i64,
    trestbps: i64,
    chol: i64,
    fbs: i64,
    restecg: i64,
    thalach: i64,
    exang: i64,
    oldpeak: f64,
    slope: i64,
    ca: i64,
    thal: i64,
    target: i64,
}

fn generate_row(rng: &mut SimpleRng) -> Row {
    let target = i64::from(rng.chance(0.54));
    let sick = target == 1;

    let age = rng.gauss(if sick { 52.0 } else { 57.0 }, 9.0).round().clamp(29.0, 77.0) as i64;
    let sex = i64::from(rng.chance(if sick { 0.56 } else { 0.83 }));
    let cp = if sick {
        rng.pick(&[0.24, 0.25, 0.42, 0.09])
    } else {
        rng.pick(&[0.75, 0.07, 0.13, 0.05])
    };
    let restecg = if sick {
        rng.pick(&[0.41, 0.58, 0.01])
    } else {
        rng.pick(&[0.57, 0.40, 0.03])
    };
    let ca = if sick {
        rng.pick(&[0.79, 0.12, 0.05, 0.02, 0.02])
    } else {
        rng.pick(&[0.33, 0.32, 0.23, 0.12, 0.01])
    };
    let oldpeak = if sick {
        rng.gauss(0.55, 0.8)
    } else {
        rng.gauss(1.6, 1.3)
    };
    let thalach = rng.gauss(if sick { 158.0 } else { 139.0 }, 20.0).round() as i64;

    Row {
        age,
        sex,
        cp,
        trestbps: rng.gauss(131.0, 17.0).round().clamp(94.0, 200.0) as i64,
        chol: rng.gauss(246.0, 50.0).round().clamp(126.0, 564.0) as i64,
        fbs: i64::from(rng.chance(0.15)),
        restecg,
        thalach: thalach.clamp(71, 202),
        exang: i64::from(rng.chance(if sick { 0.14 } else { 0.55 })),
        oldpeak: (oldpeak.clamp(0.0, 6.2) * 10.0).round() / 10.0,
        slope: if sick { rng.pick(&[0.06, 0.29, 0.65]) } else { rng.pick(&[0.09, 0.66, 0.25]) },
        ca,
        thal: if sick { rng.pick(&[0.01, 0.04, 0.79, 0.16]) } else { rng.pick(&[0.01, 0.09, 0.26, 0.64]) },
        target,
    }
}

fn main() {
    let output_path = std::env::args().nth(1).unwrap_or_else(|| "heart.csv".to_string());
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(&output_path).expect("Failed to create output file");
    let n_rows = 303;
    for _ in 0..n_rows {
        writer
            .serialize(generate_row(&mut rng))
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush CSV writer");

    println!("Wrote {n_rows} records to {output_path}");
}
