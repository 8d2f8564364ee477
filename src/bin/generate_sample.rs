use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

const DEFAULT_OUTPUT: &str = "input/2025/day8.txt";
const DEFAULT_COUNT: usize = 1000;

/// Coordinates are drawn from `[0, EXTENT)`.
const EXTENT: f64 = 100_000.0;

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
}

/// One output line, written without a header.
#[derive(Serialize)]
struct Row {
    x: i64,
    y: i64,
    z: i64,
}

/// Points scattered around a handful of cluster centres, clipped to the cube.
fn generate_points(count: usize, rng: &mut SimpleRng) -> Vec<Row> {
    let centres: Vec<[f64; 3]> = (0..8)
        .map(|_| [rng.next_f64() * EXTENT, rng.next_f64() * EXTENT, rng.next_f64() * EXTENT])
        .collect();

    (0..count)
        .map(|i| {
            let c = centres[i % centres.len()];
            Row {
                x: coord(rng, c[0]),
                y: coord(rng, c[1]),
                z: coord(rng, c[2]),
            }
        })
        .collect()
}

fn coord(rng: &mut SimpleRng, mean: f64) -> i64 {
    rng.gauss(mean, EXTENT * 0.08).clamp(0.0, EXTENT - 1.0) as i64
}

/// Usage: `generate_sample [OUTPUT] [COUNT]`
fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()));
    let count = match args.next() {
        Some(n) => n.parse::<usize>().with_context(|| format!("invalid point count '{n}'"))?,
        None => DEFAULT_COUNT,
    };

    let mut rng = SimpleRng::new(42);
    let rows = generate_points(count, &mut rng);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&output)
        .with_context(|| format!("creating {}", output.display()))?;
    for row in &rows {
        writer.serialize(row).context("writing point")?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {} points to {}", rows.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_are_deterministic_and_in_range() {
        let a = generate_points(200, &mut SimpleRng::new(7));
        let b = generate_points(200, &mut SimpleRng::new(7));
        assert_eq!(a.len(), 200);
        for (p, q) in a.iter().zip(&b) {
            assert_eq!((p.x, p.y, p.z), (q.x, q.y, q.z));
            for v in [p.x, p.y, p.z] {
                assert!((0..EXTENT as i64).contains(&v));
            }
        }
    }

    #[test]
    fn test_rows_serialize_as_bare_triples() {
        let mut buf = Vec::new();
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut buf);
            writer.serialize(Row { x: 1, y: 20, z: 300 }).unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "1,20,300\n");
    }
}
