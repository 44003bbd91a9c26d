//! Writes a directory of sample embedding CSVs for manual testing:
//! `cargo run --bin generate_sample [out_dir]`, then point the viewer's
//! "Load csvs" at the directory.

use std::path::Path;

use anyhow::{Context, Result};

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

/// One labelled cluster in embedding space.
struct Cluster {
    label: &'static str,
    center: [f64; 2],
    spread: f64,
    n_samples: usize,
}

fn write_embedding_csv(
    path: &Path,
    clusters: &[Cluster],
    batch: &str,
    rng: &mut SimpleRng,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating '{}'", path.display()))?;
    writer.write_record(["UMAP1", "UMAP2", "label", "batch"])?;

    for cluster in clusters {
        for _ in 0..cluster.n_samples {
            let x = rng.gauss(cluster.center[0], cluster.spread);
            let y = rng.gauss(cluster.center[1], cluster.spread);
            writer.write_record([
                format!("{x:.4}"),
                format!("{y:.4}"),
                cluster.label.to_string(),
                batch.to_string(),
            ])?;
        }
    }
    writer.flush()?;
    println!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_data".to_string());
    let out_dir = Path::new(&out_dir);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating '{}'", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);

    let run_a = [
        Cluster {
            label: "t_cell",
            center: [-4.0, 2.0],
            spread: 0.8,
            n_samples: 300,
        },
        Cluster {
            label: "b_cell",
            center: [3.0, 3.5],
            spread: 0.6,
            n_samples: 250,
        },
        Cluster {
            label: "monocyte",
            center: [1.0, -3.0],
            spread: 1.1,
            n_samples: 200,
        },
    ];
    let run_b = [
        Cluster {
            label: "t_cell",
            center: [-3.2, 1.4],
            spread: 0.9,
            n_samples: 280,
        },
        Cluster {
            label: "monocyte",
            center: [2.2, -2.1],
            spread: 1.0,
            n_samples: 220,
        },
    ];

    write_embedding_csv(&out_dir.join("run_a.csv"), &run_a, "a", &mut rng)?;
    write_embedding_csv(&out_dir.join("run_b.csv"), &run_b, "b", &mut rng)?;
    Ok(())
}
