use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Writes a synthetic CPI table shaped like StatCan table 18-10-0004-01.
#[derive(Parser)]
#[command(about = "Generate a synthetic CPI CSV for trying out food-cpi")]
struct Args {
    #[arg(long, default_value = "data/data.csv")]
    output: PathBuf,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 1960)]
    from_year: i32,
    #[arg(long, default_value_t = 2024)]
    to_year: i32,
}

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

// (name, DGUID, first year with published provincial data)
const GEOGRAPHIES: [(&str, &str, i32); 6] = [
    ("Canada", "2016A000011124", 1914),
    ("Ontario", "2016A000235", 1979),
    ("Quebec", "2016A000224", 1979),
    ("British Columbia", "2016A000259", 1979),
    ("Nova Scotia", "2016A000212", 1979),
    ("Whitehorse, Yukon", "2016A00056001009", 2002),
];

// (label, monthly inflation drift)
const CATEGORIES: [(&str, f64); 12] = [
    ("All-items", 0.0030),
    ("Food", 0.0032),
    ("Meat", 0.0034),
    ("Fish, seafood and other marine products", 0.0031),
    ("Dairy products and eggs", 0.0029),
    ("Fresh fruit", 0.0027),
    ("Fresh vegetables", 0.0033),
    ("Coffee and tea", 0.0026),
    ("Food purchased from restaurants", 0.0036),
    ("Shelter", 0.0035),
    ("Clothing and footwear", 0.0012),
    ("Gasoline", 0.0040),
];

const HEADER: [&str; 11] = [
    "REF_DATE",
    "GEO",
    "DGUID",
    "Products and product groups",
    "UOM",
    "UOM_ID",
    "SCALAR_FACTOR",
    "SCALAR_ID",
    "VECTOR",
    "VALUE",
    "STATUS",
];

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writer.write_record(HEADER)?;

    let mut rows = 0usize;
    let mut vector = 41690973u64;
    for (geo, dguid, published_from) in GEOGRAPHIES {
        for (category, drift) in CATEGORIES {
            vector += 1;
            let mut index = 12.0 + rng.gauss(0.0, 1.0);
            for year in args.from_year..=args.to_year {
                for month in 1..=12u32 {
                    index *= 1.0 + rng.gauss(drift, 0.004);
                    let (value, status) = if year < published_from {
                        (String::new(), "..")
                    } else {
                        (format!("{index:.1}"), "")
                    };
                    writer.write_record([
                        format!("{year:04}-{month:02}").as_str(),
                        geo,
                        dguid,
                        category,
                        "2002=100",
                        "17",
                        "units",
                        "0",
                        format!("v{vector}").as_str(),
                        value.as_str(),
                        status,
                    ])?;
                    rows += 1;
                }
            }
        }
    }
    writer.flush()?;

    println!(
        "Wrote {rows} rows ({} geographies × {} categories) to {}",
        GEOGRAPHIES.len(),
        CATEGORIES.len(),
        args.output.display()
    );
    Ok(())
}
