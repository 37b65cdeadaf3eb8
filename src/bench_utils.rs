use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{loader::RawRow, summary::DEFAULT_BASELINE};

#[derive(Clone, Debug)]
pub struct ResultsDataset {
    pub rows: Vec<RawRow>,
    pub subjects: usize,
    pub variants: Vec<String>,
}

impl ResultsDataset {
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Renders the dataset as CSV text, header included.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("subject,variant,value\n");
        for row in &self.rows {
            out.push_str(&format!("{},{},{}\n", row.subject, row.variant, row.value));
        }
        out
    }
}

#[derive(Clone, Copy, Debug)]
pub enum DatasetShape {
    /// Every subject has a result for every variant.
    Complete,
    /// Each non-baseline result is present with probability `coverage`.
    Partial { coverage: f64 },
    /// Like `Complete`, with a fraction of values replaced by junk text.
    Noisy { junk_ratio: f64 },
}

/// Builds a deterministic results table: every subject gets a baseline
/// result, then one result per variant according to `shape`.
pub fn generate_dataset(
    shape: DatasetShape,
    subjects: usize,
    variants: usize,
    seed: u64,
) -> ResultsDataset {
    assert!(subjects > 0, "subjects must be positive");
    let mut rng = StdRng::seed_from_u64(seed);
    let variant_names: Vec<String> = (0..variants).map(|idx| format!("opt{idx}")).collect();
    let mut rows = Vec::with_capacity(subjects * (variants + 1));
    for subject in 0..subjects {
        let name = format!("bench{subject}");
        let base: u64 = rng.gen_range(1_000..100_000);
        rows.push(RawRow::new(&name, DEFAULT_BASELINE, base.to_string()));
        for variant in &variant_names {
            let value = jitter(&mut rng, base);
            match shape {
                DatasetShape::Complete => {
                    rows.push(RawRow::new(&name, variant, value.to_string()));
                }
                DatasetShape::Partial { coverage } => {
                    if rng.r#gen::<f64>() < coverage {
                        rows.push(RawRow::new(&name, variant, value.to_string()));
                    }
                }
                DatasetShape::Noisy { junk_ratio } => {
                    let text = if rng.r#gen::<f64>() < junk_ratio {
                        "timeout".to_string()
                    } else {
                        value.to_string()
                    };
                    rows.push(RawRow::new(&name, variant, text));
                }
            }
        }
    }
    ResultsDataset {
        rows,
        subjects,
        variants: variant_names,
    }
}

fn jitter(rng: &mut StdRng, base: u64) -> u64 {
    let factor = rng.gen_range(0.5..1.5);
    ((base as f64) * factor).round().max(1.0) as u64
}
