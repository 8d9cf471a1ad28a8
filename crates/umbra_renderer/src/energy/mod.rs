//! Multi-scatter energy compensation tables.
//!
//! `E(roughness, cos)` is the directional albedo of the single-scatter GGX
//! lobe with unit Fresnel, `E_avg(roughness)` its cosine-weighted
//! hemispherical average. Both are pre-integrated offline and read-only at
//! render time.
//!
//! Lookups use floor semantics: an exact key returns its own entry, a key
//! between two entries returns the lower one and a key below the first
//! entry returns the first. Nothing is interpolated.

mod data;

use crate::bdf::ggx::GgxLobe;
use crate::sampler::SampleSeed;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::sync::OnceLock;
use std::time::Instant;
use thiserror::Error;
use umbra_math::{Vec2, Vec3};

/// Largest number of cosine entries a roughness bucket may hold.
pub const MAX_BUCKET_LEN: usize = 32;

/// Smallest cosine the bake evaluates; the lobe is undefined at grazing.
const MIN_BAKE_COS: f32 = 1e-4;

/// Errors raised when a table is malformed.
#[derive(Error, Debug)]
pub enum EnergyTableError {
    #[error("energy table has no {0} entries")]
    Empty(&'static str),

    #[error("{table} table key is not finite at entry {index}")]
    NonFiniteKey { table: &'static str, index: usize },

    #[error("{table} table is not sorted by key at entry {index}")]
    Unsorted { table: &'static str, index: usize },

    #[error("roughness {roughness} has {len} cosine entries, at most {max} allowed")]
    BucketTooLarge {
        roughness: f32,
        len: usize,
        max: usize,
    },

    #[error("directional albedo {albedo} at roughness {roughness}, cos {cos} is outside [0, 1]")]
    DirectionalOutOfRange { roughness: f32, cos: f32, albedo: f32 },

    #[error("average albedo {albedo} at roughness {roughness} is outside [0, 1]")]
    AverageOutOfRange { roughness: f32, albedo: f32 },

    #[error("failed to decode energy table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write energy table: {0}")]
    Io(#[from] std::io::Error),
}

/// One sample of `E(roughness, cos)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEntry {
    pub roughness: f32,
    pub cos: f32,
    pub albedo: f32,
}

/// One sample of `E_avg(roughness)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageEntry {
    pub roughness: f32,
    pub albedo: f32,
}

/// Serialized form of [`EnergyTables`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyTableData {
    pub directional: Vec<EnergyEntry>,
    pub average: Vec<AverageEntry>,
}

/// Parameters of an offline bake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeConfig {
    /// Roughness keys, evenly spaced over `[0, 1]`
    pub roughness_steps: usize,
    /// Cosine keys per roughness, evenly spaced over `[0, 1]`
    pub cos_steps: usize,
    /// Monte Carlo samples per table entry
    pub samples: u32,
    pub seed: u64,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            roughness_steps: 32,
            cos_steps: 32,
            samples: 4096,
            seed: 0,
        }
    }
}

/// Contiguous run of directional entries sharing one roughness key.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bucket {
    roughness: f32,
    start: usize,
    end: usize,
}

/// Validated, immutable energy tables.
#[derive(Debug, Clone)]
pub struct EnergyTables {
    directional: Vec<EnergyEntry>,
    average: Vec<AverageEntry>,
    buckets: Vec<Bucket>,
}

static BUILTIN: OnceLock<EnergyTables> = OnceLock::new();

impl EnergyTables {
    /// Tables compiled into the crate.
    pub fn builtin() -> &'static EnergyTables {
        BUILTIN.get_or_init(|| {
            let directional = data::DIRECTIONAL
                .iter()
                .map(|&[roughness, cos, albedo]| EnergyEntry {
                    roughness,
                    cos,
                    albedo,
                })
                .collect();
            let average = data::AVERAGE
                .iter()
                .map(|&[roughness, albedo]| AverageEntry { roughness, albedo })
                .collect();
            Self::assemble(directional, average)
        })
    }

    /// Validate table data and index it for lookups.
    pub fn new(data: EnergyTableData) -> Result<Self, EnergyTableError> {
        let tables = Self::assemble(data.directional, data.average);
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables written by [`EnergyTables::to_json`].
    pub fn from_json<R: Read>(reader: R) -> Result<Self, EnergyTableError> {
        let data: EnergyTableData = serde_json::from_reader(reader)?;
        Self::new(data)
    }

    fn assemble(directional: Vec<EnergyEntry>, average: Vec<AverageEntry>) -> Self {
        let mut buckets: Vec<Bucket> = Vec::new();
        for (index, entry) in directional.iter().enumerate() {
            match buckets.last_mut() {
                Some(bucket) if bucket.roughness == entry.roughness => bucket.end = index + 1,
                _ => buckets.push(Bucket {
                    roughness: entry.roughness,
                    start: index,
                    end: index + 1,
                }),
            }
        }

        Self {
            directional,
            average,
            buckets,
        }
    }

    /// Check ordering, bucket sizes and value ranges.
    pub fn validate(&self) -> Result<(), EnergyTableError> {
        if self.directional.is_empty() {
            return Err(EnergyTableError::Empty("directional"));
        }
        if self.average.is_empty() {
            return Err(EnergyTableError::Empty("average"));
        }

        for (index, entry) in self.directional.iter().enumerate() {
            if !entry.roughness.is_finite() || !entry.cos.is_finite() {
                return Err(EnergyTableError::NonFiniteKey {
                    table: "directional",
                    index,
                });
            }
            if !(0.0..=1.0).contains(&entry.albedo) {
                return Err(EnergyTableError::DirectionalOutOfRange {
                    roughness: entry.roughness,
                    cos: entry.cos,
                    albedo: entry.albedo,
                });
            }
        }
        for (index, pair) in self.directional.windows(2).enumerate() {
            let (a, b) = (pair[0], pair[1]);
            let ordered = a.roughness < b.roughness || (a.roughness == b.roughness && a.cos < b.cos);
            if !ordered {
                return Err(EnergyTableError::Unsorted {
                    table: "directional",
                    index: index + 1,
                });
            }
        }
        for bucket in &self.buckets {
            let len = bucket.end - bucket.start;
            if len > MAX_BUCKET_LEN {
                return Err(EnergyTableError::BucketTooLarge {
                    roughness: bucket.roughness,
                    len,
                    max: MAX_BUCKET_LEN,
                });
            }
        }

        for (index, entry) in self.average.iter().enumerate() {
            if !entry.roughness.is_finite() {
                return Err(EnergyTableError::NonFiniteKey {
                    table: "average",
                    index,
                });
            }
            if !(0.0..=1.0).contains(&entry.albedo) {
                return Err(EnergyTableError::AverageOutOfRange {
                    roughness: entry.roughness,
                    albedo: entry.albedo,
                });
            }
        }
        for (index, pair) in self.average.windows(2).enumerate() {
            if pair[0].roughness >= pair[1].roughness {
                return Err(EnergyTableError::Unsorted {
                    table: "average",
                    index: index + 1,
                });
            }
        }

        Ok(())
    }

    /// Directional albedo `E(roughness, cos)`.
    pub fn directional_albedo(&self, roughness: f32, cos: f32) -> f32 {
        let bucket = self.buckets[floor_index(&self.buckets, |b| b.roughness <= roughness)];
        let entries = &self.directional[bucket.start..bucket.end];
        entries[floor_index(entries, |e| e.cos <= cos)].albedo
    }

    /// Average albedo `E_avg(roughness)`. 1.0 means no compensation.
    pub fn average_albedo(&self, roughness: f32) -> f32 {
        self.average[floor_index(&self.average, |e| e.roughness <= roughness)].albedo
    }

    /// Distinct roughness keys of the directional table, ascending.
    pub fn roughness_keys(&self) -> Vec<f32> {
        self.buckets.iter().map(|b| b.roughness).collect()
    }

    pub fn directional(&self) -> &[EnergyEntry] {
        &self.directional
    }

    pub fn average(&self) -> &[AverageEntry] {
        &self.average
    }

    pub fn to_data(&self) -> EnergyTableData {
        EnergyTableData {
            directional: self.directional.clone(),
            average: self.average.clone(),
        }
    }

    /// Write the tables as pretty-printed JSON.
    pub fn to_json<W: Write>(&self, writer: W) -> Result<(), EnergyTableError> {
        serde_json::to_writer_pretty(writer, &self.to_data())?;
        Ok(())
    }

    /// Write the tables as a Rust module in the format of the built-in data.
    pub fn to_rust<W: Write>(&self, mut writer: W) -> Result<(), EnergyTableError> {
        writeln!(writer, "//! Built-in multi-scatter energy tables.")?;
        writeln!(writer, "//!")?;
        writeln!(writer, "//! Generated file. Regenerate with `bake_energy --format rust`.")?;
        writeln!(writer)?;
        writeln!(writer, "/// `[roughness, cos, albedo]`, sorted by roughness then cos.")?;
        writeln!(writer, "#[rustfmt::skip]")?;
        writeln!(
            writer,
            "pub(super) static DIRECTIONAL: [[f32; 3]; {}] = [",
            self.directional.len()
        )?;
        for e in &self.directional {
            writeln!(writer, "    [{:?}, {:?}, {:?}],", e.roughness, e.cos, e.albedo)?;
        }
        writeln!(writer, "];")?;
        writeln!(writer)?;
        writeln!(writer, "/// `[roughness, average albedo]`, sorted by roughness.")?;
        writeln!(writer, "#[rustfmt::skip]")?;
        writeln!(
            writer,
            "pub(super) static AVERAGE: [[f32; 2]; {}] = [",
            self.average.len()
        )?;
        for e in &self.average {
            writeln!(writer, "    [{:?}, {:?}],", e.roughness, e.albedo)?;
        }
        writeln!(writer, "];")?;
        Ok(())
    }

    /// Pre-integrate the tables by Monte Carlo, one roughness row per task.
    ///
    /// `E` is the mean of `G2 / G1(wo)` over visible-normal samples, with
    /// directions reflected below the surface counting as zero. The
    /// smooth row is exactly 1.0 so it carries the "no compensation"
    /// sentinel.
    pub fn bake(config: &BakeConfig) -> Result<Self, EnergyTableError> {
        let start = Instant::now();
        let roughness_keys = unit_keys(config.roughness_steps);
        let cos_keys = unit_keys(config.cos_steps);

        let rows: Vec<(Vec<EnergyEntry>, AverageEntry)> = roughness_keys
            .par_iter()
            .enumerate()
            .map(|(row, &roughness)| {
                let albedo: Vec<f32> = cos_keys
                    .iter()
                    .enumerate()
                    .map(|(column, &cos)| {
                        let seed = SampleSeed::new(config.seed, row as u32, column as u32, 0);
                        directional_albedo_mc(roughness, cos, config.samples, seed)
                    })
                    .collect();

                let average = if roughness == 0.0 {
                    1.0
                } else {
                    average_albedo(&cos_keys, &albedo)
                };
                log::debug!("Baked roughness {roughness:.3}: E_avg = {average:.4}");

                let entries = cos_keys
                    .iter()
                    .zip(&albedo)
                    .map(|(&cos, &albedo)| EnergyEntry {
                        roughness,
                        cos,
                        albedo,
                    })
                    .collect();
                (
                    entries,
                    AverageEntry {
                        roughness,
                        albedo: average,
                    },
                )
            })
            .collect();

        let mut data = EnergyTableData::default();
        for (entries, average) in rows {
            data.directional.extend(entries);
            data.average.push(average);
        }

        log::info!(
            "Baked {}x{} energy table ({} samples per entry) in {:.2?}",
            config.roughness_steps,
            config.cos_steps,
            config.samples,
            start.elapsed()
        );

        Self::new(data)
    }
}

/// Index of the last element satisfying `le_key`, or 0 when none does.
///
/// `le_key` must be true for a prefix of `items`.
fn floor_index<T>(items: &[T], le_key: impl FnMut(&T) -> bool) -> usize {
    items.partition_point(le_key).saturating_sub(1)
}

/// `steps` evenly spaced keys from 0 to 1 inclusive.
fn unit_keys(steps: usize) -> Vec<f32> {
    match steps {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..steps)
            .map(|i| i as f32 / (steps - 1) as f32)
            .collect(),
    }
}

/// Monte Carlo estimate of `E(roughness, cos)`.
fn directional_albedo_mc(roughness: f32, cos: f32, samples: u32, seed: SampleSeed) -> f32 {
    if roughness == 0.0 {
        return 1.0;
    }

    let lobe = GgxLobe::from_roughness(roughness);
    let cos = cos.max(MIN_BAKE_COS);
    let wo = Vec3::new((1.0 - cos * cos).max(0.0).sqrt(), 0.0, cos);
    let mut rng = seed.into_rng(0);

    // Stratify the disk samples on a square grid
    let side = (samples.max(1) as f64).sqrt().ceil() as u32;
    let count = side * side;
    let mut sum = 0.0_f64;
    for i in 0..count {
        let u = Vec2::new(
            ((i % side) as f32 + rng.gen::<f32>()) / side as f32,
            ((i / side) as f32 + rng.gen::<f32>()) / side as f32,
        )
        .min(Vec2::splat(crate::sampler::ONE_MINUS_EPSILON));
        if let Some(wi) = lobe.sample(wo, u) {
            sum += lobe.single_scatter(wo, wi) as f64;
        }
    }

    (sum / count as f64) as f32
}

/// `E_avg = 2 * integral of E(mu) * mu`, trapezoid rule over the keys.
fn average_albedo(cos_keys: &[f32], albedo: &[f32]) -> f32 {
    let integral: f64 = cos_keys
        .windows(2)
        .zip(albedo.windows(2))
        .map(|(mu, e)| {
            let (mu0, mu1) = (mu[0] as f64, mu[1] as f64);
            0.5 * (mu0 * e[0] as f64 + mu1 * e[1] as f64) * (mu1 - mu0)
        })
        .sum();
    (2.0 * integral) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_data() -> EnergyTableData {
        let mut data = EnergyTableData::default();
        for (r, values) in [(0.0, [1.0, 1.0, 1.0]), (0.5, [0.6, 0.7, 0.8]), (1.0, [0.3, 0.4, 0.5])] {
            for (cos, albedo) in [0.0, 0.5, 1.0].into_iter().zip(values) {
                data.directional.push(EnergyEntry {
                    roughness: r,
                    cos,
                    albedo,
                });
            }
        }
        data.average = vec![
            AverageEntry {
                roughness: 0.0,
                albedo: 1.0,
            },
            AverageEntry {
                roughness: 0.5,
                albedo: 0.75,
            },
            AverageEntry {
                roughness: 1.0,
                albedo: 0.45,
            },
        ];
        data
    }

    #[test]
    fn test_builtin_is_valid() {
        let tables = EnergyTables::builtin();
        assert!(tables.validate().is_ok());
        assert_eq!(tables.directional().len(), 32 * 32);
        assert_eq!(tables.average().len(), 32);
        assert_eq!(tables.roughness_keys().len(), 32);

        // Smooth row carries the sentinel
        assert_eq!(tables.average_albedo(0.0), 1.0);
        assert!(tables.average_albedo(1.0) < 1.0);
    }

    #[test]
    fn test_exact_keys_round_trip() {
        let tables = EnergyTables::builtin();
        for entry in tables.directional() {
            assert_eq!(tables.directional_albedo(entry.roughness, entry.cos), entry.albedo);
        }
        for entry in tables.average() {
            assert_eq!(tables.average_albedo(entry.roughness), entry.albedo);
        }
    }

    #[test]
    fn test_floor_semantics() {
        let tables = EnergyTables::new(small_data()).unwrap();

        // Between keys: lower entry on both axes
        assert_eq!(tables.directional_albedo(0.7, 0.9), 0.7);
        assert_eq!(tables.directional_albedo(0.5, 0.49), 0.6);
        assert_eq!(tables.directional_albedo(0.99, 1.0), 0.8);
        assert_eq!(tables.average_albedo(0.99), 0.75);

        // Below the first key clamps to it, above the last to the last
        assert_eq!(tables.directional_albedo(-1.0, -1.0), 1.0);
        assert_eq!(tables.directional_albedo(2.0, 2.0), 0.5);
        assert_eq!(tables.average_albedo(-0.5), 1.0);
        assert_eq!(tables.average_albedo(5.0), 0.45);
    }

    #[test]
    fn test_floor_between_builtin_keys() {
        let tables = EnergyTables::builtin();
        let entries = tables.directional();
        for pair in entries.windows(2) {
            if pair[0].roughness != pair[1].roughness {
                continue;
            }
            let mid = 0.5 * (pair[0].cos + pair[1].cos);
            assert_eq!(tables.directional_albedo(pair[0].roughness, mid), pair[0].albedo);
        }
    }

    #[test]
    fn test_json_round_trip() {
        let tables = EnergyTables::new(small_data()).unwrap();
        let mut buffer = Vec::new();
        tables.to_json(&mut buffer).unwrap();

        let loaded = EnergyTables::from_json(buffer.as_slice()).unwrap();
        assert_eq!(loaded.to_data(), small_data());
    }

    #[test]
    fn test_rust_output() {
        let tables = EnergyTables::new(small_data()).unwrap();
        let mut buffer = Vec::new();
        tables.to_rust(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("pub(super) static DIRECTIONAL: [[f32; 3]; 9] = ["));
        assert!(text.contains("    [0.5, 0.5, 0.7],"));
        assert!(text.contains("pub(super) static AVERAGE: [[f32; 2]; 3] = ["));
        assert!(text.contains("    [1.0, 0.45],"));
    }

    #[test]
    fn test_validation_errors() {
        let mut data = small_data();
        data.average[1].albedo = 1.2;
        assert!(matches!(
            EnergyTables::new(data),
            Err(EnergyTableError::AverageOutOfRange { .. })
        ));

        let mut data = small_data();
        data.directional[4].albedo = -0.1;
        assert!(matches!(
            EnergyTables::new(data),
            Err(EnergyTableError::DirectionalOutOfRange { .. })
        ));

        let mut data = small_data();
        data.directional.swap(3, 4);
        assert!(matches!(
            EnergyTables::new(data),
            Err(EnergyTableError::Unsorted { table: "directional", index: 4 })
        ));

        let mut data = small_data();
        data.average.swap(0, 1);
        assert!(matches!(
            EnergyTables::new(data),
            Err(EnergyTableError::Unsorted { table: "average", .. })
        ));

        let mut data = small_data();
        data.directional.clear();
        assert!(matches!(EnergyTables::new(data), Err(EnergyTableError::Empty(_))));

        let mut data = EnergyTableData::default();
        data.average = small_data().average;
        for i in 0..=MAX_BUCKET_LEN {
            data.directional.push(EnergyEntry {
                roughness: 0.5,
                cos: i as f32 / MAX_BUCKET_LEN as f32,
                albedo: 0.5,
            });
        }
        assert!(matches!(
            EnergyTables::new(data),
            Err(EnergyTableError::BucketTooLarge { len: 33, .. })
        ));
    }

    #[test]
    fn test_baked_over_unity_row_is_rejected() {
        let cos_keys = [0.0, 0.5, 1.0];
        assert_eq!(average_albedo(&cos_keys, &[1.0, 1.0, 1.0]), 1.0);

        let albedo = [1.5, 1.5, 1.5];
        let average = average_albedo(&cos_keys, &albedo);
        assert!(average > 1.0, "{average}");

        let mut data = small_data();
        data.average[1].albedo = average;
        assert!(matches!(
            EnergyTables::new(data),
            Err(EnergyTableError::AverageOutOfRange { roughness, .. }) if roughness == 0.5
        ));

        let mut data = small_data();
        for (entry, &value) in data.directional[3..6].iter_mut().zip(&albedo) {
            entry.albedo = value;
        }
        data.average[1].albedo = 0.75;
        assert!(matches!(
            EnergyTables::new(data),
            Err(EnergyTableError::DirectionalOutOfRange { .. })
        ));
    }

    #[test]
    fn test_bake_stays_in_range() {
        let config = BakeConfig {
            roughness_steps: 5,
            cos_steps: 5,
            samples: 256,
            seed: 11,
        };
        let baked = EnergyTables::bake(&config).unwrap();
        assert!(baked.directional().iter().all(|e| (0.0..=1.0).contains(&e.albedo)));
        assert!(baked.average().iter().all(|e| (0.0..=1.0).contains(&e.albedo)));
    }

    #[test]
    fn test_bad_json() {
        let result = EnergyTables::from_json(r#"{ "directional": 3 }"#.as_bytes());
        assert!(matches!(result, Err(EnergyTableError::Json(_))));
    }

    #[test]
    fn test_bake_matches_builtin() {
        let config = BakeConfig {
            roughness_steps: 8,
            cos_steps: 6,
            samples: 1024,
            seed: 3,
        };
        let baked = EnergyTables::bake(&config).unwrap();
        assert_eq!(baked.directional().len(), 48);
        assert_eq!(baked.average().len(), 8);
        assert_eq!(baked.average_albedo(0.0), 1.0);

        // Average albedo decreases with roughness
        for pair in baked.average().windows(2) {
            assert!(pair[1].albedo <= pair[0].albedo + 1e-3);
        }

        let builtin = EnergyTables::builtin();
        for entry in baked.directional() {
            if entry.roughness == 1.0 || entry.roughness == 0.0 {
                let expected = builtin.directional_albedo(entry.roughness, entry.cos);
                assert!(
                    (entry.albedo - expected).abs() < 0.02,
                    "{entry:?} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn test_bake_is_deterministic() {
        let config = BakeConfig {
            roughness_steps: 4,
            cos_steps: 4,
            samples: 64,
            seed: 9,
        };
        let a = EnergyTables::bake(&config).unwrap();
        let b = EnergyTables::bake(&config).unwrap();
        assert_eq!(a.to_data(), b.to_data());
    }
}
