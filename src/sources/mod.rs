//! Dataset sources: loaders that yield a binarized [`BinaryDataset`].
//!
//! Each source produces a feature matrix scaled to [0, 1] (or raw Gaussian
//! samples for the synthetic source) and labels binarized to {-1, +1} by a
//! source-specific rule.
pub mod cifar10;
pub mod mnist;
pub mod synthetic;

use anyhow::{ensure, Result};
use ndarray::Array2;
use rand::Rng;

use crate::config::DatasetName;
use crate::dataset::BinaryDataset;

use self::synthetic::SyntheticConfig;

/// Load a named dataset source.
///
/// `data_dir` is where image datasets are cached on disk; the synthetic
/// source ignores it and draws fresh samples from `rng` with the default
/// [`SyntheticConfig`].
pub fn load_dataset<R: Rng + ?Sized>(
    name: DatasetName,
    data_dir: &str,
    rng: &mut R,
) -> Result<BinaryDataset> {
    match name {
        DatasetName::Mnist => mnist::load(data_dir),
        DatasetName::Cifar10 => cifar10::load(data_dir),
        DatasetName::Synthetic => synthetic::generate(&SyntheticConfig::default(), rng),
    }
}

/// Scale a flat u8 pixel buffer to [0, 1] and reshape to one row per image.
pub(crate) fn pixels_to_features(bytes: &[u8], pixels_per_image: usize) -> Result<Array2<f32>> {
    ensure!(
        pixels_per_image > 0 && bytes.len() % pixels_per_image == 0,
        "pixel buffer length {} is not a multiple of {} pixels per image",
        bytes.len(),
        pixels_per_image
    );
    let n = bytes.len() / pixels_per_image;
    let data: Vec<f32> = bytes.iter().map(|&b| f32::from(b) / 255.0).collect();
    Ok(Array2::from_shape_vec((n, pixels_per_image), data)?)
}
