//! CIFAR-10 natural-image source.
//!
//! Reads the binary CIFAR-10 distribution from a local directory via the
//! `cifar-10-loader` crate, scales pixels to [0, 1], and binarizes the ten
//! categories into animals versus vehicles.
use anyhow::{anyhow, Result};
use cifar_10_loader::{CifarDataset, CifarImage};
use ndarray::Array1;

use crate::dataset::{BinaryDataset, BinarySplit};

const IMAGE_PIXELS: usize = 32 * 32 * 3;

/// Animal classes (bird, cat, deer, dog, frog, horse) are negative; the
/// vehicle classes (airplane, automobile, ship, truck) are positive.
pub fn binarize(classes: &[u8]) -> Array1<i32> {
    classes
        .iter()
        .map(|&c| if (2..=7).contains(&c) { -1 } else { 1 })
        .collect()
}

/// Load CIFAR-10 from `data_dir`, which must hold the extracted binary
/// distribution (`data_batch_*.bin`, `test_batch.bin`).
pub fn load(data_dir: &str) -> Result<BinaryDataset> {
    let cifar = CifarDataset::new(data_dir)
        .map_err(|e| anyhow!("failed to load CIFAR-10 from {}: {}", data_dir, e))?;

    let train = split(&cifar.train_dataset)?;
    let test = split(&cifar.test_dataset)?;
    Ok(BinaryDataset { train, test })
}

fn split(images: &[CifarImage]) -> Result<BinarySplit> {
    let mut bytes = Vec::with_capacity(images.len() * IMAGE_PIXELS);
    let mut classes = Vec::with_capacity(images.len());
    for img in images {
        bytes.extend_from_slice(&img.image.to_rgb().into_raw());
        classes.push(img.label);
    }
    let x = super::pixels_to_features(&bytes, IMAGE_PIXELS)?;
    let y = binarize(&classes);
    Ok(BinarySplit::new(x, y)?)
}
