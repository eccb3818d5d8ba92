//! MNIST digit source.
//!
//! Downloads and caches the idx archives under `data_dir` via the `mnist`
//! crate, scales pixels to [0, 1], and binarizes digits by parity.
use anyhow::Result;
use mnist::MnistBuilder;
use ndarray::Array1;

use crate::dataset::{BinaryDataset, BinarySplit};

const IMAGE_PIXELS: usize = 28 * 28;
const TRAIN_LEN: u32 = 60_000;
const TEST_LEN: u32 = 10_000;

/// Even digits form the positive class, odd digits the negative class.
pub fn binarize(digits: &[u8]) -> Array1<i32> {
    digits
        .iter()
        .map(|&d| if d % 2 == 1 { -1 } else { 1 })
        .collect()
}

/// Load MNIST as a binarized dataset, fetching the archives if they are not
/// already cached under `data_dir`.
pub fn load(data_dir: &str) -> Result<BinaryDataset> {
    let raw = MnistBuilder::new()
        .base_path(data_dir)
        .label_format_digit()
        .training_set_length(TRAIN_LEN)
        .test_set_length(TEST_LEN)
        .download_and_extract()
        .finalize();

    let train = split(&raw.trn_img, &raw.trn_lbl)?;
    let test = split(&raw.tst_img, &raw.tst_lbl)?;
    Ok(BinaryDataset { train, test })
}

fn split(images: &[u8], digits: &[u8]) -> Result<BinarySplit> {
    let x = super::pixels_to_features(images, IMAGE_PIXELS)?;
    let y = binarize(digits);
    Ok(BinarySplit::new(x, y)?)
}
