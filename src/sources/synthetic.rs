//! Synthetic Gaussian-mixture source.
//!
//! Draws the positive class from a correlated multivariate normal and the
//! negative class from an isotropic one. The positive covariance is
//! block-diagonal with 2x2 blocks `[[1, rho], [rho, 1]]`, where `rho` is
//! chosen so each correlated pair carries a target mutual information.
use anyhow::{ensure, Context, Result};
use ndarray::{Array1, Array2};
use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;

use crate::dataset::{BinaryDataset, BinarySplit};

/// Parameters of the two-component Gaussian mixture.
#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
pub struct SyntheticConfig {
    /// Mean of every coordinate of the positive component.
    pub positive_mean: f64,
    /// Mean of every coordinate of the negative component.
    pub negative_mean: f64,
    /// Feature dimension; must be even so covariance blocks pair up.
    pub dim: usize,
    /// Target mutual information carried by each correlated pair.
    pub mutual_information: f64,
    /// Training samples drawn from each component.
    pub n_train_per_class: usize,
    /// Test samples drawn from each component.
    pub n_test_per_class: usize,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            positive_mean: -1.0,
            negative_mean: 1.0,
            dim: 40,
            mutual_information: 100.0,
            n_train_per_class: 10_000,
            n_test_per_class: 500,
        }
    }
}

/// Correlation coefficient realizing the target mutual information across
/// `dim` dimensions: `rho = sqrt(1 - exp(-4 * mi / dim))`.
pub fn rho_from_mutual_information(mi: f64, dim: usize) -> f64 {
    let x = 4.0 * mi / dim as f64;
    (1.0 - (-x).exp()).sqrt()
}

/// Flattened `dim x dim` covariance realized by the positive component:
/// block-diagonal with 2x2 blocks `[[1, rho], [rho, 1]]`.
pub fn paired_covariance(dim: usize, rho: f64) -> Vec<f64> {
    let mut cov = vec![0.0; dim * dim];
    for i in 0..dim {
        cov[i * dim + i] = 1.0;
    }
    for b in (0..dim).step_by(2) {
        cov[b * dim + b + 1] = rho;
        cov[(b + 1) * dim + b] = rho;
    }
    cov
}

/// Generate a binarized Gaussian-mixture dataset.
///
/// The positive component is labeled +1, the negative component -1 (the
/// direct binarization rule for this source). Both splits draw the same
/// number of samples per component.
pub fn generate<R: Rng + ?Sized>(config: &SyntheticConfig, rng: &mut R) -> Result<BinaryDataset> {
    ensure!(
        config.dim > 0 && config.dim % 2 == 0,
        "feature dimension must be even and non-zero, got {}",
        config.dim
    );
    let rho = rho_from_mutual_information(config.mutual_information, config.dim);
    let standard = Normal::new(0.0, 1.0).context("invalid standard normal")?;

    let train = draw_split(&standard, rho, config, config.n_train_per_class, rng)?;
    let test = draw_split(&standard, rho, config, config.n_test_per_class, rng)?;
    Ok(BinaryDataset { train, test })
}

fn draw_split<R: Rng + ?Sized>(
    standard: &Normal,
    rho: f64,
    config: &SyntheticConfig,
    n_per_class: usize,
    rng: &mut R,
) -> Result<BinarySplit> {
    let dim = config.dim;
    let mut data: Vec<f32> = Vec::with_capacity(2 * n_per_class * dim);
    for _ in 0..n_per_class {
        positive_row(standard, config.positive_mean, dim, rho, rng, &mut data);
    }
    for _ in 0..n_per_class {
        for _ in 0..dim {
            data.push((config.negative_mean + standard.sample(rng)) as f32);
        }
    }
    let x = Array2::from_shape_vec((2 * n_per_class, dim), data)?;

    let mut labels: Vec<i32> = Vec::with_capacity(2 * n_per_class);
    labels.resize(n_per_class, 1);
    labels.resize(2 * n_per_class, -1);
    let y = Array1::from_vec(labels);

    Ok(BinarySplit::new(x, y)?)
}

/// Draw one positive-component sample, correlating each coordinate pair
/// through the Cholesky factor of its `[[1, rho], [rho, 1]]` block.
fn positive_row<R: Rng + ?Sized>(
    standard: &Normal,
    mean: f64,
    dim: usize,
    rho: f64,
    rng: &mut R,
    out: &mut Vec<f32>,
) {
    let c = (1.0 - rho * rho).sqrt();
    for _ in 0..dim / 2 {
        let z1 = standard.sample(rng);
        let z2 = standard.sample(rng);
        out.push((mean + z1) as f32);
        out.push((mean + rho * z1 + c * z2) as f32);
    }
}
