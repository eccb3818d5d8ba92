//! The PU dataset builder.
//!
//! Converts a binary-labeled (train, test) dataset into a
//! positive-unlabeled training set, a conventional positive-negative test
//! set, and an estimate of the class prior of the unlabeled pool. This is
//! the experimental protocol: how many positives are revealed, how the
//! pool is composed, and how the prior falls out of the split.
use ndarray::{Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{PoolMode, PuConfig};
use crate::dataset::BinaryDataset;
use crate::error::DatasetError;

/// A PU-formatted training set.
///
/// `y` carries pseudo-labels: +1 marks the revealed labeled-positive subset,
/// -1 marks the unlabeled pool. A -1 entry says nothing about the true label
/// of that example.
#[derive(Debug, Clone)]
pub struct PuTrainSet {
    pub x: Array2<f32>,
    pub y: Array1<i32>,
    /// Estimated probability that an unlabeled example is a true positive.
    pub prior: f64,
}

/// Train/test pairs ready for a training loop, plus the estimated prior.
#[derive(Debug, Clone)]
pub struct PreparedDataset {
    pub train: Vec<(Array1<f32>, i32)>,
    pub test: Vec<(Array1<f32>, i32)>,
    pub prior: f64,
}

/// Identify the positive and negative class from the label vector.
///
/// The two distinct sorted label values define the classes; the larger one
/// is positive. Returns `(positive, negative)`.
fn class_labels(y: &Array1<i32>) -> Result<(i32, i32), DatasetError> {
    let mut distinct: Vec<i32> = y.iter().copied().collect();
    distinct.sort_unstable();
    distinct.dedup();
    match distinct.as_slice() {
        [negative, positive] => Ok((*positive, *negative)),
        other => Err(DatasetError::Configuration(format!(
            "expected exactly two distinct label values, found {}",
            other.len()
        ))),
    }
}

fn shuffled_rows<R: Rng + ?Sized>(
    x: &Array2<f32>,
    y: &Array1<i32>,
    rng: &mut R,
) -> (Array2<f32>, Array1<i32>) {
    let mut perm: Vec<usize> = (0..y.len()).collect();
    perm.shuffle(rng);
    (x.select(Axis(0), &perm), y.select(Axis(0), &perm))
}

/// Build a PU training set from a binary-labeled training split.
///
/// Reveals `n_labeled` positives as labeled and composes an unlabeled pool
/// of `n_unlabeled` examples. The counts must either partition the dataset
/// (`n_labeled + n_unlabeled == N`) or reuse it entirely as the pool
/// (`n_unlabeled == N`); see [`PoolMode`]. When too few positives remain
/// for the pool, the labeled subset is cycled back in, so a labeled example
/// can also appear in the pool.
///
/// Rows are shuffled jointly with `rng` before subsetting and once more
/// after assembly so the label blocks are not contiguous.
pub fn build_pu_train_set<R: Rng + ?Sized>(
    x: &Array2<f32>,
    y: &Array1<i32>,
    n_labeled: usize,
    n_unlabeled: usize,
    rng: &mut R,
) -> Result<PuTrainSet, DatasetError> {
    if x.nrows() != y.len() {
        return Err(DatasetError::ShapeMismatch {
            features: x.nrows(),
            labels: y.len(),
        });
    }
    let (positive, negative) = class_labels(y)?;
    let n = y.len();
    let (x, y) = shuffled_rows(x, y, rng);

    let mode = PoolMode::infer(n, n_labeled, n_unlabeled)?;
    if n_unlabeled == 0 {
        return Err(DatasetError::Configuration(
            "unlabeled pool is empty, the class prior is undefined".to_string(),
        ));
    }
    let n_p = y.iter().filter(|&&v| v == positive).count();
    if n_labeled > n_p {
        return Err(DatasetError::Configuration(format!(
            "cannot reveal {} labeled positives, only {} positives available",
            n_labeled, n_p
        )));
    }
    let n_up = match mode {
        PoolMode::Partition => n_p - n_labeled,
        PoolMode::FullReuse => n_p,
    };
    let prior = n_up as f64 / n_unlabeled as f64;

    let positive_rows: Vec<usize> = row_indices_with_label(&y, positive);
    let negative_rows: Vec<usize> = row_indices_with_label(&y, negative);

    // Pool positives: the positives left after revealing, padded cyclically
    // with the labeled subset when fewer than n_up remain.
    let mut pool_positives: Vec<usize> = positive_rows[n_labeled..].to_vec();
    if pool_positives.len() < n_up {
        pool_positives.extend_from_slice(&positive_rows[..n_labeled]);
    }
    pool_positives.truncate(n_up);

    let mut rows: Vec<usize> = Vec::with_capacity(n_labeled + n_unlabeled);
    rows.extend_from_slice(&positive_rows[..n_labeled]);
    rows.extend_from_slice(&pool_positives);
    rows.extend_from_slice(&negative_rows);
    debug_assert_eq!(rows.len(), n_labeled + n_unlabeled);

    let mut pseudo_labels: Vec<i32> = Vec::with_capacity(rows.len());
    pseudo_labels.resize(n_labeled, 1);
    pseudo_labels.resize(n_labeled + n_unlabeled, -1);

    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.shuffle(rng);
    let final_rows: Vec<usize> = order.iter().map(|&i| rows[i]).collect();

    Ok(PuTrainSet {
        x: x.select(Axis(0), &final_rows),
        y: order.iter().map(|&i| pseudo_labels[i]).collect(),
        prior,
    })
}

/// Build a fully-labeled PN test set from a binary-labeled test split.
///
/// All examples are kept; labels are normalized to +1 for the positive
/// class and -1 for the negative class, and rows are shuffled once.
pub fn build_pn_test_set<R: Rng + ?Sized>(
    x: &Array2<f32>,
    y: &Array1<i32>,
    rng: &mut R,
) -> Result<(Array2<f32>, Array1<i32>), DatasetError> {
    if x.nrows() != y.len() {
        return Err(DatasetError::ShapeMismatch {
            features: x.nrows(),
            labels: y.len(),
        });
    }
    let (positive, negative) = class_labels(y)?;

    let positive_rows = row_indices_with_label(y, positive);
    let negative_rows = row_indices_with_label(y, negative);

    let mut rows: Vec<usize> = Vec::with_capacity(y.len());
    rows.extend_from_slice(&positive_rows);
    rows.extend_from_slice(&negative_rows);

    let mut labels: Vec<i32> = Vec::with_capacity(rows.len());
    labels.resize(positive_rows.len(), 1);
    labels.resize(rows.len(), -1);

    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.shuffle(rng);
    let final_rows: Vec<usize> = order.iter().map(|&i| rows[i]).collect();

    Ok((
        x.select(Axis(0), &final_rows),
        order.iter().map(|&i| labels[i]).collect(),
    ))
}

/// Prepare a binary dataset for a PU learning experiment.
///
/// Applies [`build_pu_train_set`] to the train split and
/// [`build_pn_test_set`] to the test split, and re-pairs features with
/// labels for convenient iteration by a training loop.
pub fn make_dataset<R: Rng + ?Sized>(
    dataset: &BinaryDataset,
    config: PuConfig,
    rng: &mut R,
) -> Result<PreparedDataset, DatasetError> {
    let train = build_pu_train_set(
        &dataset.train.x,
        &dataset.train.y,
        config.n_labeled,
        config.n_unlabeled,
        rng,
    )?;
    let (x_test, y_test) = build_pn_test_set(&dataset.test.x, &dataset.test.y, rng)?;

    log::info!(
        "training: {} examples x {} features, prior {:.4}",
        train.x.nrows(),
        train.x.ncols(),
        train.prior
    );
    log::info!(
        "test: {} examples x {} features",
        x_test.nrows(),
        x_test.ncols()
    );

    Ok(PreparedDataset {
        prior: train.prior,
        train: into_pairs(train.x, &train.y),
        test: into_pairs(x_test, &y_test),
    })
}

fn into_pairs(x: Array2<f32>, y: &Array1<i32>) -> Vec<(Array1<f32>, i32)> {
    x.outer_iter()
        .zip(y.iter())
        .map(|(row, &label)| (row.to_owned(), label))
        .collect()
}

fn row_indices_with_label(y: &Array1<i32>, label: i32) -> Vec<usize> {
    y.iter()
        .enumerate()
        .filter(|(_, &v)| v == label)
        .map(|(i, _)| i)
        .collect()
}
