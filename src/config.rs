use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DatasetError;

/// Counts controlling the PU split: how many positives are revealed as
/// labeled, and how large the unlabeled pool is.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuConfig {
    pub n_labeled: usize,
    pub n_unlabeled: usize,
}

impl PuConfig {
    pub fn new(n_labeled: usize, n_unlabeled: usize) -> Self {
        Self {
            n_labeled,
            n_unlabeled,
        }
    }
}

/// How the unlabeled pool relates to the full dataset.
///
/// The two relations are intentionally kept as an explicit choice rather
/// than a single count formula: any other combination of counts is
/// rejected, not approximated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolMode {
    /// `n_labeled + n_unlabeled == N`: the two subsets partition the
    /// dataset, so the pool receives the positives left after revealing.
    Partition,
    /// `n_unlabeled == N`: the pool reuses the whole dataset and overlaps
    /// with the labeled subset; every true positive ends up in the pool.
    FullReuse,
}

impl PoolMode {
    /// Infer the pool mode from the dataset size and the requested counts.
    pub fn infer(n: usize, n_labeled: usize, n_unlabeled: usize) -> Result<Self, DatasetError> {
        if n_labeled + n_unlabeled == n {
            Ok(PoolMode::Partition)
        } else if n_unlabeled == n {
            Ok(PoolMode::FullReuse)
        } else {
            Err(DatasetError::Configuration(
                "only |labeled|+|unlabeled|=|X| or |unlabeled|=|X| is supported".to_string(),
            ))
        }
    }
}

/// Supported dataset sources.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatasetName {
    Mnist,
    Cifar10,
    Synthetic,
}

impl FromStr for DatasetName {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mnist" => Ok(DatasetName::Mnist),
            "cifar10" => Ok(DatasetName::Cifar10),
            "synthetic" => Ok(DatasetName::Synthetic),
            other => Err(DatasetError::UnknownDataset(other.to_string())),
        }
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            DatasetName::Mnist => "mnist",
            DatasetName::Cifar10 => "cifar10",
            DatasetName::Synthetic => "synthetic",
        };
        write!(f, "{}", name)
    }
}
