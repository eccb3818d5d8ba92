//! Containers for binary-labeled datasets handed to the PU builder.
use ndarray::{Array1, Array2};

use crate::error::DatasetError;

/// One split of a binary classification dataset.
///
/// Rows of `x` are examples, `y` holds order-aligned labels with exactly two
/// distinct values (conventionally -1 and +1 after binarization).
#[derive(Debug, Clone)]
pub struct BinarySplit {
    pub x: Array2<f32>,
    pub y: Array1<i32>,
}

impl BinarySplit {
    pub fn new(x: Array2<f32>, y: Array1<i32>) -> Result<Self, DatasetError> {
        if x.nrows() != y.len() {
            return Err(DatasetError::ShapeMismatch {
                features: x.nrows(),
                labels: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn log_summary(&self, name: &str) {
        println!("----- {} split -----", name);
        println!(
            "Info: {} positive and {} negative examples",
            self.y.iter().filter(|&&v| v > 0).count(),
            self.y.iter().filter(|&&v| v <= 0).count()
        );
        println!("Info: {} features per example", self.x.ncols());
        println!("---------------------");
    }
}

/// A binary-labeled dataset with train and test splits.
#[derive(Debug, Clone)]
pub struct BinaryDataset {
    pub train: BinarySplit,
    pub test: BinarySplit,
}
