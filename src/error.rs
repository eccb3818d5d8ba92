use std::error::Error;
use std::fmt;

/// Errors surfaced while preparing a PU dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// The requested labeled/unlabeled counts cannot be honored.
    Configuration(String),
    /// Feature matrix and label vector disagree on the number of examples.
    ShapeMismatch { features: usize, labels: usize },
    /// The dataset source name does not match any known source.
    UnknownDataset(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DatasetError::Configuration(msg) => write!(f, "configuration error: {}", msg),
            DatasetError::ShapeMismatch { features, labels } => write!(
                f,
                "feature matrix has {} rows but label vector has {} entries",
                features, labels
            ),
            DatasetError::UnknownDataset(name) => {
                write!(f, "dataset name {} is unknown", name)
            }
        }
    }
}

impl Error for DatasetError {}
