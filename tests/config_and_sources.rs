//! Tests for configuration types and the source binarization rules.

use std::str::FromStr;

use pu_datasets::config::{DatasetName, PoolMode, PuConfig};
use pu_datasets::error::DatasetError;
use pu_datasets::sources::{cifar10, mnist};

#[test]
fn pool_mode_partition() {
    assert_eq!(PoolMode::infer(10, 2, 8).unwrap(), PoolMode::Partition);
}

#[test]
fn pool_mode_full_reuse() {
    assert_eq!(PoolMode::infer(10, 2, 10).unwrap(), PoolMode::FullReuse);
}

#[test]
fn pool_mode_partition_takes_precedence() {
    // Both relations hold when nothing is revealed; the partition reading
    // wins, so no positives are subtracted twice.
    assert_eq!(PoolMode::infer(10, 0, 10).unwrap(), PoolMode::Partition);
}

#[test]
fn pool_mode_rejects_other_counts() {
    let err = PoolMode::infer(10, 3, 5).unwrap_err();
    assert!(matches!(err, DatasetError::Configuration(_)));
}

#[test]
fn pu_config_holds_counts() {
    let config = PuConfig::new(100, 59_900);
    assert_eq!(config.n_labeled, 100);
    assert_eq!(config.n_unlabeled, 59_900);
}

#[test]
fn dataset_name_from_str() {
    assert_eq!(DatasetName::from_str("mnist").unwrap(), DatasetName::Mnist);
    assert_eq!(DatasetName::from_str("MNIST").unwrap(), DatasetName::Mnist);
    assert_eq!(
        DatasetName::from_str("cifar10").unwrap(),
        DatasetName::Cifar10
    );
    assert_eq!(
        DatasetName::from_str("synthetic").unwrap(),
        DatasetName::Synthetic
    );
}

#[test]
fn unknown_dataset_name_rejected() {
    let err = DatasetName::from_str("imagenet").unwrap_err();
    assert_eq!(err, DatasetError::UnknownDataset("imagenet".to_string()));
    assert!(err.to_string().contains("unknown"));
}

#[test]
fn dataset_name_display_round_trip() {
    for name in [
        DatasetName::Mnist,
        DatasetName::Cifar10,
        DatasetName::Synthetic,
    ] {
        assert_eq!(DatasetName::from_str(&name.to_string()).unwrap(), name);
    }
}

#[test]
fn mnist_binarizes_by_parity() {
    let digits: Vec<u8> = (0..10).collect();
    let y = mnist::binarize(&digits);
    for (digit, &label) in digits.iter().zip(y.iter()) {
        let expected = if digit % 2 == 1 { -1 } else { 1 };
        assert_eq!(label, expected, "digit {}", digit);
    }
}

#[test]
fn cifar10_binarizes_animals_as_negative() {
    let classes: Vec<u8> = (0..10).collect();
    let y = cifar10::binarize(&classes);
    let expected = [1, 1, -1, -1, -1, -1, -1, -1, 1, 1];
    assert_eq!(y.to_vec(), expected);
}
