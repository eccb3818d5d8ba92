//! pu-datasets: dataset preparation for positive-unlabeled (PU) learning.
//!
//! This crate loads a binary classification dataset (MNIST, CIFAR-10 or a
//! synthetic Gaussian mixture), binarizes its labels to {-1, +1}, and
//! restructures the result into a PU configuration: a small labeled-positive
//! subset, an unlabeled pool hiding a mixture of positives and negatives, and
//! an estimated class prior for the pool.
//!
//! The design favors small, testable modules. All shuffling and sampling goes
//! through a caller-supplied `rand::Rng` so experiments are reproducible with
//! a seeded generator.
pub mod config;
pub mod dataset;
pub mod error;
pub mod pu;
pub mod sources;
