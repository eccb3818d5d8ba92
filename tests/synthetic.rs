//! Tests for the Gaussian-mixture source.

use rand::rngs::StdRng;
use rand::SeedableRng;

use pu_datasets::sources::synthetic::{
    generate, paired_covariance, rho_from_mutual_information, SyntheticConfig,
};

fn small_config() -> SyntheticConfig {
    SyntheticConfig {
        dim: 4,
        mutual_information: 1.0,
        n_train_per_class: 50,
        n_test_per_class: 10,
        ..Default::default()
    }
}

#[test]
fn rho_stays_in_unit_interval_and_grows_with_mi() {
    assert_eq!(rho_from_mutual_information(0.0, 40), 0.0);
    let low = rho_from_mutual_information(1.0, 40);
    let high = rho_from_mutual_information(10.0, 40);
    assert!(low > 0.0 && low < 1.0);
    assert!(high > low && high < 1.0);
}

#[test]
fn paired_covariance_structure() {
    let dim = 6;
    let rho = 0.5;
    let cov = paired_covariance(dim, rho);

    for i in 0..dim {
        assert_eq!(cov[i * dim + i], 1.0);
        for j in 0..dim {
            assert_eq!(cov[i * dim + j], cov[j * dim + i]);
        }
    }
    // Correlation inside a pair, independence across pairs.
    assert_eq!(cov[1], rho);
    assert_eq!(cov[dim + 2], 0.0);
}

#[test]
fn generate_shapes_and_labels() {
    let mut rng = StdRng::seed_from_u64(3);
    let dataset = generate(&small_config(), &mut rng).unwrap();

    assert_eq!(dataset.train.x.shape(), &[100, 4]);
    assert_eq!(dataset.train.y.iter().filter(|&&v| v == 1).count(), 50);
    assert_eq!(dataset.train.y.iter().filter(|&&v| v == -1).count(), 50);
    assert_eq!(dataset.test.x.shape(), &[20, 4]);
    assert_eq!(dataset.test.y.iter().filter(|&&v| v == 1).count(), 10);
}

#[test]
fn generate_separates_component_means() {
    let mut rng = StdRng::seed_from_u64(5);
    let dataset = generate(&small_config(), &mut rng).unwrap();

    let mean_of_rows = |range: std::ops::Range<usize>| {
        let mut sum = 0.0f64;
        let mut count = 0usize;
        for row in range {
            for &v in dataset.train.x.row(row) {
                sum += f64::from(v);
                count += 1;
            }
        }
        sum / count as f64
    };

    // Positive component centers at -1, negative at +1.
    assert!(mean_of_rows(0..50) < 0.0);
    assert!(mean_of_rows(50..100) > 0.0);
}

#[test]
fn generate_is_seed_deterministic() {
    let a = generate(&small_config(), &mut StdRng::seed_from_u64(9)).unwrap();
    let b = generate(&small_config(), &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(a.train.x, b.train.x);
    assert_eq!(a.test.x, b.test.x);
}

#[test]
fn generate_rejects_odd_dimension() {
    let config = SyntheticConfig {
        dim: 5,
        ..small_config()
    };
    assert!(generate(&config, &mut StdRng::seed_from_u64(1)).is_err());
}
