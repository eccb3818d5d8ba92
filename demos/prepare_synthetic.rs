use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pu_datasets::config::PuConfig;
use pu_datasets::pu::make_dataset;
use pu_datasets::sources::synthetic::{self, SyntheticConfig};

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let config = SyntheticConfig {
        n_train_per_class: 1_000,
        n_test_per_class: 200,
        ..Default::default()
    };
    let dataset = synthetic::generate(&config, &mut rng)?;
    dataset.train.log_summary("train");
    dataset.test.log_summary("test");

    // 100 revealed positives, the remaining 1900 examples form the pool.
    let prepared = make_dataset(&dataset, PuConfig::new(100, 1_900), &mut rng)?;

    let labeled = prepared.train.iter().filter(|(_, y)| *y == 1).count();
    let unlabeled = prepared.train.iter().filter(|(_, y)| *y == -1).count();
    println!("labeled positives: {}", labeled);
    println!("unlabeled pool:    {}", unlabeled);
    println!("estimated prior:   {:.4}", prepared.prior);
    println!("test examples:     {}", prepared.test.len());

    Ok(())
}
