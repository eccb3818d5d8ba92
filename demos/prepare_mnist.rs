use anyhow::Result;
use rand::thread_rng;

use pu_datasets::config::PuConfig;
use pu_datasets::pu::make_dataset;
use pu_datasets::sources::mnist;

fn main() -> Result<()> {
    env_logger::init();

    // Downloads the idx archives into data/ on first run.
    let dataset = mnist::load("data/")?;
    dataset.train.log_summary("train");
    dataset.test.log_summary("test");

    let mut rng = thread_rng();
    let prepared = make_dataset(&dataset, PuConfig::new(100, 59_900), &mut rng)?;

    println!("train pairs:     {}", prepared.train.len());
    println!("test pairs:      {}", prepared.test.len());
    println!("estimated prior: {:.4}", prepared.prior);

    Ok(())
}
