//! # micrograd-rs
//!
//! Trains a small tanh MLP with full-batch gradient descent and prints the loss per epoch.
//!
//! Settings come from `MICROGRAD_*` environment variables (see `micrograd_core::config`); with
//! none set this runs the `[3, 4, 4, 1]` network for 10 epochs at learning rate 0.1 on the
//! built-in four-sample dataset.

use micrograd_core::autograd::ScalarNode;
use micrograd_core::config::{self, Config};
use micrograd_core::data::{load_from_path, Dataset};
use micrograd_core::nn::{Mlp, Module};
use micrograd_core::train::Trainer;

fn load_dataset(config: &Config) -> Result<Dataset, Box<dyn std::error::Error>> {
    Ok(match &config.data_path {
        Some(path) => load_from_path(path)?,
        None => Dataset::toy(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::from_env()?;
    config.validate()?;

    let data = load_dataset(&config)?;
    println!("num samples: {}", data.len());

    let model = Mlp::seeded(
        data.input_width(),
        &config.layers,
        config.init_range(),
        config.seed,
    )?;
    println!("model: {model}");
    println!("num params: {}", model.parameters().len());

    let trainer = Trainer::from_config(&config);
    trainer.fit_with(&model, &data, |epoch, loss| {
        if trainer.should_log(epoch) {
            println!("epoch {:4} / {:4} | loss {:.6}", epoch + 1, trainer.epochs, loss);
        }
    })?;

    println!("\n--- predictions ---");
    for sample in data.samples() {
        let pred = model.forward(&sample.inputs)?.into_vec();
        let values: Vec<String> = pred.iter().map(|p| format!("{:+.4}", p.data())).collect();
        println!(
            "{:?} -> [{}] (target {:+})",
            sample.inputs,
            values.join(", "),
            sample.target
        );
    }
    Ok(())
}
