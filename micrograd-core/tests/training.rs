//! Training the `[3, 4, 4, 1]` MLP on the toy dataset with squared error and SGD.

use micrograd_core::autograd::ScalarNode;
use micrograd_core::data::Dataset;
use micrograd_core::nn::{InitRange, Mlp, Module};
use micrograd_core::train::Trainer;

const EPOCHS: usize = 10;
const LEARNING_RATE: f64 = 0.1;
/// Seed whose `[3, 4, 4, 1]` initialization trains monotonically on the toy set.
const SEED: u64 = 42;

fn train(seed: u64) -> Vec<f64> {
    let model = Mlp::seeded(3, &[4, 4, 1], InitRange::default(), seed).unwrap();
    Trainer::new(LEARNING_RATE, EPOCHS)
        .fit(&model, &Dataset::toy())
        .unwrap()
}

#[test]
fn loss_is_non_increasing_for_fixed_seed() {
    let losses = train(SEED);
    assert_eq!(losses.len(), EPOCHS);
    for (epoch, w) in losses.windows(2).enumerate() {
        assert!(
            w[1] <= w[0],
            "loss rose from {} to {} at epoch {}",
            w[0],
            w[1],
            epoch + 1
        );
    }
    assert!(losses[EPOCHS - 1] < losses[0] / 10.0, "losses: {losses:?}");
}

#[test]
fn training_is_reproducible_for_a_seed() {
    assert_eq!(train(SEED), train(SEED));
}

#[test]
fn parameters_change_and_gradients_are_left_from_last_epoch() {
    let model = Mlp::seeded(3, &[4, 4, 1], InitRange::default(), 9).unwrap();
    let before: Vec<f64> = model.parameters().iter().map(|p| p.data()).collect();
    Trainer::new(LEARNING_RATE, 1)
        .fit(&model, &Dataset::toy())
        .unwrap();
    let params = model.parameters();
    assert!(params.iter().zip(&before).any(|(p, b)| p.data() != *b));
    assert!(params.iter().any(|p| p.grad() != 0.0));
    model.zero_grad();
    assert!(params.iter().all(|p| p.grad() == 0.0));
}
