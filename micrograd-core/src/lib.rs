//! # micrograd-core
//!
//! Scalar reverse-mode autodiff with a small neural-network layer on top: trait-based node
//! interface, named operation builders with operator sugar, MLP modules, env-driven config,
//! sample loading and a plain SGD trainer.
//!
//! ```
//! use micrograd_core::autograd::{ScalarNode, ValueRef};
//!
//! let x = ValueRef::new(2.0);
//! let y = &x * &x + 3.0 * &x;
//! y.backward();
//! assert_eq!(x.grad(), 7.0);
//! ```

pub mod autograd;
pub mod config;
pub mod data;
pub mod nn;
pub mod train;
