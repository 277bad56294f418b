//! Tests for the scalar autograd engine.
//!
//! Covers each builder's backward rule, topological order, gradient accumulation under sharing,
//! repeated backward, zero_grad, the domain checks on `pow` and `div`, freeing deep graphs and
//! finite-difference agreement.

use approx::assert_abs_diff_eq;

use crate::autograd::grad_check::{DEFAULT_EPSILON, DEFAULT_TOLERANCE};
use crate::autograd::{
    check_gradients, ops, topological_order, AutogradError, GradCheckError, ScalarNode, ValueRef,
};

#[test]
fn scalar_add_backward() {
    let a = ValueRef::new(2.0);
    let b = ValueRef::new(3.0);
    let c = &a + &b;
    assert_eq!(c.data(), 5.0);
    assert_eq!(c.op_label(), "+");
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn scalar_mul_backward() {
    let a = ValueRef::new(2.0);
    let b = ValueRef::new(3.0);
    let c = &a * &b;
    assert_eq!(c.data(), 6.0);
    c.backward();
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 2.0);
}

#[test]
fn scalar_pow_backward() {
    let a = ValueRef::new(2.0);
    let b = a.pow(3.0).unwrap();
    assert_abs_diff_eq!(b.data(), 8.0, epsilon = 1e-10);
    assert_eq!(b.op_label(), "**3");
    b.backward();
    // d/dx x^3 = 3x^2 = 12 at x=2
    assert_abs_diff_eq!(a.grad(), 12.0, epsilon = 1e-10);
}

#[test]
fn scalar_pow_fractional_exponent_on_positive_base() {
    let a = ValueRef::new(4.0);
    let b = a.pow(0.5).unwrap();
    assert_abs_diff_eq!(b.data(), 2.0, epsilon = 1e-12);
    b.backward();
    assert_abs_diff_eq!(a.grad(), 0.25, epsilon = 1e-12);
}

#[test]
fn scalar_pow_integer_exponent_on_negative_base() {
    let a = ValueRef::new(-2.0);
    let b = a.pow(3.0).unwrap();
    assert_eq!(b.data(), -8.0);
    b.backward();
    assert_abs_diff_eq!(a.grad(), 12.0, epsilon = 1e-12);
}

#[test]
fn scalar_pow_rejects_negative_base_with_fractional_exponent() {
    let a = ValueRef::new(-4.0);
    let res = a.pow(0.5);
    assert!(matches!(
        res,
        Err(AutogradError::Domain { base, exponent }) if base == -4.0 && exponent == 0.5
    ));
    let msg = res.unwrap_err().to_string();
    assert!(msg.contains("-4"));
}

#[test]
fn scalar_pow_rejects_zero_base_with_negative_exponent() {
    let a = ValueRef::new(0.0);
    assert!(matches!(
        a.pow(-1.0),
        Err(AutogradError::Domain { base, exponent }) if base == 0.0 && exponent == -1.0
    ));
    assert!(a.pow(-0.5).is_err());
    assert_eq!(a.pow(0.0).unwrap().data(), 1.0);
    assert_eq!(a.pow(2.0).unwrap().data(), 0.0);
}

#[test]
fn scalar_pow_rejects_non_finite_exponent() {
    let a = ValueRef::new(2.0);
    assert!(a.pow(f64::NAN).is_err());
    assert!(a.pow(f64::INFINITY).is_err());
}

#[test]
fn scalar_exp_backward() {
    let a = ValueRef::new(1.0);
    let b = a.exp();
    assert_abs_diff_eq!(b.data(), std::f64::consts::E, epsilon = 1e-10);
    b.backward();
    assert_abs_diff_eq!(a.grad(), std::f64::consts::E, epsilon = 1e-10);
}

#[test]
fn scalar_tanh_backward_matches_closed_form() {
    for x in [-2.5, -0.3, 0.0, 0.7, 3.0] {
        let a = ValueRef::new(x);
        let t = a.tanh();
        assert_abs_diff_eq!(t.data(), f64::tanh(x), epsilon = 1e-12);
        t.backward();
        assert_abs_diff_eq!(a.grad(), 1.0 - f64::tanh(x).powi(2), epsilon = 1e-12);
    }
}

#[test]
fn scalar_tanh_saturates_without_nan() {
    let a = ValueRef::new(400.0);
    let t = a.tanh();
    assert_eq!(t.data(), 1.0);
    t.backward();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn scalar_topo_and_gradient_accumulation() {
    // Use a value twice: c = a + a. dc/da = 2.
    let a = ValueRef::new(3.0);
    let c = &a + &a;
    assert_eq!(c.data(), 6.0);
    c.backward();
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn scalar_square_via_mul_accumulates_both_sides() {
    let x = ValueRef::new(-1.5);
    let y = &x * &x;
    y.backward();
    assert_eq!(x.grad(), -3.0);
}

#[test]
fn diamond_dependency_sums_both_paths() {
    // a feeds b and c, both feed d: dd/da = 3 + 2a
    let a = ValueRef::new(2.0);
    let b = &a * 3.0;
    let c = &a * &a;
    let d = &b + &c;
    d.backward();
    assert_abs_diff_eq!(a.grad(), 7.0, epsilon = 1e-12);
    assert_eq!(b.grad(), 1.0);
    assert_eq!(c.grad(), 1.0);
}

#[test]
fn topological_order_puts_children_first_and_visits_once() {
    let a = ValueRef::labeled(2.0, "a");
    let b = ValueRef::labeled(2.0, "b");
    let c = &a * &b;
    let d = &c + &a;
    let e = &d * &c;
    let order = topological_order(&e);

    let position = |n: &ValueRef| order.iter().position(|m| m.ptr_eq(n));
    // a, b, c, d, e are all distinct and reachable; no constants were created.
    assert_eq!(order.len(), 5);
    for node in [&a, &b, &c, &d, &e] {
        assert_eq!(order.iter().filter(|m| m.ptr_eq(node)).count(), 1);
    }
    for node in &order {
        let parent = position(node).unwrap();
        for child in node.children() {
            assert!(position(&child).unwrap() < parent);
        }
    }
    assert!(order.last().unwrap().ptr_eq(&e));
}

#[test]
fn topological_order_distinguishes_equal_values() {
    let a = ValueRef::new(1.0);
    let b = ValueRef::new(1.0);
    let c = &a + &b;
    let order = topological_order(&c);
    assert_eq!(order.len(), 3);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn topological_order_of_leaf_is_itself() {
    let a = ValueRef::new(5.0);
    let order = topological_order(&a);
    assert_eq!(order.len(), 1);
    assert!(order[0].ptr_eq(&a));
}

#[test]
fn backward_and_drop_handle_long_chains() {
    let x = ValueRef::new(0.5);
    let mut acc = ValueRef::new(0.0);
    for _ in 0..200_000 {
        acc = &acc + &x;
    }
    assert_eq!(acc.data(), 100_000.0);
    acc.backward();
    assert_eq!(x.grad(), 200_000.0);
    drop(acc);

    // The shared leaf outlives the freed chain.
    assert_eq!(x.data(), 0.5);
    assert_eq!(x.children().len(), 0);
}

#[test]
fn dropping_a_long_sum_keeps_shared_nodes_alive() {
    let xs: Vec<ValueRef> = (0..100_000u32).map(|i| ValueRef::new(f64::from(i % 7))).collect();
    let total: ValueRef = xs.iter().map(|x| x * 2.0).sum();
    total.backward();
    drop(total);
    assert!(xs.iter().all(|x| x.grad() == 2.0));
    let y = &xs[0] + &xs[1];
    assert_eq!(y.data(), 1.0);
}

#[test]
fn backward_seeds_root_with_one() {
    let a = ValueRef::new(3.0);
    let b = a.exp();
    b.backward();
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn double_backward_accumulates() {
    let a = ValueRef::new(2.0);
    let b = ValueRef::new(-1.0);
    let loss = (&a * &b + a.exp()).tanh();
    loss.backward();
    let (ga, gb) = (a.grad(), b.grad());
    loss.backward();
    assert_abs_diff_eq!(a.grad(), 2.0 * ga, epsilon = 1e-12);
    assert_abs_diff_eq!(b.grad(), 2.0 * gb, epsilon = 1e-12);
}

#[test]
fn scalar_zero_grad_after_step() {
    let a = ValueRef::new(2.0);
    let b = &a * 3.0;
    b.backward();
    assert_eq!(a.grad(), 3.0);
    a.zero_grad();
    assert_eq!(a.grad(), 0.0);
    b.zero_grad();
    b.backward();
    assert_eq!(a.grad(), 3.0);
}

#[test]
fn scalar_neg_backward() {
    let a = ValueRef::new(3.0);
    let b = -&a;
    assert_eq!(b.data(), -3.0);
    b.backward();
    assert_eq!(a.grad(), -1.0);
}

#[test]
fn scalar_sub_backward() {
    let a = ValueRef::new(5.0);
    let b = ValueRef::new(2.0);
    let c = &a - &b;
    assert_eq!(c.data(), 3.0);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn scalar_div_backward() {
    let a = ValueRef::new(6.0);
    let b = ValueRef::new(2.0);
    let c = (&a / &b).unwrap();
    assert_eq!(c.data(), 3.0);
    c.backward();
    assert_eq!(a.grad(), 0.5);
    assert_eq!(b.grad(), -1.5); // d/db (a/b) = -a/b^2 = -6/4 = -1.5
}

#[test]
fn scalar_div_by_zero_is_a_domain_error() {
    let a = ValueRef::new(1.0);
    let zero = ValueRef::new(0.0);
    assert!(matches!(
        &a / &zero,
        Err(AutogradError::Domain { base, exponent }) if base == 0.0 && exponent == -1.0
    ));
    assert!((&a / 0.0).is_err());
    assert!(a.div(&zero).is_err());
    assert!(ops::div(&a, 0.0).is_err());
    assert!((3.0 / &zero).is_err());
}

#[test]
fn scalar_zero_numerator_divides() {
    let a = ValueRef::new(0.0);
    let b = ValueRef::new(4.0);
    let c = (&a / &b).unwrap();
    assert_eq!(c.data(), 0.0);
    c.backward();
    assert_eq!(a.grad(), 0.25);
    assert_eq!(b.grad(), 0.0);
}

#[test]
fn raw_numbers_on_either_side() {
    let a = ValueRef::new(3.0);
    assert_eq!((2.0 + &a).data(), 5.0);
    assert_eq!((&a + 2.0).data(), 5.0);
    assert_eq!((2.0 * &a).data(), 6.0);
    assert_eq!((2.0 - &a).data(), -1.0);
    assert_eq!((&a - 2.0).data(), 1.0);
    assert_abs_diff_eq!((6.0 / &a).unwrap().data(), 2.0, epsilon = 1e-12);
    assert_eq!(ops::add(1.0, &a).data(), 4.0);
    assert_eq!(ops::mul(&a, 1.5).data(), 4.5);

    let loss = 2.0 * &a + 1.0;
    loss.backward();
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn constants_are_fresh_leaves() {
    let a = ValueRef::new(1.0);
    let b = &a + 2.0;
    let c = &a + 2.0;
    let (bc, cc) = (b.children(), c.children());
    assert!(bc[1].is_leaf() && cc[1].is_leaf());
    assert!(!bc[1].ptr_eq(&cc[1]));
    assert!(a.children().is_empty());
}

#[test]
fn named_builders_match_operators() {
    let a = ValueRef::new(1.2);
    let b = ValueRef::new(-0.4);
    assert_eq!(ops::sub(&a, &b).data(), (&a - &b).data());
    assert_eq!(ops::div(&a, &b).unwrap().data(), (&a / &b).unwrap().data());
    assert_eq!(ops::neg(&a).data(), (-&a).data());
    assert_eq!(ops::exp(&a).data(), a.exp().data());
    assert_eq!(ops::tanh(&b).data(), b.tanh().data());
    assert_eq!(ops::pow(&a, 2.0).unwrap().data(), a.pow(2.0).unwrap().data());
    assert!(ops::pow(-1.0, 1.5).is_err());
}

#[test]
fn sum_folds_nodes() {
    let xs: Vec<ValueRef> = (1..=4).map(|i| ValueRef::new(f64::from(i))).collect();
    let total: ValueRef = xs.iter().sum();
    assert_eq!(total.data(), 10.0);
    total.backward();
    assert!(xs.iter().all(|x| x.grad() == 1.0));

    let empty: ValueRef = Vec::<ValueRef>::new().into_iter().sum();
    assert_eq!(empty.data(), 0.0);
}

#[test]
fn scalar_chain_compound() {
    // loss = tanh(a * b + c); a=1, b=2, c=-2 => loss = tanh(0) = 0, dtanh = 1
    let a = ValueRef::new(1.0);
    let b = ValueRef::new(2.0);
    let c = ValueRef::new(-2.0);
    let loss = (&(&a * &b) + &c).tanh();
    assert_eq!(loss.data(), 0.0);
    loss.backward();
    assert_abs_diff_eq!(a.grad(), 2.0, epsilon = 1e-10);
    assert_abs_diff_eq!(b.grad(), 1.0, epsilon = 1e-10);
    assert_abs_diff_eq!(c.grad(), 1.0, epsilon = 1e-10);
}

#[test]
fn grad_check_agrees_for_every_builder() {
    let f = |x: &[ValueRef]| -> Result<ValueRef, AutogradError> {
        let (a, b, c) = (&x[0], &x[1], &x[2]);
        let num = (a * b - c).tanh() + (a / b)?.exp();
        let den = (c * c + 1.0).pow(0.5)?;
        Ok((num / den)? + (-a).pow(2.0)?)
    };
    let grads = check_gradients(f, &[0.3, -1.2, 0.8], DEFAULT_EPSILON, DEFAULT_TOLERANCE).unwrap();
    assert_eq!(grads.len(), 3);
}

#[test]
fn grad_check_reports_mismatch() {
    // The output is a fresh leaf: its value depends on the input but no edge leads back to it.
    let f = |x: &[ValueRef]| -> Result<ValueRef, AutogradError> {
        Ok(ValueRef::new(x[0].data() * 2.0))
    };
    let err = check_gradients(f, &[1.0], DEFAULT_EPSILON, DEFAULT_TOLERANCE).unwrap_err();
    assert!(matches!(err, GradCheckError::Mismatch { index: 0, .. }));
}

#[test]
fn grad_check_propagates_domain_errors() {
    let f = |x: &[ValueRef]| x[0].pow(0.5);
    let err = check_gradients(f, &[-1.0], DEFAULT_EPSILON, DEFAULT_TOLERANCE).unwrap_err();
    assert!(matches!(err, GradCheckError::Forward(AutogradError::Domain { .. })));

    let f = |x: &[ValueRef]| 1.0 / &x[0];
    let err = check_gradients(f, &[0.0], DEFAULT_EPSILON, DEFAULT_TOLERANCE).unwrap_err();
    assert!(matches!(err, GradCheckError::Forward(AutogradError::Domain { .. })));
}

#[test]
fn labels_and_debug_output() {
    let w = ValueRef::labeled(-3.0, "w1");
    assert_eq!(w.label().as_deref(), Some("w1"));
    let out = w.tanh();
    out.set_label("o");
    let dbg = format!("{out:?}");
    assert!(dbg.contains("\"o\""));
    assert!(dbg.contains("tanh"));
    assert_eq!(format!("{w}"), "Value(data=-3)");
}

#[test]
fn set_data_updates_leaf() {
    let p = ValueRef::new(1.0);
    let loss = &p * &p;
    loss.backward();
    p.set_data(p.data() - 0.1 * p.grad());
    assert_abs_diff_eq!(p.data(), 0.8, epsilon = 1e-12);
}
