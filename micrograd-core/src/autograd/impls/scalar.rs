//! Scalar autograd: computation graph of single float values with backpropagation.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::autograd::{topological_order, AutogradError, ScalarNode};

/// The operation that produced a node, together with its operands.
///
/// This is the node's backward rule: it is fixed when the node is built and replayed by
/// [`ScalarNode::backward`]. Operands are stored inline, so a node's children are exactly the
/// operands of its op.
#[derive(Clone)]
pub enum Op {
    /// Leaf: a constant, an input or a parameter.
    Leaf,
    /// `a + b`
    Add([ValueRef; 2]),
    /// `a * b`
    Mul([ValueRef; 2]),
    /// `a ** k` for a fixed real exponent `k`.
    Pow([ValueRef; 1], f64),
    /// `e ** a`
    Exp([ValueRef; 1]),
    /// `tanh(a)`
    Tanh([ValueRef; 1]),
}

impl Op {
    /// Operand nodes, in the order they were passed to the builder.
    #[must_use]
    pub fn children(&self) -> &[ValueRef] {
        match self {
            Op::Leaf => &[],
            Op::Add(c) | Op::Mul(c) => c,
            Op::Pow(c, _) | Op::Exp(c) | Op::Tanh(c) => c,
        }
    }

    /// Short diagnostic tag (`"+"`, `"*"`, `"**2"`, `"exp"`, `"tanh"`; empty for leaves).
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Op::Leaf => String::new(),
            Op::Add(_) => "+".to_string(),
            Op::Mul(_) => "*".to_string(),
            Op::Pow(_, k) => format!("**{k}"),
            Op::Exp(_) => "exp".to_string(),
            Op::Tanh(_) => "tanh".to_string(),
        }
    }

    /// Moves the operands out, leaving nothing behind to drop recursively.
    fn into_children(self) -> Vec<ValueRef> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(c) | Op::Mul(c) => Vec::from(c),
            Op::Pow(c, _) | Op::Exp(c) | Op::Tanh(c) => Vec::from(c),
        }
    }

    /// Adds this op's local derivative, scaled by the output gradient, into each operand.
    ///
    /// `out_data` is the forward value of the node owning this op; `exp` and `tanh` reuse it.
    fn backward(&self, out_data: f64, out_grad: f64) {
        match self {
            Op::Leaf => {}
            Op::Add([a, b]) => {
                a.add_grad(out_grad);
                b.add_grad(out_grad);
            }
            Op::Mul([a, b]) => {
                let (a_data, b_data) = (a.data(), b.data());
                a.add_grad(out_grad * b_data);
                b.add_grad(out_grad * a_data);
            }
            Op::Pow([a], k) => {
                let local = k * a.data().powf(k - 1.0);
                a.add_grad(out_grad * local);
            }
            Op::Exp([a]) => a.add_grad(out_grad * out_data),
            Op::Tanh([a]) => a.add_grad(out_grad * (1.0 - out_data * out_data)),
        }
    }
}

/// Internal scalar node: forward value, gradient, and the op that produced it.
struct Value {
    /// Forward pass value.
    data: f64,
    /// Gradient of the backward root with respect to this node; accumulated during backward.
    grad: f64,
    /// Producing operation and operands.
    op: Op,
    /// Optional display name, e.g. `w1`.
    label: Option<String>,
}

impl Drop for Value {
    /// Frees the operand chain with a worklist, so deep graphs do not overflow the stack.
    fn drop(&mut self) {
        let mut pending = std::mem::replace(&mut self.op, Op::Leaf).into_children();
        while let Some(child) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(child.0) {
                let mut node = cell.into_inner();
                pending.extend(std::mem::replace(&mut node.op, Op::Leaf).into_children());
            }
        }
    }
}

/// Handle to a scalar node in the autograd computation graph.
///
/// Wraps the node state in `Rc<RefCell<_>>` so that the graph can be shared and
/// gradients can be accumulated during backward. Cloning the handle shares the node;
/// use [`ValueRef::new`] for a distinct node with the same value.
#[derive(Clone)]
pub struct ValueRef(Rc<RefCell<Value>>);

impl ValueRef {
    /// Creates a leaf node (no children) with the given value and zero gradient.
    #[must_use]
    pub fn new(data: f64) -> Self {
        ValueRef::from_op(data, Op::Leaf)
    }

    /// Creates a leaf node carrying a display label.
    #[must_use]
    pub fn labeled(data: f64, label: impl Into<String>) -> Self {
        let v = ValueRef::new(data);
        v.set_label(label);
        v
    }

    fn from_op(data: f64, op: Op) -> Self {
        ValueRef(Rc::new(RefCell::new(Value {
            data,
            grad: 0.0,
            op,
            label: None,
        })))
    }

    /// Overwrites the forward value. Meant for leaf parameters during an optimizer step.
    pub fn set_data(&self, data: f64) {
        self.0.borrow_mut().data = data;
    }

    /// Sets this node's gradient (e.g. to 1.0 at the loss).
    fn set_grad(&self, g: f64) {
        self.0.borrow_mut().grad = g;
    }

    /// Adds to this node's gradient (for accumulation when a value is used multiple times).
    fn add_grad(&self, g: f64) {
        self.0.borrow_mut().grad += g;
    }

    /// Display label, if one was set.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.0.borrow().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.0.borrow_mut().label = Some(label.into());
    }

    /// Diagnostic tag of the producing op; empty for leaves.
    #[must_use]
    pub fn op_label(&self) -> String {
        self.0.borrow().op.label()
    }

    /// Operand nodes of this node, in builder order.
    #[must_use]
    pub fn children(&self) -> Vec<ValueRef> {
        self.0.borrow().op.children().to_vec()
    }

    /// The `index`-th operand, if any.
    pub(crate) fn child(&self, index: usize) -> Option<ValueRef> {
        self.0.borrow().op.children().get(index).cloned()
    }

    /// `true` when the node has no operands.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self.0.borrow().op, Op::Leaf)
    }

    /// Identity comparison: `true` when both handles point at the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &ValueRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Identity key used by graph traversals. Stable while the node is alive.
    pub(crate) fn key(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    /// Addition: `self + other`. Local grads are 1 and 1.
    #[must_use]
    pub fn add(&self, other: impl Into<ValueRef>) -> ValueRef {
        let other: ValueRef = other.into();
        let data = self.data() + other.data();
        ValueRef::from_op(data, Op::Add([self.clone(), other]))
    }

    /// Multiplication: `self * other`. Local grads are `other.data()` and `self.data()`.
    #[must_use]
    pub fn mul(&self, other: impl Into<ValueRef>) -> ValueRef {
        let other: ValueRef = other.into();
        let data = self.data() * other.data();
        ValueRef::from_op(data, Op::Mul([self.clone(), other]))
    }

    /// Power with a constant exponent: `self ** exponent`. Local grad is `k * x^(k-1)`.
    ///
    /// # Errors
    ///
    /// [`AutogradError::Domain`] when the result is undefined over the reals: a non-finite
    /// exponent, a negative base with a non-integer exponent, or a zero base with a negative
    /// exponent. No node is created in that case.
    pub fn pow(&self, exponent: f64) -> Result<ValueRef, AutogradError> {
        let base = self.data();
        if !exponent.is_finite()
            || (base < 0.0 && exponent.fract() != 0.0)
            || (base == 0.0 && exponent < 0.0)
        {
            return Err(AutogradError::Domain { base, exponent });
        }
        let data = base.powf(exponent);
        Ok(ValueRef::from_op(data, Op::Pow([self.clone()], exponent)))
    }

    /// Division: `self * other^-1`.
    ///
    /// # Errors
    ///
    /// [`AutogradError::Domain`] when `other` is zero.
    pub fn div(&self, other: impl Into<ValueRef>) -> Result<ValueRef, AutogradError> {
        let other: ValueRef = other.into();
        Ok(self.mul(other.pow(-1.0)?))
    }

    /// Negation: `self * -1`.
    #[must_use]
    pub fn neg(&self) -> ValueRef {
        self.mul(-1.0)
    }

    /// Subtraction: `self + (-other)`.
    #[must_use]
    pub fn sub(&self, other: impl Into<ValueRef>) -> ValueRef {
        let other: ValueRef = other.into();
        self.add(other.neg())
    }

    /// Exponential: `e^self`. Local grad is the output value.
    #[must_use]
    pub fn exp(&self) -> ValueRef {
        let data = self.data().exp();
        ValueRef::from_op(data, Op::Exp([self.clone()]))
    }

    /// Hyperbolic tangent. Local grad is `1 - tanh^2`.
    #[must_use]
    pub fn tanh(&self) -> ValueRef {
        // f64::tanh equals (e^2x - 1) / (e^2x + 1) without overflowing for large |x|.
        let data = self.data().tanh();
        ValueRef::from_op(data, Op::Tanh([self.clone()]))
    }
}

impl From<f64> for ValueRef {
    /// Wraps a raw number as a fresh constant leaf.
    fn from(data: f64) -> Self {
        ValueRef::new(data)
    }
}

impl From<&ValueRef> for ValueRef {
    fn from(v: &ValueRef) -> Self {
        v.clone()
    }
}

impl fmt::Debug for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0.borrow();
        let mut s = f.debug_struct("Value");
        if let Some(label) = &v.label {
            s.field("label", label);
        }
        s.field("data", &v.data).field("grad", &v.grad);
        if !matches!(v.op, Op::Leaf) {
            s.field("op", &v.op.label());
        }
        s.finish()
    }
}

impl fmt::Display for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.data())
    }
}

impl ScalarNode for ValueRef {
    fn data(&self) -> f64 {
        self.0.borrow().data
    }

    fn grad(&self) -> f64 {
        self.0.borrow().grad
    }

    fn backward(&self) {
        let topo = topological_order(self);
        log::trace!("backward: {} nodes reachable from root", topo.len());
        self.set_grad(1.0);
        for v in topo.iter().rev() {
            let v = v.0.borrow();
            v.op.backward(v.data, v.grad);
        }
    }

    fn zero_grad(&self) {
        self.set_grad(0.0);
    }
}
