//! Topological ordering of the graph reachable from a root node.

use std::collections::HashSet;

use super::scalar::ValueRef;

/// Returns every node reachable from `root`, each exactly once, children before parents.
///
/// Depth-first: a node is emitted once all of its operands have been emitted. Nodes are
/// deduplicated by identity, so two distinct nodes holding equal values both appear, while a
/// node shared by several parents appears once. The root is always last.
///
/// The walk keeps its own stack of `(node, next operand index)` frames instead of recursing,
/// so long chains (e.g. a sum over thousands of terms) do not exhaust the thread stack. The
/// order is the same as the recursive formulation.
#[must_use]
pub fn topological_order(root: &ValueRef) -> Vec<ValueRef> {
    let mut topo = Vec::new();
    let mut visited = HashSet::new();
    let mut stack: Vec<(ValueRef, usize)> = Vec::new();

    visited.insert(root.key());
    stack.push((root.clone(), 0));
    while let Some(frame) = stack.last_mut() {
        let next = frame.0.child(frame.1);
        frame.1 += 1;
        match next {
            Some(child) => {
                if visited.insert(child.key()) {
                    stack.push((child, 0));
                }
            }
            None => {
                if let Some((done, _)) = stack.pop() {
                    topo.push(done);
                }
            }
        }
    }
    topo
}
