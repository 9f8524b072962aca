// File: crates/chart-data/src/hierarchy.rs
// Summary: Flatten nested value trees into parent-linked rows for treemap-style layouts.

use crate::color::{color_for_value, value_range, Rgb};

/// Parent label used for top-level rows.
pub const ROOT_PARENT: &str = "root";

// Fallback when a caller hands an empty palette.
const FALLBACK_COLOR: Rgb = Rgb::from_u32(0x1f77b4);

/// A nested value tree node. Parents own their children; depth is unbounded
/// in the model.
#[derive(Clone, Debug, PartialEq)]
pub struct HierarchyNode {
    pub name: String,
    pub value: f64,
    pub color: Option<Rgb>,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    pub fn leaf(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value, color: None, children: Vec::new() }
    }

    pub fn node(name: impl Into<String>, value: f64, children: Vec<HierarchyNode>) -> Self {
        Self { name: name.into(), value, color: None, children }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    /// Total node count including this node and all descendants.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(HierarchyNode::count).sum::<usize>()
    }
}

/// One flattened row. `index` is the node's position among its siblings.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatNode {
    pub name: String,
    pub value: f64,
    pub parent: String,
    pub depth: usize,
    pub index: usize,
    pub color: Rgb,
}

/// Flatten a forest depth-first, pre-order: each parent is emitted before its
/// children, siblings in input order. Children carry `parent = node.name` and
/// `depth + 1`; top-level rows use [`ROOT_PARENT`]. An explicit node color
/// wins; otherwise the palette is indexed by sibling position
/// (`index % palette.len()`), so reuse is deterministic and cyclic.
///
/// The output length always equals the total node count; non-leaf parents are
/// rows of their own. Results are computed fresh on every call.
pub fn flatten(nodes: &[HierarchyNode], palette: &[Rgb]) -> Vec<FlatNode> {
    let mut out = Vec::new();
    flatten_into(nodes, ROOT_PARENT, 0, palette, &mut out);
    out
}

fn flatten_into(
    nodes: &[HierarchyNode],
    parent: &str,
    depth: usize,
    palette: &[Rgb],
    out: &mut Vec<FlatNode>,
) {
    for (index, node) in nodes.iter().enumerate() {
        let color = node.color.unwrap_or_else(|| {
            if palette.is_empty() { FALLBACK_COLOR } else { palette[index % palette.len()] }
        });
        out.push(FlatNode {
            name: node.name.clone(),
            value: node.value,
            parent: parent.to_string(),
            depth,
            index,
            color,
        });
        if !node.children.is_empty() {
            flatten_into(&node.children, &node.name, depth + 1, palette, out);
        }
    }
}

/// Re-derive every row's color from the value range of the whole flattened
/// set. Runs as a second pass after [`flatten`] because the range spans the
/// entire tree, not one level. Explicit per-node colors are overridden; the
/// value scale is the single source of color in this mode.
pub fn color_by_value(rows: &mut [FlatNode], palette: &[Rgb]) {
    if rows.is_empty() || palette.is_empty() {
        return;
    }
    let values: Vec<f64> = rows.iter().map(|r| r.value).collect();
    let (min, max) = value_range(&values);
    for row in rows.iter_mut() {
        row.color = color_for_value(row.value, min, max, palette);
    }
}
