//! Pure functions that collect the nodes along each XPath axis.
//!
//! Every collector appends to `out` in the axis's NATURAL order: document
//! order for forward axes, reverse document order (nearest node first) for
//! the reverse axes (`ancestor`, `ancestor-or-self`, `preceding`,
//! `preceding-sibling`). Predicate positions are counted along this natural
//! order, so getting it right here is what makes `preceding-sibling::*[1]`
//! mean "the nearest preceding sibling".
//!
//! Axes are total functions: there is no error case, only possibly empty
//! output (e.g. `parent` of the root). No collector walks more of the tree
//! than the nodes it reports (plus the ancestor chain for `following` and
//! `preceding`), so evaluation cost tracks result size, not document size.

use crate::ast::Axis;
use crate::node::{NodeKind, NodeView};

/// Dispatches to the collector for `axis`.
pub fn collect<'a, N: NodeView<'a>>(axis: Axis, node: N, out: &mut Vec<N>) {
    match axis {
        Axis::Child => collect_child_nodes(node, out),
        Axis::Descendant => collect_descendant_nodes(node, out),
        Axis::Parent => collect_parent_nodes(node, out),
        Axis::Ancestor => collect_ancestor_nodes(node, out),
        Axis::FollowingSibling => collect_following_sibling_nodes(node, out),
        Axis::PrecedingSibling => collect_preceding_sibling_nodes(node, out),
        Axis::Following => collect_following_nodes(node, out),
        Axis::Preceding => collect_preceding_nodes(node, out),
        Axis::Attribute => collect_attribute_nodes(node, out),
        Axis::Namespace => collect_namespace_nodes(node, out),
        Axis::SelfAxis => collect_self_nodes(node, out),
        Axis::DescendantOrSelf => collect_descendant_or_self_nodes(node, out),
        Axis::AncestorOrSelf => collect_ancestor_or_self_nodes(node, out),
    }
}

pub fn collect_self_nodes<'a, N: NodeView<'a>>(node: N, out: &mut Vec<N>) {
    out.push(node);
}

pub fn collect_child_nodes<'a, N: NodeView<'a>>(node: N, out: &mut Vec<N>) {
    out.extend(node.children());
}

pub fn collect_attribute_nodes<'a, N: NodeView<'a>>(node: N, out: &mut Vec<N>) {
    out.extend(node.attributes());
}

/// The host trees this engine is used with do not model namespace
/// declarations as nodes, so the namespace axis is empty. Known limitation.
pub fn collect_namespace_nodes<'a, N: NodeView<'a>>(_node: N, _out: &mut Vec<N>) {}

/// All proper descendants, pre-order (document order).
pub fn collect_descendant_nodes<'a, N: NodeView<'a>>(node: N, out: &mut Vec<N>) {
    for child in node.children() {
        out.push(child);
        collect_descendant_nodes(child, out);
    }
}

pub fn collect_descendant_or_self_nodes<'a, N: NodeView<'a>>(node: N, out: &mut Vec<N>) {
    out.push(node);
    collect_descendant_nodes(node, out);
}

pub fn collect_parent_nodes<'a, N: NodeView<'a>>(node: N, out: &mut Vec<N>) {
    if let Some(parent) = node.parent() {
        out.push(parent);
    }
}

/// All proper ancestors, nearest first (reverse document order).
pub fn collect_ancestor_nodes<'a, N: NodeView<'a>>(node: N, out: &mut Vec<N>) {
    let mut current = node.parent();
    while let Some(p) = current {
        out.push(p);
        current = p.parent();
    }
}

pub fn collect_ancestor_or_self_nodes<'a, N: NodeView<'a>>(node: N, out: &mut Vec<N>) {
    out.push(node);
    collect_ancestor_nodes(node, out);
}

/// Siblings strictly after the context node, in document order.
pub fn collect_following_sibling_nodes<'a, N: NodeView<'a>>(node: N, out: &mut Vec<N>) {
    if let Some(parent) = node.parent() {
        let mut found_self = false;
        for sibling in parent.children() {
            if found_self {
                out.push(sibling);
            } else if sibling == node {
                found_self = true;
            }
        }
    }
}

/// Siblings strictly before the context node, nearest first. Attributes are
/// not children of their element, so they have no siblings.
pub fn collect_preceding_sibling_nodes<'a, N: NodeView<'a>>(node: N, out: &mut Vec<N>) {
    if node.kind() == NodeKind::Attribute {
        return;
    }
    if let Some(parent) = node.parent() {
        let mark = out.len();
        for sibling in parent.children() {
            if sibling == node {
                break;
            }
            out.push(sibling);
        }
        out[mark..].reverse();
    }
}

/// Every node after the context node in document order, excluding the
/// context's own descendants (and attribute/namespace nodes, which no
/// child-based walk produces). Walks the ancestor chain, expanding the
/// subtrees of each level's following siblings; nearest level first, which
/// is exactly ascending document order.
pub fn collect_following_nodes<'a, N: NodeView<'a>>(node: N, out: &mut Vec<N>) {
    let mut current = node;
    // An attribute orders after its element and before the element's first
    // child, so the owner's whole subtree follows it.
    if node.kind() == NodeKind::Attribute {
        if let Some(owner) = node.parent() {
            collect_descendant_nodes(owner, out);
            current = owner;
        }
    }
    while let Some(parent) = current.parent() {
        let mut found = false;
        for sibling in parent.children() {
            if found {
                collect_descendant_or_self_nodes(sibling, out);
            } else if sibling == current {
                found = true;
            }
        }
        current = parent;
    }
}

/// Every node before the context node in document order, excluding ancestors,
/// nearest first (reverse document order). Mirror image of
/// [`collect_following_nodes`]: at each ancestor level, preceding siblings
/// nearest-first, each expanded as its subtree in reverse pre-order.
pub fn collect_preceding_nodes<'a, N: NodeView<'a>>(node: N, out: &mut Vec<N>) {
    // Nothing precedes an attribute that does not also precede its element.
    let mut current = match node.kind() {
        NodeKind::Attribute => match node.parent() {
            Some(owner) => owner,
            None => return,
        },
        _ => node,
    };
    while let Some(parent) = current.parent() {
        let mut before: Vec<N> = Vec::new();
        for sibling in parent.children() {
            if sibling == current {
                break;
            }
            before.push(sibling);
        }
        for sibling in before.into_iter().rev() {
            collect_subtree_reverse(sibling, out);
        }
        current = parent;
    }
}

/// Emits `node` and its descendants in reverse document order (deepest,
/// rightmost node first; `node` itself last).
fn collect_subtree_reverse<'a, N: NodeView<'a>>(node: N, out: &mut Vec<N>) {
    let children: Vec<N> = node.children().collect();
    for child in children.into_iter().rev() {
        collect_subtree_reverse(child, out);
    }
    out.push(node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::mock::sample_tree;

    fn ids<'a, N: NodeView<'a>>(nodes: &[N]) -> Vec<u64> {
        nodes.iter().map(|n| n.doc_order()).collect()
    }

    #[test]
    fn child_in_document_order() {
        let tree = sample_tree();
        let mut out = Vec::new();
        collect_child_nodes(tree.root(), &mut out);
        assert_eq!(ids(&out), vec![1, 5, 6, 7, 8]);
    }

    #[test]
    fn descendant_is_preorder() {
        let tree = sample_tree();
        let mut out = Vec::new();
        collect_descendant_nodes(tree.root(), &mut out);
        // Attributes (2, 3) are not descendants.
        assert_eq!(ids(&out), vec![1, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn ancestor_is_nearest_first() {
        let tree = sample_tree();
        let mut out = Vec::new();
        collect_ancestor_nodes(tree.node(4), &mut out);
        assert_eq!(ids(&out), vec![1, 0]);

        out.clear();
        collect_ancestor_or_self_nodes(tree.node(4), &mut out);
        assert_eq!(ids(&out), vec![4, 1, 0]);
    }

    #[test]
    fn parent_of_root_is_empty() {
        let tree = sample_tree();
        let mut out: Vec<_> = Vec::new();
        collect_parent_nodes(tree.root(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn sibling_axes() {
        let tree = sample_tree();
        let mut following = Vec::new();
        collect_following_sibling_nodes(tree.node(6), &mut following);
        assert_eq!(ids(&following), vec![7, 8]);

        let mut preceding = Vec::new();
        collect_preceding_sibling_nodes(tree.node(6), &mut preceding);
        // Nearest first.
        assert_eq!(ids(&preceding), vec![5, 1]);
    }

    #[test]
    fn following_excludes_own_descendants() {
        let tree = sample_tree();
        let mut out = Vec::new();
        // Following of <para id="p1"> (id 1): everything after its subtree.
        collect_following_nodes(tree.node(1), &mut out);
        assert_eq!(ids(&out), vec![5, 6, 7, 8, 9]);

        out.clear();
        // Following of the "Hello" text node climbs out of <para>.
        collect_following_nodes(tree.node(4), &mut out);
        assert_eq!(ids(&out), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn preceding_excludes_ancestors_nearest_first() {
        let tree = sample_tree();
        let mut out = Vec::new();
        // Preceding of <para>World</para> (id 8): 7, 6, 5 then the first
        // para's subtree in reverse order. Ancestors (root) excluded.
        collect_preceding_nodes(tree.node(8), &mut out);
        assert_eq!(ids(&out), vec![7, 6, 5, 4, 1]);

        out.clear();
        // Preceding of the "World" text (id 9): same set, its ancestors
        // (para 8, root) excluded.
        collect_preceding_nodes(tree.node(9), &mut out);
        assert_eq!(ids(&out), vec![7, 6, 5, 4, 1]);
    }

    #[test]
    fn attribute_context_nodes_have_no_siblings() {
        let tree = sample_tree();
        let mut out = Vec::new();
        collect_preceding_sibling_nodes(tree.node(3), &mut out);
        assert!(out.is_empty());
        collect_preceding_sibling_nodes(tree.node(2), &mut out);
        assert!(out.is_empty());
        collect_following_sibling_nodes(tree.node(2), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn preceding_and_following_of_an_attribute() {
        let tree = sample_tree();
        // @id on the first para: nothing precedes it that does not also
        // precede the para itself.
        let mut out = Vec::new();
        collect_preceding_nodes(tree.node(2), &mut out);
        assert!(out.is_empty());

        // Everything after it in document order: the para's own subtree,
        // then the para's following nodes.
        out.clear();
        collect_following_nodes(tree.node(2), &mut out);
        assert_eq!(ids(&out), vec![4, 5, 6, 7, 8, 9]);
        assert!(out.iter().all(|n| n.doc_order() > tree.node(2).doc_order()));
    }

    #[test]
    fn attribute_and_namespace() {
        let tree = sample_tree();
        let mut out = Vec::new();
        collect_attribute_nodes(tree.node(1), &mut out);
        assert_eq!(ids(&out), vec![2, 3]);

        out.clear();
        collect_namespace_nodes(tree.node(1), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn descendant_or_self_is_self_plus_descendants() {
        let tree = sample_tree();
        let mut dos = Vec::new();
        collect_descendant_or_self_nodes(tree.node(1), &mut dos);
        assert_eq!(ids(&dos), vec![1, 4]);
    }
}
