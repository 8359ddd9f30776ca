//! Defines the core abstraction for a navigable, read-only data source tree.
use std::hash::Hash;

/// A qualified name: a resolved namespace URI plus a local part.
///
/// Prefixes are lexical sugar that the parser (or whoever builds node tests)
/// resolves up front; nothing in this crate ever compares prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QName<'a> {
    pub namespace: Option<&'a str>,
    pub local: &'a str,
}

/// The kind of a node in the data source tree, aligned with the XPath 1.0 data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Element,
    Attribute,
    Text,
    Comment,
    ProcessingInstruction,
}

/// The universal contract for a node in a read-only, hierarchical data source.
///
/// The engine is written exclusively against this trait, so it can evaluate
/// location paths over any tree (an XML DOM, a UI widget tree, ...) that
/// implements it. Implementations are lightweight handles into a tree owned
/// elsewhere; the engine borrows them for the duration of one evaluation and
/// never creates, destroys or mutates nodes.
///
/// `'a` is the lifetime of the underlying data source.
///
/// Host-tree preconditions (not defended against here): `parent` must be
/// consistent with `children`/`attributes`, the tree must be acyclic, and it
/// must not be mutated while an evaluation is in flight. All accessors are
/// expected to be O(1) or O(children).
pub trait NodeView<'a>: std::fmt::Debug + Clone + Copy + PartialEq + Eq + Hash {
    /// The kind of the node (Element, Text, Attribute, etc.).
    fn kind(&self) -> NodeKind;

    /// The qualified name of the node. Returns `None` for node kinds that do
    /// not have names, such as text or root nodes. For a processing
    /// instruction this is its target, with no namespace.
    fn name(&self) -> Option<QName<'a>>;

    /// The string value of the node, as defined by the XPath 1.0 `string()`
    /// function: text content for a text node, the concatenation of all
    /// descendant text for an element or the root, the value for an
    /// attribute, the content for a comment or processing instruction.
    fn string_value(&self) -> String;

    /// An iterator over the attribute nodes of this node, in a stable order.
    /// Empty for non-element nodes.
    fn attributes(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// An iterator over the child nodes of this node, in document order.
    /// Empty for leaf nodes (text, attributes, ...). Attributes are not
    /// children.
    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// The parent node, or `None` for the root. Attributes report the element
    /// that carries them.
    fn parent(&self) -> Option<Self>;

    /// The position of this node in document order: a process-assigned index,
    /// unique per node and strictly increasing in a pre-order depth-first
    /// traversal of the tree (an element's attributes order after the element
    /// and before its children). Assigned once at tree construction; the
    /// engine uses it to normalize every externally returned node-set.
    fn doc_order(&self) -> u64;
}

// Mock tree - publicly available so downstream crates can test NodeView
// consumers without standing up a real document.
pub mod mock {
    use super::*;

    #[derive(Debug, Clone)]
    struct MockNodeData<'a> {
        kind: NodeKind,
        name: Option<QName<'a>>,
        value: String,
        children: Vec<usize>,
        attributes: Vec<usize>,
        parent: Option<usize>,
    }

    /// An in-memory tree for tests. Nodes are created in document order, so a
    /// node's arena index doubles as its document-order index.
    #[derive(Debug)]
    pub struct MockTree<'a> {
        nodes: Vec<MockNodeData<'a>>,
    }

    /// A lightweight handle into a [`MockTree`], suitable for the `NodeView`
    /// contract. Holds a reference to its tree so it can navigate itself.
    #[derive(Debug, Clone, Copy)]
    pub struct MockNode<'a> {
        pub id: usize,
        pub tree: &'a MockTree<'a>,
    }

    impl<'a> MockTree<'a> {
        /// Creates a tree containing only the document root (id 0).
        pub fn new() -> Self {
            MockTree {
                nodes: vec![MockNodeData {
                    kind: NodeKind::Root,
                    name: None,
                    value: String::new(),
                    children: Vec::new(),
                    attributes: Vec::new(),
                    parent: None,
                }],
            }
        }

        /// Handle for the document root.
        pub fn root(&self) -> MockNode<'_> {
            MockNode { id: 0, tree: self }
        }

        /// Handle for an arbitrary node id.
        pub fn node(&self, id: usize) -> MockNode<'_> {
            assert!(id < self.nodes.len(), "no such mock node: {id}");
            MockNode { id, tree: self }
        }

        fn push(&mut self, data: MockNodeData<'a>) -> usize {
            let id = self.nodes.len();
            self.nodes.push(data);
            id
        }

        /// Appends an element under `parent`. Nodes must be appended in
        /// document order for `doc_order` to be meaningful.
        pub fn element(
            &mut self,
            parent: usize,
            namespace: Option<&'a str>,
            local: &'a str,
        ) -> usize {
            let id = self.push(MockNodeData {
                kind: NodeKind::Element,
                name: Some(QName { namespace, local }),
                value: String::new(),
                children: Vec::new(),
                attributes: Vec::new(),
                parent: Some(parent),
            });
            self.nodes[parent].children.push(id);
            id
        }

        /// Appends an attribute to the element `owner`.
        pub fn attribute(
            &mut self,
            owner: usize,
            namespace: Option<&'a str>,
            local: &'a str,
            value: &str,
        ) -> usize {
            let id = self.push(MockNodeData {
                kind: NodeKind::Attribute,
                name: Some(QName { namespace, local }),
                value: value.to_string(),
                children: Vec::new(),
                attributes: Vec::new(),
                parent: Some(owner),
            });
            self.nodes[owner].attributes.push(id);
            id
        }

        /// Appends a text node under `parent`.
        pub fn text(&mut self, parent: usize, value: &str) -> usize {
            let id = self.push(MockNodeData {
                kind: NodeKind::Text,
                name: None,
                value: value.to_string(),
                children: Vec::new(),
                attributes: Vec::new(),
                parent: Some(parent),
            });
            self.nodes[parent].children.push(id);
            id
        }

        /// Appends a comment under `parent`.
        pub fn comment(&mut self, parent: usize, value: &str) -> usize {
            let id = self.push(MockNodeData {
                kind: NodeKind::Comment,
                name: None,
                value: value.to_string(),
                children: Vec::new(),
                attributes: Vec::new(),
                parent: Some(parent),
            });
            self.nodes[parent].children.push(id);
            id
        }

        /// Appends a processing instruction under `parent`.
        pub fn pi(&mut self, parent: usize, target: &'a str, value: &str) -> usize {
            let id = self.push(MockNodeData {
                kind: NodeKind::ProcessingInstruction,
                name: Some(QName {
                    namespace: None,
                    local: target,
                }),
                value: value.to_string(),
                children: Vec::new(),
                attributes: Vec::new(),
                parent: Some(parent),
            });
            self.nodes[parent].children.push(id);
            id
        }

        fn collect_text(&self, id: usize, out: &mut String) {
            let data = &self.nodes[id];
            if data.kind == NodeKind::Text {
                out.push_str(&data.value);
            }
            for &child in &data.children {
                self.collect_text(child, out);
            }
        }
    }

    impl<'a> PartialEq for MockNode<'a> {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id && std::ptr::eq(self.tree, other.tree)
        }
    }
    impl<'a> Eq for MockNode<'a> {}

    impl<'a> Hash for MockNode<'a> {
        fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
            self.id.hash(state);
        }
    }

    impl<'a> NodeView<'a> for MockNode<'a> {
        fn kind(&self) -> NodeKind {
            self.tree.nodes[self.id].kind
        }

        fn name(&self) -> Option<QName<'a>> {
            self.tree.nodes[self.id].name
        }

        fn string_value(&self) -> String {
            let data = &self.tree.nodes[self.id];
            match data.kind {
                NodeKind::Root | NodeKind::Element => {
                    let mut out = String::new();
                    self.tree.collect_text(self.id, &mut out);
                    out
                }
                _ => data.value.clone(),
            }
        }

        fn attributes(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
            let tree = self.tree;
            Box::new(
                tree.nodes[self.id]
                    .attributes
                    .clone()
                    .into_iter()
                    .map(move |id| MockNode { id, tree }),
            )
        }

        fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
            let tree = self.tree;
            Box::new(
                tree.nodes[self.id]
                    .children
                    .clone()
                    .into_iter()
                    .map(move |id| MockNode { id, tree }),
            )
        }

        fn parent(&self) -> Option<Self> {
            self.tree.nodes[self.id].parent.map(|id| MockNode {
                id,
                tree: self.tree,
            })
        }

        fn doc_order(&self) -> u64 {
            self.id as u64
        }
    }

    /// A small document shared by the unit tests:
    ///
    /// ```xml
    /// <root>                                   <!-- id 0 -->
    ///   <para id="p1" xml:lang="en">Hello</para> <!-- id 1, attrs 2 & 3, text 4 -->
    ///   <!-- a comment -->                     <!-- id 5 -->
    ///   <div/>                                 <!-- id 6 -->
    ///   <?pi-target pi-value?>                 <!-- id 7 -->
    ///   <para>World</para>                     <!-- id 8, text 9 -->
    /// </root>
    /// ```
    pub fn sample_tree<'a>() -> MockTree<'a> {
        let mut tree = MockTree::new();
        let para1 = tree.element(0, None, "para");
        tree.attribute(para1, None, "id", "p1");
        tree.attribute(
            para1,
            Some("http://www.w3.org/XML/1998/namespace"),
            "lang",
            "en",
        );
        tree.text(para1, "Hello");
        tree.comment(0, " a comment ");
        tree.element(0, None, "div");
        tree.pi(0, "pi-target", "pi-value");
        let para2 = tree.element(0, None, "para");
        tree.text(para2, "World");
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::mock::sample_tree;
    use super::*;

    #[test]
    fn mock_tree_navigation() {
        let tree = sample_tree();
        let root = tree.root();
        assert_eq!(root.kind(), NodeKind::Root);
        assert_eq!(root.parent(), None);

        let children: Vec<_> = root.children().collect();
        assert_eq!(children.len(), 5);
        assert_eq!(children[0].name().unwrap().local, "para");
        assert_eq!(children[1].kind(), NodeKind::Comment);
        assert_eq!(children[3].kind(), NodeKind::ProcessingInstruction);

        let para = children[0];
        let attrs: Vec<_> = para.attributes().collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].string_value(), "p1");
        assert_eq!(attrs[0].parent(), Some(para));
        assert_eq!(
            attrs[1].name().unwrap().namespace,
            Some("http://www.w3.org/XML/1998/namespace")
        );
    }

    #[test]
    fn string_value_concatenates_descendant_text() {
        let tree = sample_tree();
        assert_eq!(tree.root().string_value(), "HelloWorld");
        assert_eq!(tree.node(1).string_value(), "Hello");
        assert_eq!(tree.node(5).string_value(), " a comment ");
        assert_eq!(tree.node(7).string_value(), "pi-value");
    }

    #[test]
    fn doc_order_is_preorder() {
        let tree = sample_tree();
        let mut last = tree.root().doc_order();
        // Walk the tree pre-order (attributes after their element, before
        // children) and check indices strictly increase.
        fn walk<'a>(node: mock::MockNode<'a>, last: &mut u64) {
            for attr in node.attributes() {
                assert!(attr.doc_order() > *last);
                *last = attr.doc_order();
            }
            for child in node.children() {
                assert!(child.doc_order() > *last);
                *last = child.doc_order();
                walk(child, last);
            }
        }
        walk(tree.root(), &mut last);
    }
}
