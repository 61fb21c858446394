//! Element ancestry as seen by the exemption walk.

/// An element handle that can report its classes and its parent.
///
/// Host DOM bindings implement this for their element type.
pub trait ElementNode: Sized {
    fn has_class(&self, class: &str) -> bool;
    fn parent(&self) -> Option<Self>;
}

/// Index of an element within an [`ElementTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct ElementData {
    classes: Vec<String>,
    parent: Option<NodeId>,
}

/// Arena-backed element tree for hosts without a real DOM.
#[derive(Debug, Clone)]
pub struct ElementTree {
    nodes: Vec<ElementData>,
}

impl ElementTree {
    /// A tree holding only an unclassed root element.
    pub fn new() -> Self {
        Self {
            nodes: vec![ElementData {
                classes: Vec::new(),
                parent: None,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child element carrying `classes` under `parent`.
    pub fn append(&mut self, parent: NodeId, classes: &[&str]) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ElementData {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            parent: Some(parent),
        });
        id
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(data) = self.nodes.get_mut(node.0) {
            if !data.classes.iter().any(|c| c == class) {
                data.classes.push(class.to_string());
            }
        }
    }

    pub fn node(&self, id: NodeId) -> ElementRef<'_> {
        ElementRef { tree: self, id }
    }

    /// Number of elements, counting the root, so never less than 1.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

/// A borrowed handle to one element of an [`ElementTree`].
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    tree: &'a ElementTree,
    id: NodeId,
}

impl ElementRef<'_> {
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl ElementNode for ElementRef<'_> {
    fn has_class(&self, class: &str) -> bool {
        self.tree
            .nodes
            .get(self.id.0)
            .is_some_and(|data| data.classes.iter().any(|c| c == class))
    }

    fn parent(&self) -> Option<Self> {
        let parent = self.tree.nodes.get(self.id.0)?.parent?;
        Some(ElementRef {
            tree: self.tree,
            id: parent,
        })
    }
}
