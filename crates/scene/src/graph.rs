//! Retained scene graph.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]. A node
//! is a group when it has no [`Shape`] and a mesh when it has one. Names are
//! not unique; several mesh parts of one lighter share the name that picking
//! reports for them.

use glam::{DMat4, DVec3};

use crate::material::Material;
use crate::picking::Aabb;
use crate::transform::Transform;

/// Handle to a node in a [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Geometry of a mesh node, centered on the node origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned box with full edge lengths
    Cuboid { size: DVec3 },
    /// Cylinder along the local Y axis
    Cylinder {
        radius: f64,
        height: f64,
        segments: u32,
    },
    /// Flat rectangle in the local XY plane
    Plane { width: f64, height: f64 },
}

impl Shape {
    /// Bounds of the shape in its node's local space.
    pub fn local_bounds(&self) -> Aabb {
        let half = match *self {
            Shape::Cuboid { size } => size * 0.5,
            Shape::Cylinder { radius, height, .. } => DVec3::new(radius, height * 0.5, radius),
            Shape::Plane { width, height } => DVec3::new(width * 0.5, height * 0.5, 0.0),
        };
        Aabb::new(-half, half)
    }
}

/// A node in the scene graph.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub shape: Option<Shape>,
    pub material: Option<Material>,
    /// Hidden nodes hide their whole subtree and are skipped by picking
    pub visible: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// Parent of this node, `None` for roots.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether this node carries geometry.
    pub fn is_mesh(&self) -> bool {
        self.shape.is_some()
    }
}

/// Scene mutation seam used by the toggle logic.
///
/// Nodes are addressed by name; the first node carrying the name is used.
pub trait PoseTarget {
    /// Compose `matrix` onto the named node's current local pose.
    ///
    /// Returns `false` if no node has that name.
    fn compose_pose(&mut self, name: &str, matrix: DMat4) -> bool;

    /// Current local pose of the named node.
    fn pose(&self, name: &str) -> Option<DMat4>;
}

/// Flat arena of nodes forming a forest of hierarchies.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group node without geometry.
    pub fn add_group(
        &mut self,
        parent: Option<NodeId>,
        name: impl Into<String>,
        transform: Transform,
    ) -> NodeId {
        self.insert(parent, name.into(), transform, None, None)
    }

    /// Add a mesh node.
    pub fn add_mesh(
        &mut self,
        parent: Option<NodeId>,
        name: impl Into<String>,
        transform: Transform,
        shape: Shape,
        material: Material,
    ) -> NodeId {
        self.insert(parent, name.into(), transform, Some(shape), Some(material))
    }

    fn insert(
        &mut self,
        parent: Option<NodeId>,
        name: String,
        transform: Transform,
        shape: Option<Shape>,
        material: Option<Material>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            transform,
            shape,
            material,
            visible: true,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the scene has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node.
    ///
    /// # Panics
    /// Panics if `id` came from a different graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Get a node mutably.
    ///
    /// # Panics
    /// Panics if `id` came from a different graph.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Iterate over all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Iterate over mesh nodes in insertion order.
    pub fn meshes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.iter().filter(|(_, n)| n.is_mesh())
    }

    /// First node with the given name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    /// World matrix of a node, composed through all of its ancestors.
    pub fn world_matrix(&self, id: NodeId) -> DMat4 {
        let mut matrix = self.node(id).transform.local_matrix();
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            let node = self.node(parent);
            matrix = node.transform.local_matrix() * matrix;
            current = node.parent;
        }
        matrix
    }

    /// Whether the node and all of its ancestors are visible.
    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            if !node.visible {
                return false;
            }
            current = node.parent;
        }
        true
    }

    /// Show or hide a node and its subtree.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        self.node_mut(id).visible = visible;
    }
}

impl PoseTarget for SceneGraph {
    fn compose_pose(&mut self, name: &str, matrix: DMat4) -> bool {
        match self.find(name) {
            Some(id) => {
                self.node_mut(id).transform.apply_matrix(matrix);
                true
            }
            None => false,
        }
    }

    fn pose(&self, name: &str) -> Option<DMat4> {
        self.find(name)
            .map(|id| self.node(id).transform.local_matrix())
    }
}
