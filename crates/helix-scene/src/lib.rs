#![warn(missing_docs)]

//! Scene graph and curve-construction services for the helix tool.
//!
//! Models the host side of an undoable modeling command: a flat DAG of named
//! nodes stored in a slotmap, addressed through opaque [`NodePath`] handles
//! that never own the node they point at. Curve geometry lives on the node
//! as [`CurveData`] and is validated on construction.
//!
//! # Key types
//!
//! - [`Scene`] — the host scene graph; owns every node
//! - [`NodePath`] — opaque, non-owning reference to a node
//! - [`CurveData`] — NURBS curve geometry (CVs, knots, degree)
//! - [`SceneError`] — what curve construction and deletion can reject

use std::fmt;

use slotmap::SlotMap;

mod curve;
mod error;

pub use curve::{CurveData, CurveForm};
pub use error::{Result, SceneError};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

slotmap::new_key_type! {
    /// Key identifying a node in the scene graph.
    pub struct NodeKey;
}

/// Opaque reference to a scene-graph node.
///
/// A back-reference into host-owned storage: the scene owns the node's
/// lifetime, a path merely names it. A path held across a deletion goes
/// stale and fails to resolve; it is never dangling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    key: NodeKey,
    name: String,
}

impl NodePath {
    /// Name of the node this path was created for.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}", self.name)
    }
}

/// A node in the scene graph.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Unique node name (`curve1`, `curve2`, ...).
    pub name: String,
    /// Optional parent node.
    pub parent: Option<NodeKey>,
    /// Curve geometry carried by this node.
    pub curve: CurveData,
}

/// The host scene graph.
///
/// Owns every entity; commands hold [`NodePath`] back-references only.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<NodeKey, SceneNode>,
    next_curve_number: u32,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a NURBS curve node from explicit geometry.
    ///
    /// Validates the geometry (see [`CurveData::validate`]) before any scene
    /// mutation; on error the scene is unchanged. With `create_new` a fresh
    /// node is added (optionally under `parent`); otherwise the curve data
    /// replaces the geometry of the `parent` node, which must be given.
    #[allow(clippy::too_many_arguments)]
    pub fn create_curve(
        &mut self,
        control_points: Vec<Point3>,
        knots: Vec<f64>,
        degree: usize,
        form: CurveForm,
        rational: bool,
        create_new: bool,
        parent: Option<&NodePath>,
    ) -> Result<NodePath> {
        let curve = CurveData {
            control_points,
            knots,
            degree,
            form,
            rational,
        };
        curve.validate()?;

        let parent_key = match parent {
            Some(path) => {
                if !self.nodes.contains_key(path.key) {
                    return Err(SceneError::UnknownNode(path.name.clone()));
                }
                Some(path.key)
            }
            None => None,
        };

        if !create_new {
            let Some(key) = parent_key else {
                return Err(SceneError::MissingParent);
            };
            let node = &mut self.nodes[key];
            node.curve = curve;
            log::debug!("replaced curve geometry on |{}", node.name);
            return Ok(NodePath {
                key,
                name: node.name.clone(),
            });
        }

        self.next_curve_number += 1;
        let name = format!("curve{}", self.next_curve_number);
        let key = self.nodes.insert(SceneNode {
            name: name.clone(),
            parent: parent_key,
            curve,
        });
        log::debug!("created curve node |{name}");
        Ok(NodePath { key, name })
    }

    /// Delete the node a path refers to.
    ///
    /// Atomic: either the node is removed or (for a stale path) nothing
    /// changes and [`SceneError::UnknownNode`] is returned.
    pub fn delete_node(&mut self, path: &NodePath) -> Result<()> {
        match self.nodes.remove(path.key) {
            Some(node) => {
                log::debug!("deleted node |{}", node.name);
                Ok(())
            }
            None => Err(SceneError::UnknownNode(path.name.clone())),
        }
    }

    /// Resolve a path to its node, or `None` if the path is stale.
    pub fn get(&self, path: &NodePath) -> Option<&SceneNode> {
        self.nodes.get(path.key)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
