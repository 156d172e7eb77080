#![warn(missing_docs)]

//! Undoable helix NURBS curve command.
//!
//! Builds a helical NURBS curve in a [`helix_scene::Scene`] from four
//! parameters (radius, pitch, CV count, winding direction) and manages the
//! create/undo/redo/finalize lifecycle so the operation composes with a
//! host undo stack and journal.
//!
//! # Key types
//!
//! - [`HelixParams`] — the parameter store with Maya-style flag parsing
//! - [`HelixGeometry`] — generated control vertices and knots
//! - [`HelixTool`] — the command state machine
//! - [`ToolRegistry`] — name-to-factory integration point for the host
//!
//! # Example
//!
//! ```
//! use helix_scene::Scene;
//! use helix_tool::HelixTool;
//!
//! let mut scene = Scene::new();
//! let mut tool = HelixTool::new();
//! tool.parse_args(&["-r", "3.0", "-ncv", "24"]).unwrap();
//! tool.execute(&mut scene).unwrap();
//! assert_eq!(scene.len(), 1);
//!
//! tool.undo(&mut scene).unwrap();
//! assert!(scene.is_empty());
//!
//! tool.redo(&mut scene).unwrap();
//! assert_eq!(tool.finalize().unwrap(), "helixToolCmd -r 3 -p 0.25 -ncv 24 -ud false");
//! ```

mod command;
mod error;
mod geometry;
mod params;
mod registry;

pub use command::{CommandState, HelixTool, COMMAND_NAME};
pub use error::{HelixError, Result};
pub use geometry::{HelixGeometry, DEGREE};
pub use params::{
    HelixParams, NUM_CVS_FLAG, PITCH_FLAG, RADIUS_FLAG, UPSIDE_DOWN_FLAG,
};
pub use registry::{ToolCreator, ToolRegistry};
