//! The undoable helix tool command.

use crate::error::{HelixError, Result};
use crate::geometry::{HelixGeometry, DEGREE};
use crate::params::{
    HelixParams, NUM_CVS_FLAG, PITCH_FLAG, RADIUS_FLAG, UPSIDE_DOWN_FLAG,
};
use helix_scene::{CurveForm, NodePath, Scene};

/// Name the command is registered and journaled under.
pub const COMMAND_NAME: &str = "helixToolCmd";

/// Where a command instance is in its lifecycle.
///
/// Transitions: `Fresh → Executed → Undone → Executed → ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandState {
    /// Constructed, nothing done yet.
    Fresh,
    /// The curve exists in the scene.
    Executed,
    /// The curve was removed; the command remembers how to recreate it.
    Undone,
}

/// One helix-creation action: parameters, lifecycle state, and the
/// back-reference to the created curve.
///
/// One instance corresponds to one entry on the host undo stack. The scene
/// is borrowed per call; the command never owns the entity it created.
#[derive(Debug)]
pub struct HelixTool {
    params: HelixParams,
    state: CommandState,
    /// Parameters as of the successful execute, for the journal.
    executed_params: Option<HelixParams>,
    path: Option<NodePath>,
}

impl Default for HelixTool {
    fn default() -> Self {
        Self::new()
    }
}

impl HelixTool {
    /// Create a command with default parameters, in the `Fresh` state.
    pub fn new() -> Self {
        Self {
            params: HelixParams::new(),
            state: CommandState::Fresh,
            executed_params: None,
            path: None,
        }
    }

    /// Factory function handed to the host registry.
    pub fn creator() -> Self {
        Self::new()
    }

    /// Current parameter values.
    pub fn params(&self) -> &HelixParams {
        &self.params
    }

    /// Mutable access to the parameters. Meaningful before `execute`;
    /// the journal and redo use the values captured at execute time.
    pub fn params_mut(&mut self) -> &mut HelixParams {
        &mut self.params
    }

    /// Parse Maya-style flag tokens into the parameter store.
    /// See [`HelixParams::parse_args`]; the parse is atomic.
    pub fn parse_args<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        self.params.parse_args(args)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CommandState {
        self.state
    }

    /// The created curve's path, if the command has executed.
    ///
    /// Retained across undo so the host journal can still resolve what the
    /// command created.
    pub fn path(&self) -> Option<&NodePath> {
        self.path.as_ref()
    }

    /// The command participates in the host undo stack.
    pub fn is_undoable(&self) -> bool {
        true
    }

    /// Run the command for the first time. Valid only from `Fresh`.
    ///
    /// On success the created curve's path is stored, the parameters are
    /// snapshotted for the journal, and the state becomes `Executed`. On
    /// failure the state stays `Fresh` and the scene is untouched.
    pub fn execute(&mut self, scene: &mut Scene) -> Result<()> {
        if self.state != CommandState::Fresh {
            return Err(HelixError::InvalidState {
                method: "execute",
                state: self.state,
            });
        }
        let path = self.build_curve(scene)?;
        log::info!("{COMMAND_NAME}: created {path}");
        self.path = Some(path);
        self.executed_params = Some(self.params);
        self.state = CommandState::Executed;
        Ok(())
    }

    /// Remove the created curve from the scene. Valid only from `Executed`.
    ///
    /// Deletion is atomic on the scene side; if it fails the state stays
    /// `Executed`. The path is retained for redo and journal resolution.
    pub fn undo(&mut self, scene: &mut Scene) -> Result<()> {
        if self.state != CommandState::Executed {
            return Err(HelixError::InvalidState {
                method: "undo",
                state: self.state,
            });
        }
        // Executed implies a stored path.
        let path = self.path.as_ref().ok_or(HelixError::InvalidState {
            method: "undo",
            state: self.state,
        })?;
        scene.delete_node(path).map_err(HelixError::Deletion)?;
        log::info!("{COMMAND_NAME}: removed {path}");
        self.state = CommandState::Undone;
        Ok(())
    }

    /// Recreate the curve after an undo. Valid only from `Undone`.
    ///
    /// Re-runs generation with the parameters captured at execute time;
    /// nothing is re-parsed. The resulting node may have a new path.
    pub fn redo(&mut self, scene: &mut Scene) -> Result<()> {
        if self.state != CommandState::Undone {
            return Err(HelixError::InvalidState {
                method: "redo",
                state: self.state,
            });
        }
        let path = self.build_curve(scene)?;
        log::info!("{COMMAND_NAME}: recreated {path}");
        self.path = Some(path);
        self.state = CommandState::Executed;
        Ok(())
    }

    /// Produce the replayable journal line for the host undo history.
    ///
    /// Valid only in the `Executed` state (after `execute` or `redo`);
    /// reflects the parameters as executed, not as later mutated.
    pub fn finalize(&self) -> Result<String> {
        if self.state != CommandState::Executed {
            return Err(HelixError::InvalidState {
                method: "finalize",
                state: self.state,
            });
        }
        // Executed implies a stored snapshot.
        let params = self.executed_params.ok_or(HelixError::InvalidState {
            method: "finalize",
            state: self.state,
        })?;
        Ok(format!(
            "{COMMAND_NAME} {} {} {} {} {} {} {} {}",
            RADIUS_FLAG.0,
            params.radius(),
            PITCH_FLAG.0,
            params.pitch(),
            NUM_CVS_FLAG.0,
            params.num_cvs(),
            UPSIDE_DOWN_FLAG.0,
            params.upside_down(),
        ))
    }

    /// Generate geometry and hand it to the curve-construction service.
    ///
    /// Redo uses the executed snapshot; the initial execute uses the live
    /// parameters (and snapshots them on success).
    fn build_curve(&self, scene: &mut Scene) -> Result<NodePath> {
        let params = self.executed_params.unwrap_or(self.params);
        let geometry = HelixGeometry::generate(&params)?;
        scene
            .create_curve(
                geometry.control_points,
                geometry.knots,
                DEGREE,
                CurveForm::Open,
                false,
                true,
                None,
            )
            .map_err(HelixError::CurveConstruction)
    }
}
