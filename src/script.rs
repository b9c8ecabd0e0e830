//! Scripted editor sessions.
//!
//! A script is a JSON document with a list of steps. Each step is either a
//! pointer event, exactly as the browser would deliver it, or an edit the
//! property panel would issue. Shapes are referred to by the order in which
//! the script added them (`0` is the first `add`), since their ids are only
//! known at run time.
//!
//! ```json
//! { "steps": [
//!     { "op": "add", "kind": "rectangle" },
//!     { "op": "pointer_down", "x": 50, "y": 50 },
//!     { "op": "pointer_move", "x": 70, "y": 80 },
//!     { "op": "pointer_up", "x": 70, "y": 80 },
//!     { "op": "set_color", "shape": 0, "color": "red" }
//! ] }
//! ```

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use canvas::geometry::Position;
use canvas::input::{Modifiers, PointerEvent};
use canvas::panel::{Dimension, SelectedShapes};
use canvas::scene::{Scene, SceneError};
use canvas::shape::{ShapeId, ShapeView};
use canvas::surface::{DrawCommand, RecordingSurface};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EditorConfig;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid script: {0}")]
    Json(#[from] serde_json::Error),
    #[error("step {step}: {source}")]
    Scene { step: usize, source: SceneError },
    #[error("step {step}: shape #{index} was never added")]
    UnknownShape { step: usize, index: usize },
    #[error("step {step}: shape #{index} is not selected in the panel")]
    NotInPanel { step: usize, index: usize },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Parse a script document.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::Json`] if the document is malformed.
    pub fn parse(source: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(source)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Add a shape by kind name.
    Add { kind: String },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        shift: bool,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        shift: bool,
    },
    PointerUp { x: f64, y: f64 },
    /// Move the surface on screen, as page scrolling would.
    Scroll { left: f64, top: f64 },
    Select { shape: usize },
    Unselect { shape: usize },
    MoveShape { shape: usize, x: i32, y: i32 },
    SetColor { shape: usize, color: String },
    SetWidth { shape: usize, value: f64 },
    SetHeight { shape: usize, value: f64 },
    SetRadius { shape: usize, value: f64 },
    /// Drag a panel slider for a selected shape; the value is clamped to the
    /// slider range before it reaches the scene.
    Slider { shape: usize, dimension: Dimension, value: f64 },
    Erase { shape: usize },
    Redraw,
}

/// Scene state after a replay.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub shapes: Vec<ShapeView>,
    pub selected: Vec<ShapeId>,
    pub hovered: Option<ShapeId>,
    pub panel: SelectedShapes,
    pub events: usize,
    pub redraws: usize,
    pub draw_commands: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<Vec<DrawCommand>>,
}

/// A scene bound to a recording surface, with the property panel subscribed.
pub struct Replay {
    scene: Scene<RecordingSurface>,
    added: Vec<ShapeId>,
    panel: Rc<RefCell<SelectedShapes>>,
    events: Rc<Cell<usize>>,
}

impl Replay {
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        let mut scene = Scene::with_defaults(config.surface(), config.shapes.clone());
        let panel = Rc::new(RefCell::new(SelectedShapes::default()));
        let events = Rc::new(Cell::new(0));

        let (panel_sink, counter) = (Rc::clone(&panel), Rc::clone(&events));
        scene.subscribe(move |event| {
            counter.set(counter.get() + 1);
            panel_sink.borrow_mut().handle(event);
        });

        Self { scene, added: Vec::new(), panel, events }
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first step error; earlier steps stay applied.
    pub fn run(&mut self, script: &Script) -> Result<(), ReplayError> {
        for (index, step) in script.steps.iter().enumerate() {
            self.step(index, step)?;
        }
        info!(steps = script.steps.len(), shapes = self.scene.len(), "replay finished");
        Ok(())
    }

    /// Apply one step. `index` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Fails on unsupported shape kinds and references to shapes the script
    /// never added.
    pub fn step(&mut self, index: usize, step: &Step) -> Result<(), ReplayError> {
        debug!(index, ?step, "replay step");
        match step {
            Step::Add { kind } => {
                let id = self.scene.add_shape_named(kind).map_err(|source| ReplayError::Scene { step: index, source })?;
                self.added.push(id);
            }
            Step::PointerDown { x, y, shift } => self.scene.pointer_down(pointer(*x, *y, *shift)),
            Step::PointerMove { x, y, shift } => self.scene.pointer_move(pointer(*x, *y, *shift)),
            Step::PointerUp { x, y } => self.scene.pointer_up(pointer(*x, *y, false)),
            Step::Scroll { left, top } => self.scene.surface_mut().move_to(*left, *top),
            Step::Select { shape } => {
                let id = self.shape(index, *shape)?;
                self.scene.select(&id);
            }
            Step::Unselect { shape } => {
                let id = self.shape(index, *shape)?;
                self.scene.unselect(&id);
            }
            Step::MoveShape { shape, x, y } => {
                let id = self.shape(index, *shape)?;
                self.scene.move_shape(&id, Position::new(*x, *y));
            }
            Step::SetColor { shape, color } => {
                let id = self.shape(index, *shape)?;
                self.scene.set_color(&id, color);
            }
            Step::SetWidth { shape, value } => {
                let id = self.shape(index, *shape)?;
                self.scene.set_width(&id, *value);
            }
            Step::SetHeight { shape, value } => {
                let id = self.shape(index, *shape)?;
                self.scene.set_height(&id, *value);
            }
            Step::SetRadius { shape, value } => {
                let id = self.shape(index, *shape)?;
                self.scene.set_radius(&id, *value);
            }
            Step::Slider { shape, dimension, value } => {
                let id = self.shape(index, *shape)?;
                let command = {
                    let panel = self.panel.borrow();
                    let editor = panel.get(&id).ok_or(ReplayError::NotInPanel { step: index, index: *shape })?;
                    editor.set_dimension(*dimension, *value)
                };
                match command {
                    Some(command) => {
                        self.scene.apply(&command);
                    }
                    None => debug!(index, ?dimension, "slider not offered for this shape"),
                }
            }
            Step::Erase { shape } => {
                let id = self.shape(index, *shape)?;
                self.scene.erase_shape(&id);
            }
            Step::Redraw => self.scene.redraw(),
        }
        Ok(())
    }

    #[must_use]
    pub fn scene(&self) -> &Scene<RecordingSurface> {
        &self.scene
    }

    /// Ids of added shapes, in script order.
    #[must_use]
    pub fn added(&self) -> &[ShapeId] {
        &self.added
    }

    /// Snapshot the scene. With `with_frame`, the draw commands currently on
    /// screen are included.
    #[must_use]
    pub fn summary(&self, with_frame: bool) -> Summary {
        let surface = self.scene.surface();
        Summary {
            shapes: self.scene.shapes().iter().map(|s| s.view()).collect(),
            selected: self.scene.selected().iter().map(|v| v.id).collect(),
            hovered: self.scene.hovered(),
            panel: self.panel.borrow().clone(),
            events: self.events.get(),
            redraws: surface.clear_count(),
            draw_commands: surface.commands().len(),
            frame: with_frame.then(|| surface.current_frame().to_vec()),
        }
    }

    fn shape(&self, step: usize, index: usize) -> Result<ShapeId, ReplayError> {
        self.added.get(index).copied().ok_or(ReplayError::UnknownShape { step, index })
    }
}

fn pointer(x: f64, y: f64, shift: bool) -> PointerEvent {
    PointerEvent { client_x: x, client_y: y, modifiers: Modifiers { shift, ..Modifiers::default() } }
}
