//! Property panel binding.
//!
//! The panel widgets themselves live outside this crate. What lives here is
//! the view model they bind to: one [`ShapeEditor`] per selected shape, built
//! from the [`ShapeView`]s the scene publishes, and the [`PanelCommand`]s the
//! widgets send back through [`Scene::apply`](crate::scene::Scene::apply).

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CIRCLE_RADIUS_MAX, CIRCLE_RADIUS_MIN, RECT_SIDE_MAX, RECT_SIDE_MIN};
use crate::geometry::Position;
use crate::scene::SceneEvent;
use crate::shape::{ShapeId, ShapeKind, ShapeView};

/// A mutation issued by the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PanelCommand {
    SetColor { id: ShapeId, color: String },
    SetWidth { id: ShapeId, value: f64 },
    SetHeight { id: ShapeId, value: f64 },
    SetRadius { id: ShapeId, value: f64 },
    Erase { id: ShapeId },
}

impl PanelCommand {
    /// The shape the command targets.
    #[must_use]
    pub fn target(&self) -> ShapeId {
        match self {
            Self::SetColor { id, .. }
            | Self::SetWidth { id, .. }
            | Self::SetHeight { id, .. }
            | Self::SetRadius { id, .. }
            | Self::Erase { id } => *id,
        }
    }
}

/// Which dimension a slider controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Width,
    Height,
    Radius,
}

impl Dimension {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Width => "Width",
            Self::Height => "Height",
            Self::Radius => "Radius",
        }
    }
}

/// A bounded numeric control bound to one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slider {
    pub dimension: Dimension,
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

impl Slider {
    fn new(dimension: Dimension, min: f64, max: f64, value: f64) -> Self {
        Self { dimension, min, max, value }
    }

    /// Pull `value` into the slider range. NaN maps to the minimum.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() { self.min } else { value.clamp(self.min, self.max) }
    }
}

/// Editor for one selected shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeEditor {
    pub id: ShapeId,
    pub kind: ShapeKind,
    /// Read-only.
    pub center: Position,
    pub sliders: Vec<Slider>,
    pub color: String,
}

impl ShapeEditor {
    /// Build the editor for a shape snapshot. Rectangles get width and
    /// height sliders; circles get a radius slider.
    #[must_use]
    pub fn new(view: &ShapeView) -> Self {
        let sliders = match (view.kind, view.radius) {
            (ShapeKind::Circle, Some(radius)) => {
                vec![Slider::new(Dimension::Radius, CIRCLE_RADIUS_MIN, CIRCLE_RADIUS_MAX, radius)]
            }
            (ShapeKind::Circle, None) => Vec::new(),
            (ShapeKind::Rectangle, _) => vec![
                Slider::new(Dimension::Width, RECT_SIDE_MIN, RECT_SIDE_MAX, view.width),
                Slider::new(Dimension::Height, RECT_SIDE_MIN, RECT_SIDE_MAX, view.height),
            ],
        };
        Self { id: view.id, kind: view.kind, center: view.center, sliders, color: view.color.clone() }
    }

    /// Heading shown above the controls.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self.kind {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
        }
    }

    #[must_use]
    pub fn slider(&self, dimension: Dimension) -> Option<&Slider> {
        self.sliders.iter().find(|s| s.dimension == dimension)
    }

    /// Slider input for `dimension`, clamped to range. `None` when this kind
    /// has no such slider.
    #[must_use]
    pub fn set_dimension(&self, dimension: Dimension, value: f64) -> Option<PanelCommand> {
        let value = self.slider(dimension)?.clamp(value);
        let id = self.id;
        Some(match dimension {
            Dimension::Width => PanelCommand::SetWidth { id, value },
            Dimension::Height => PanelCommand::SetHeight { id, value },
            Dimension::Radius => PanelCommand::SetRadius { id, value },
        })
    }

    #[must_use]
    pub fn set_color(&self, color: &str) -> PanelCommand {
        PanelCommand::SetColor { id: self.id, color: color.to_owned() }
    }

    #[must_use]
    pub fn delete(&self) -> PanelCommand {
        PanelCommand::Erase { id: self.id }
    }

    fn refresh(&mut self, view: &ShapeView) {
        *self = Self::new(view);
    }
}

/// The panel's list of editors, kept in step with scene events.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectedShapes {
    editors: Vec<ShapeEditor>,
}

impl SelectedShapes {
    /// One editor per view, in the order given.
    #[must_use]
    pub fn from_views(views: &[ShapeView]) -> Self {
        Self { editors: views.iter().map(ShapeEditor::new).collect() }
    }

    /// Observer entry point; pass to [`Scene::subscribe`](crate::scene::Scene::subscribe).
    pub fn handle(&mut self, event: &SceneEvent) {
        match event {
            SceneEvent::SelectionChanged(views) => *self = Self::from_views(views),
            SceneEvent::ShapeChanged(view) => {
                if let Some(editor) = self.editors.iter_mut().find(|e| e.id == view.id) {
                    editor.refresh(view);
                }
            }
            SceneEvent::ShapeErased(id) => self.editors.retain(|e| e.id != *id),
        }
    }

    #[must_use]
    pub fn editors(&self) -> &[ShapeEditor] {
        &self.editors
    }

    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&ShapeEditor> {
        self.editors.iter().find(|e| e.id == *id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.editors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}
