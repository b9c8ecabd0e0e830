//! Scene registry: owns the shapes, dispatches pointer events to them and
//! keeps the rendering surface in step with shape state.
//!
//! All mutation of shapes flows through [`Scene`] so that the redraw and
//! observer side effects are never skipped. Within one pointer event, hover,
//! selection and drag updates are resolved in a single top-down pass and their
//! side effects are coalesced into at most one full redraw.
//!
//! [`SceneHost`] is the application-owned slot that holds the one scene bound
//! to a surface. Its entry points are safe no-ops before a surface has been
//! attached.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use tracing::{debug, trace, warn};

use crate::geometry::{Point, Position};
use crate::hit;
use crate::input::{InputState, PointerEvent};
use crate::panel::PanelCommand;
use crate::render;
use crate::shape::{Shape, ShapeDefaults, ShapeId, ShapeKind, ShapeView, next_shape_id};
use crate::store::ShapeStore;
use crate::surface::Surface;

/// Error returned by scene construction and shape creation.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The requested kind is not one of the supported shapes.
    #[error("unsupported shape kind: {0}")]
    UnsupportedShapeKind(String),
    /// No rendering surface is attached (or it has no 2D context).
    #[error("no rendering surface attached")]
    MissingRenderingSurface,
}

/// Notifications published to scene observers such as the property panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// The current selection, topmost first.
    SelectionChanged(Vec<ShapeView>),
    /// A shape's visible attributes or position changed.
    ShapeChanged(ShapeView),
    /// A shape was removed from the scene.
    ShapeErased(ShapeId),
}

/// Handle returned by [`Scene::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SceneEvent)>;

/// The scene registry for one rendering surface.
pub struct Scene<S> {
    surface: S,
    store: ShapeStore,
    defaults: ShapeDefaults,
    input: InputState,
    pointer_down: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: Surface> Scene<S> {
    /// Create an empty scene drawing to `surface`.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_defaults(surface, ShapeDefaults::default())
    }

    /// Create an empty scene whose new shapes use `defaults`.
    #[must_use]
    pub fn with_defaults(surface: S, defaults: ShapeDefaults) -> Self {
        Self {
            surface,
            store: ShapeStore::new(),
            defaults,
            input: InputState::Idle,
            pointer_down: false,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // --- Shape creation ---

    /// Construct a shape of `kind` with the scene's defaults and a fresh id.
    /// The shape is not part of the scene until passed to [`Scene::insert`].
    #[must_use]
    pub fn create_shape(&self, kind: ShapeKind) -> Shape {
        Shape::new(next_shape_id(), kind, &self.defaults)
    }

    /// Add a shape on top of the scene and draw it.
    ///
    /// Inserting an id that is already present replaces that shape in its
    /// current stacking slot and redraws everything.
    pub fn insert(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        let replaced = self.store.contains(&id);
        debug!(%id, kind = %shape.kind(), replaced, "shape inserted");
        self.store.insert(shape);
        if replaced {
            self.redraw();
        } else if let (Some(shape), Some(ctx)) = (self.store.get(&id), self.surface.context()) {
            render::draw_shape(ctx, shape);
        }
        id
    }

    /// Create a shape of `kind`, insert it on top and draw it.
    pub fn add_shape(&mut self, kind: ShapeKind) -> ShapeId {
        let shape = self.create_shape(kind);
        self.insert(shape)
    }

    /// Like [`Scene::add_shape`], taking the kind by name.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnsupportedShapeKind`] for unknown names; the
    /// scene is left untouched.
    pub fn add_shape_named(&mut self, kind: &str) -> Result<ShapeId, SceneError> {
        let kind: ShapeKind = kind.parse()?;
        Ok(self.add_shape(kind))
    }

    // --- Pointer input ---

    /// Resolve a press: the topmost shape under the pointer becomes selected
    /// and starts a drag. Without the additive modifier every other shape is
    /// unselected, including when nothing was hit.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        self.pointer_down = true;
        let bounds = self.surface.bounding_rect();
        let pointer = event.point();
        let additive = event.modifiers.additive();
        let hit = hit::topmost_at(&self.store, pointer, bounds);

        let mut selection_changed = false;
        for id in self.store.ids_top_down() {
            let Some(shape) = self.store.get_mut(&id) else {
                continue;
            };
            if Some(id) == hit {
                selection_changed |= shape.select();
                shape.begin_drag(pointer, bounds);
            } else {
                shape.end_drag();
                if !additive {
                    selection_changed |= shape.unselect();
                }
            }
        }

        self.input = hit.map_or(InputState::Idle, InputState::Dragging);
        trace!(x = event.client_x, y = event.client_y, additive, ?hit, "pointer down");

        if selection_changed {
            self.redraw();
        }
        self.update_selected_shape_editors();
    }

    /// Resolve a move: the topmost shape under the pointer is hovered and all
    /// others are unhovered. While the button is down every selected shape is
    /// also fed the move, independent of hover.
    pub fn pointer_move(&mut self, event: PointerEvent) {
        let bounds = self.surface.bounding_rect();
        let pointer = event.point();
        let hit = hit::topmost_at(&self.store, pointer, bounds);

        let mut needs_redraw = false;
        let mut newly_hovered = None;
        let mut moved = Vec::new();
        for id in self.store.ids_top_down() {
            let Some(shape) = self.store.get_mut(&id) else {
                continue;
            };
            if Some(id) == hit {
                if shape.hover() {
                    newly_hovered = Some(id);
                }
            } else if shape.unhover() {
                needs_redraw = true;
            }

            if self.pointer_down && shape.is_selected() && shape.handle_drag_move(pointer, bounds) {
                moved.push(id);
            }
        }

        if !self.pointer_down {
            self.input = hit.map_or(InputState::Idle, InputState::Hovering);
        }
        trace!(x = event.client_x, y = event.client_y, ?hit, moved = moved.len(), "pointer move");

        if needs_redraw || !moved.is_empty() {
            self.redraw();
        } else if let Some(id) = newly_hovered {
            self.draw_hover_outline(&id);
        }
        for id in moved {
            self.notify_shape_changed(&id);
        }
    }

    /// Release: every drag gesture ends, whether or not anything moved.
    pub fn pointer_up(&mut self, event: PointerEvent) {
        self.pointer_down = false;
        let ended = self.store.iter_mut().map(Shape::end_drag).filter(|ended| *ended).count();
        self.input = InputState::Idle;
        trace!(x = event.client_x, y = event.client_y, ended, "pointer up");
    }

    // --- Per-shape state ---

    /// Select one shape. Returns `false` if it was absent or already selected.
    pub fn select(&mut self, id: &ShapeId) -> bool {
        let changed = self.store.get_mut(id).is_some_and(Shape::select);
        if changed {
            self.redraw();
            self.update_selected_shape_editors();
        }
        changed
    }

    /// Unselect one shape. Returns `false` if it was absent or not selected.
    pub fn unselect(&mut self, id: &ShapeId) -> bool {
        let changed = self.store.get_mut(id).is_some_and(Shape::unselect);
        if changed {
            self.redraw();
            self.update_selected_shape_editors();
        }
        changed
    }

    /// Hover one shape, drawing only its outline.
    pub fn hover(&mut self, id: &ShapeId) -> bool {
        let changed = self.store.get_mut(id).is_some_and(Shape::hover);
        if changed {
            self.draw_hover_outline(id);
        }
        changed
    }

    /// Unhover one shape, redrawing the scene to erase its outline.
    pub fn unhover(&mut self, id: &ShapeId) -> bool {
        let changed = self.store.get_mut(id).is_some_and(Shape::unhover);
        if changed {
            self.redraw();
        }
        changed
    }

    // --- Mutation API ---

    /// Change a shape's fill color.
    pub fn set_color(&mut self, id: &ShapeId, color: &str) -> bool {
        self.mutate(id, "color", |shape| shape.set_color(color))
    }

    /// Change a rectangle's width. Ignored for circles.
    pub fn set_width(&mut self, id: &ShapeId, width: f64) -> bool {
        self.mutate(id, "width", |shape| shape.set_width(width))
    }

    /// Change a rectangle's height. Ignored for circles.
    pub fn set_height(&mut self, id: &ShapeId, height: f64) -> bool {
        self.mutate(id, "height", |shape| shape.set_height(height))
    }

    /// Change a circle's radius. Ignored for rectangles.
    pub fn set_radius(&mut self, id: &ShapeId, radius: f64) -> bool {
        self.mutate(id, "radius", |shape| shape.set_radius(radius))
    }

    /// Move a shape to `position` in canvas space.
    pub fn move_shape(&mut self, id: &ShapeId, position: Position) -> bool {
        self.mutate(id, "position", |shape| shape.set_position(position))
    }

    /// Remove a shape and redraw. Erasing an absent id does nothing.
    pub fn erase_shape(&mut self, id: &ShapeId) -> bool {
        let Some(shape) = self.store.remove(id) else {
            return false;
        };
        debug!(%id, kind = %shape.kind(), "shape erased");
        if matches!(self.input, InputState::Hovering(h) | InputState::Dragging(h) if h == *id) {
            self.input = InputState::Idle;
        }
        self.redraw();
        self.publish(&SceneEvent::ShapeErased(*id));
        if shape.is_selected() {
            self.update_selected_shape_editors();
        }
        true
    }

    /// Apply a command issued by the property panel.
    pub fn apply(&mut self, command: &PanelCommand) -> bool {
        match command {
            PanelCommand::SetColor { id, color } => self.set_color(id, color),
            PanelCommand::SetWidth { id, value } => self.set_width(id, *value),
            PanelCommand::SetHeight { id, value } => self.set_height(id, *value),
            PanelCommand::SetRadius { id, value } => self.set_radius(id, *value),
            PanelCommand::Erase { id } => self.erase_shape(id),
        }
    }

    // --- Rendering ---

    /// Clear the surface and draw every shape bottom-first.
    pub fn redraw(&mut self) {
        let (width, height) = (self.surface.width(), self.surface.height());
        let Some(ctx) = self.surface.context() else {
            warn!("surface context unavailable; skipping redraw");
            return;
        };
        render::clear(ctx, width, height);
        for shape in self.store.sorted() {
            render::draw_shape(ctx, shape);
        }
    }

    /// Publish the current selection to observers.
    pub fn update_selected_shape_editors(&mut self) {
        let selection = self.selected();
        debug!(count = selection.len(), "selection published");
        self.publish(&SceneEvent::SelectionChanged(selection));
    }

    // --- Observers ---

    /// Register a listener for [`SceneEvent`]s.
    pub fn subscribe(&mut self, listener: impl FnMut(&SceneEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    // --- Queries ---

    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.store.get(id)
    }

    /// All shapes bottom-first.
    #[must_use]
    pub fn shapes(&self) -> Vec<&Shape> {
        self.store.sorted()
    }

    /// Snapshots of the selected shapes, topmost first.
    #[must_use]
    pub fn selected(&self) -> Vec<ShapeView> {
        self.store.sorted().into_iter().rev().filter(|s| s.is_selected()).map(Shape::view).collect()
    }

    /// The hovered shape, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<ShapeId> {
        self.store.sorted().into_iter().find(|s| s.is_hovered()).map(Shape::id)
    }

    /// Topmost shape under a viewport point.
    #[must_use]
    pub fn shape_at(&self, pointer: Point) -> Option<ShapeId> {
        hit::topmost_at(&self.store, pointer, self.surface.bounding_rect())
    }

    /// Every shape under a viewport point, topmost first.
    #[must_use]
    pub fn shapes_at(&self, pointer: Point) -> Vec<ShapeId> {
        hit::all_at(&self.store, pointer, self.surface.bounding_rect())
    }

    #[must_use]
    pub fn input_state(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    #[must_use]
    pub fn defaults(&self) -> &ShapeDefaults {
        &self.defaults
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // --- Internals ---

    fn mutate(&mut self, id: &ShapeId, attribute: &str, apply: impl FnOnce(&mut Shape) -> bool) -> bool {
        let Some(shape) = self.store.get_mut(id) else {
            return false;
        };
        let kind = shape.kind();
        if !apply(shape) {
            debug!(%id, %kind, attribute, "attribute unchanged or not applicable");
            return false;
        }
        self.redraw();
        self.notify_shape_changed(id);
        true
    }

    fn draw_hover_outline(&mut self, id: &ShapeId) {
        let Some(shape) = self.store.get(id) else {
            return;
        };
        match self.surface.context() {
            Some(ctx) => render::draw_hover_outline(ctx, shape),
            None => warn!(%id, "surface context unavailable; skipping hover outline"),
        }
    }

    fn notify_shape_changed(&mut self, id: &ShapeId) {
        if let Some(view) = self.store.get(id).map(Shape::view) {
            self.publish(&SceneEvent::ShapeChanged(view));
        }
    }

    fn publish(&mut self, event: &SceneEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

/// Application-owned slot for the single scene bound to a surface.
pub struct SceneHost<S> {
    scene: Option<Scene<S>>,
    defaults: ShapeDefaults,
}

impl<S: Surface> Default for SceneHost<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> SceneHost<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(ShapeDefaults::default())
    }

    /// A host whose scene will create shapes with `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: ShapeDefaults) -> Self {
        Self { scene: None, defaults }
    }

    /// Bind a scene to `surface`. If a scene already exists it is returned
    /// unchanged and `surface` is dropped, so input is never wired twice.
    pub fn attach(&mut self, surface: S) -> &mut Scene<S> {
        if self.scene.is_some() {
            debug!("scene already attached; reusing it");
        }
        let defaults = &self.defaults;
        self.scene.get_or_insert_with(|| Scene::with_defaults(surface, defaults.clone()))
    }

    /// Tear the scene down, returning it.
    pub fn detach(&mut self) -> Option<Scene<S>> {
        self.scene.take()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.scene.is_some()
    }

    /// # Errors
    ///
    /// Returns [`SceneError::MissingRenderingSurface`] before [`SceneHost::attach`].
    pub fn scene(&self) -> Result<&Scene<S>, SceneError> {
        self.scene.as_ref().ok_or(SceneError::MissingRenderingSurface)
    }

    /// # Errors
    ///
    /// Returns [`SceneError::MissingRenderingSurface`] before [`SceneHost::attach`].
    pub fn scene_mut(&mut self) -> Result<&mut Scene<S>, SceneError> {
        self.scene.as_mut().ok_or(SceneError::MissingRenderingSurface)
    }

    /// Create and draw a shape on the attached scene.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::MissingRenderingSurface`] when nothing is attached.
    pub fn add_shape(&mut self, kind: ShapeKind) -> Result<ShapeId, SceneError> {
        Ok(self.scene_mut()?.add_shape(kind))
    }

    /// Erase a shape; a no-op when nothing is attached.
    pub fn erase_shape(&mut self, id: &ShapeId) -> bool {
        self.scene.as_mut().is_some_and(|scene| scene.erase_shape(id))
    }

    /// Move a shape; a no-op when nothing is attached.
    pub fn move_shape(&mut self, id: &ShapeId, position: Position) -> bool {
        self.scene.as_mut().is_some_and(|scene| scene.move_shape(id, position))
    }

    /// Redraw; a no-op when nothing is attached.
    pub fn redraw(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            scene.redraw();
        }
    }

    /// Publish the selection; a no-op when nothing is attached.
    pub fn update_selected_shape_editors(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            scene.update_selected_shape_editors();
        }
    }
}
