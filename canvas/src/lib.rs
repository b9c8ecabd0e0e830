//! Shape and canvas interaction engine for the vector graphics editor.
//!
//! The crate owns the whole interaction model: the closed set of drawable
//! shapes, z-ordered hit-testing, the drag tracker, the scene registry that
//! turns pointer events into hover/selection/drag changes and keeps the
//! rendering surface in step, and the view model the property panel binds
//! to. It never touches the DOM directly; a host hands it a [`surface::Surface`]
//! and forwards pointer events. The browser adapter is in `web` behind the
//! `web` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scene`] | Scene registry, observer events and the [`scene::SceneHost`] slot |
//! | [`shape`] | Shape model, per-kind geometry and [`shape::ShapeView`] snapshots |
//! | [`store`] | Shape store ordered by z-index |
//! | [`hit`] | Topmost-first hit resolution |
//! | [`drag`] | Drag gesture math |
//! | [`geometry`] | Viewport points, canvas positions and bounding rectangles |
//! | [`input`] | Pointer events, modifiers and the gesture state machine |
//! | [`render`] | Shape fills and hover/selection outlines |
//! | [`surface`] | Rendering-surface contract and the in-memory recorder |
//! | [`panel`] | Property panel view model and commands |
//! | [`consts`] | Default geometry, outline styling and slider ranges |

pub mod consts;
pub mod drag;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod panel;
pub mod render;
pub mod scene;
pub mod shape;
pub mod store;
pub mod surface;
#[cfg(feature = "web")]
pub mod web;
