//! Core logic for the link-bouquet canvas.
//!
//! This crate owns everything about a bouquet that is not I/O: the media
//! item model, the classifier that turns a pasted URL into a typed media
//! reference, the bouquet document that is the unit of persistence, and the
//! gesture engine that translates pointer streams into item mutations. The
//! host layer (web client or server) is responsible only for wiring events
//! in and persisting the resulting document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`media`] | Media kinds and the placed-item model |
//! | [`classify`] | URL → typed media reference classification |
//! | [`doc`] | The bouquet document (items + canvas settings) |
//! | [`view`] | Pixel/percent geometry for the canvas frame |
//! | [`engine`] | Drag / rotate / scale gesture state machine |
//! | [`consts`] | Shared numeric constants (clamp bounds, slots, etc.) |

pub mod classify;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod media;
pub mod view;
