//! Declarative size-observation contract.
//!
//! This module defines the shape of a facility that reports content-size
//! changes for surfaces. It intentionally ships no implementation: host
//! integrations that can measure their platform (a terminal resize stream, a
//! compositor, a test double) implement [`SizeObserver`] and deliver batches
//! of [`SizeObserverEntry`] values to a [`SizeCallback`].

use crate::surface::SurfaceId;

/// The observed content rectangle of a surface at notification time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContentRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// One notification: the surface whose size changed and its content
/// rectangle when the callback is invoked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeObserverEntry {
    pub target: SurfaceId,
    pub content_rect: ContentRect,
}

/// Observes size changes of registered surfaces.
pub trait SizeObserver {
    /// Adds `target` to the list of observed surfaces.
    fn observe(&mut self, target: &SurfaceId);

    /// Removes `target` from the list of observed surfaces.
    fn unobserve(&mut self, target: &SurfaceId);

    /// Clears every observed target and stops delivering notifications.
    fn disconnect(&mut self);
}

/// Receives batched notifications together with the observer that produced
/// them, so the callback can adjust the observation set in place.
pub type SizeCallback = dyn FnMut(&[SizeObserverEntry], &mut dyn SizeObserver) + Send;
