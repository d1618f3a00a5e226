//! Rendering seam between the grid and whatever displays it.
//!
//! The core never touches a concrete display API. A `Surface` owns visual
//! elements and hands out opaque handles; the grid keeps exactly one handle
//! per marker and gives it back on teardown.

use glam::Vec2;
use std::convert::Infallible;

pub trait Surface {
    type Handle;
    type Error;

    /// Create and attach one element at `origin` showing `glyph`.
    fn spawn_marker(&mut self, origin: Vec2, glyph: &str) -> Result<Self::Handle, Self::Error>;

    /// Apply a 2D translation relative to the element's origin.
    fn set_translation(&mut self, handle: &Self::Handle, offset: Vec2);

    /// Detach the element. The handle is consumed.
    fn remove_marker(&mut self, handle: Self::Handle);
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemoryElement {
    pub origin: Vec2,
    pub glyph: String,
    pub translation: Vec2,
}

/// Headless surface that keeps elements in memory and counts writes.
#[derive(Debug, Default)]
pub struct MemorySurface {
    slots: Vec<Option<MemoryElement>>,
    live: usize,
    writes: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attached elements.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Total `set_translation` calls since creation or the last `reset_writes`.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn reset_writes(&mut self) {
        self.writes = 0;
    }

    pub fn element(&self, handle: usize) -> Option<&MemoryElement> {
        self.slots.get(handle).and_then(|s| s.as_ref())
    }

    pub fn elements(&self) -> impl Iterator<Item = &MemoryElement> {
        self.slots.iter().flatten()
    }
}

impl Surface for MemorySurface {
    type Handle = usize;
    type Error = Infallible;

    fn spawn_marker(&mut self, origin: Vec2, glyph: &str) -> Result<usize, Infallible> {
        self.slots.push(Some(MemoryElement {
            origin,
            glyph: glyph.to_string(),
            translation: Vec2::ZERO,
        }));
        self.live += 1;
        Ok(self.slots.len() - 1)
    }

    fn set_translation(&mut self, handle: &usize, offset: Vec2) {
        if let Some(Some(el)) = self.slots.get_mut(*handle) {
            el.translation = offset;
            self.writes += 1;
        }
    }

    fn remove_marker(&mut self, handle: usize) {
        if let Some(slot) = self.slots.get_mut(handle) {
            if slot.take().is_some() {
                self.live -= 1;
            }
        }
    }
}
