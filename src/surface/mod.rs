//! Scrollable surfaces and the process-wide registry that owns them.
//!
//! A surface is the unit a scroll lock targets: it carries an inline style
//! map (the `overflow` declaration in particular), a scroll offset, and the
//! extents last measured by the renderer. The distinguished root surface
//! receives wheel input that no other surface claims.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::events::{FrameworkEvent, mouse_position, mouse_scroll_delta};
use crate::runtime::Dispatcher;

mod style;
#[cfg(test)]
mod tests;

pub use style::{DEFAULT_OVERFLOW, InlineStyle};

use style::OVERFLOW_HIDDEN;

pub const ROOT_SURFACE: &str = "root";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(Arc<str>);

impl SurfaceId {
    pub(crate) fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        &*self.0 == ROOT_SURFACE
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hitbox {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Hitbox {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

#[derive(Clone, Debug, Default)]
struct SurfaceEntry {
    style: InlineStyle,
    scroll_top: usize,
    content_rows: usize,
    viewport_rows: u16,
    hitbox: Option<Hitbox>,
}

impl SurfaceEntry {
    fn max_scroll(&self) -> usize {
        self.content_rows.saturating_sub(self.viewport_rows as usize)
    }

    fn scroll_enabled(&self) -> bool {
        self.style.overflow_or_default() != OVERFLOW_HIDDEN
    }
}

/// Registry of every live surface, keyed by id. Input tasks and the render
/// loop both touch it, so entries sit behind a `parking_lot` lock.
pub struct Surfaces {
    entries: RwLock<HashMap<SurfaceId, SurfaceEntry>>,
}

impl Surfaces {
    fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn global() -> &'static Self {
        static REGISTRY: OnceLock<Surfaces> = OnceLock::new();
        REGISTRY.get_or_init(Self::new)
    }

    /// Registers a surface under `id`, keeping any existing state when the
    /// id is already live. Re-registration happens on every render of the
    /// owning component and must not reset scroll or style.
    pub fn register(id: &str) -> SurfaceHandle {
        let registry = Self::global();
        let id = SurfaceId::new(id);
        registry
            .entries
            .write()
            .entry(id.clone())
            .or_insert_with(SurfaceEntry::default);
        SurfaceHandle { id }
    }

    /// The root surface, the default scroll-lock target. Created lazily so
    /// that it always resolves.
    pub fn root() -> SurfaceHandle {
        Self::register(ROOT_SURFACE)
    }

    pub fn resolve(id: &str) -> Option<SurfaceHandle> {
        let registry = Self::global();
        let id = SurfaceId::new(id);
        registry
            .entries
            .read()
            .contains_key(&id)
            .then_some(SurfaceHandle { id })
    }

    pub fn remove(id: &SurfaceId) {
        Self::global().entries.write().remove(id);
    }

    /// Routes wheel input to the surface under the cursor, falling back to
    /// the root surface. Requests a redraw when an offset actually moved.
    pub fn handle_event(event: &FrameworkEvent, dispatcher: &Dispatcher) {
        let delta = mouse_scroll_delta(event);
        if delta == 0 {
            return;
        }
        let target = mouse_position(event)
            .and_then(|(column, row)| Self::surface_at(column, row))
            .unwrap_or_else(Self::root);
        if target.scroll_by(-delta) {
            dispatcher.request_render();
        }
    }

    fn surface_at(column: u16, row: u16) -> Option<SurfaceHandle> {
        let registry = Self::global();
        let entries = registry.entries.read();
        entries
            .iter()
            .find(|(id, entry)| {
                !id.is_root()
                    && entry
                        .hitbox
                        .map(|hitbox| hitbox.contains(column, row))
                        .unwrap_or(false)
            })
            .map(|(id, _)| SurfaceHandle { id: id.clone() })
    }

    fn with_entry<R>(id: &SurfaceId, f: impl FnOnce(&mut SurfaceEntry) -> R) -> Option<R> {
        let registry = Self::global();
        let mut entries = registry.entries.write();
        entries.get_mut(id).map(f)
    }

    fn read_entry<R>(id: &SurfaceId, f: impl FnOnce(&SurfaceEntry) -> R) -> Option<R> {
        let registry = Self::global();
        let entries = registry.entries.read();
        entries.get(id).map(f)
    }
}

/// Cloneable reference to a registered surface. All accessors are silent
/// no-ops (or `None`) once the surface has been removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceHandle {
    id: SurfaceId,
}

impl SurfaceHandle {
    pub fn id(&self) -> &SurfaceId {
        &self.id
    }

    pub fn exists(&self) -> bool {
        Surfaces::read_entry(&self.id, |_| ()).is_some()
    }

    /// The raw `overflow` declaration, `None` when unset.
    pub fn overflow(&self) -> Option<String> {
        Surfaces::read_entry(&self.id, |entry| {
            entry.style.overflow().map(|value| value.to_string())
        })
        .flatten()
    }

    /// The `overflow` declaration with the `"visible"` fallback applied.
    pub fn overflow_or_default(&self) -> String {
        Surfaces::read_entry(&self.id, |entry| entry.style.overflow_or_default().to_string())
            .unwrap_or_else(|| DEFAULT_OVERFLOW.to_string())
    }

    pub fn set_overflow(&self, value: impl Into<String>) {
        let value = value.into();
        Surfaces::with_entry(&self.id, |entry| entry.style.set_overflow(value));
    }

    pub fn clear_overflow(&self) -> Option<String> {
        Surfaces::with_entry(&self.id, |entry| entry.style.unset(style::OVERFLOW)).flatten()
    }

    pub fn style(&self) -> Option<InlineStyle> {
        Surfaces::read_entry(&self.id, |entry| entry.style.clone())
    }

    pub fn scroll_enabled(&self) -> bool {
        Surfaces::read_entry(&self.id, SurfaceEntry::scroll_enabled).unwrap_or(false)
    }

    pub fn scroll_top(&self) -> usize {
        Surfaces::read_entry(&self.id, |entry| entry.scroll_top).unwrap_or(0)
    }

    /// Moves the scroll offset by `step` rows (positive toward the bottom),
    /// clamped to the measured content extent. Returns whether the offset
    /// changed; a hidden or missing surface refuses to move.
    pub fn scroll_by(&self, step: i32) -> bool {
        Surfaces::with_entry(&self.id, |entry| {
            if !entry.scroll_enabled() {
                return false;
            }
            let max = entry.max_scroll();
            let next = entry
                .scroll_top
                .saturating_add_signed(step as isize)
                .min(max);
            if next == entry.scroll_top {
                return false;
            }
            entry.scroll_top = next;
            true
        })
        .unwrap_or(false)
    }

    pub(crate) fn record_measurements(
        &self,
        hitbox: Hitbox,
        viewport_rows: u16,
        content_rows: usize,
    ) {
        Surfaces::with_entry(&self.id, |entry| {
            entry.hitbox = Some(hitbox);
            entry.viewport_rows = viewport_rows;
            entry.content_rows = content_rows;
            entry.scroll_top = entry.scroll_top.min(entry.max_scroll());
        });
    }
}

/// Component-held reference to a surface that may not have mounted yet: the
/// slot stays `None` until the owning component binds a handle into it.
pub type SurfaceRef = crate::hooks::RefHandle<Option<SurfaceHandle>>;
