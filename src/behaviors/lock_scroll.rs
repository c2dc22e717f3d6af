use crate::hooks::Scope;
use crate::surface::{DEFAULT_OVERFLOW, SurfaceHandle, SurfaceId, SurfaceRef, Surfaces};

const LOCKED_OVERFLOW: &str = "hidden";

/// Prevents a surface from being scrolled while `lock` is true and restores
/// the previous `overflow` declaration once `lock` turns false or the owning
/// component unmounts.
///
/// Without a `target` the lock applies to the root surface. With a `target`
/// whose slot is still empty (the surface has not mounted yet) nothing
/// happens this cycle; the hook reacts again once the reference resolves.
///
/// The snapshot taken at activation falls back to `"visible"` when the
/// surface had no explicit `overflow`, so an unlock of a previously
/// untouched surface leaves `"visible"` behind rather than an unset
/// declaration.
///
/// # Example
///
/// ```no_run
/// use scrim::runtime::{Element, component};
/// use scrim::use_lock_scroll;
///
/// let modal_host = component("ModalHost", |ctx| {
///     let (open, _set_open) = ctx.use_state(|| true);
///     use_lock_scroll(ctx, open, None);
///     Element::text("content behind a modal")
/// });
/// ```
pub fn use_lock_scroll(scope: &mut Scope, lock: bool, target: Option<&SurfaceRef>) {
    let resolved = match target {
        Some(reference) => {
            let handle = reference.with(|slot| slot.clone());
            match handle {
                Some(handle) if handle.exists() => Some(handle),
                // A reference was supplied but points at nothing yet. The
                // slot still has to be claimed so hook order stays stable,
                // and the deps keep the same shape so a later resolution
                // re-triggers the effect.
                _ => {
                    scope.use_effect((lock, None::<SurfaceId>), |_| None);
                    return;
                }
            }
        }
        None => None,
    };

    let deps = (lock, resolved.as_ref().map(|handle| handle.id().clone()));
    scope.use_effect(deps, move |_| {
        if !lock {
            return None;
        }
        let surface: SurfaceHandle = resolved.unwrap_or_else(Surfaces::root);
        let previous = surface
            .overflow()
            .unwrap_or_else(|| DEFAULT_OVERFLOW.to_string());
        surface.set_overflow(LOCKED_OVERFLOW);
        Some(Box::new(move || {
            if surface.exists() {
                surface.set_overflow(previous);
            }
        }))
    });
}
