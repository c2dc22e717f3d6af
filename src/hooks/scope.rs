use std::sync::Arc;

use parking_lot::Mutex;

use crate::runtime::{ComponentId, Dispatcher};
use crate::surface::{SurfaceHandle, Surfaces};

use super::handles::{RefHandle, StateHandle};
use super::registry::{
    AnySlot,
    Cleanup,
    EffectHook,
    EffectInvocation,
    HookSlot,
    HookStore,
    SurfaceSlot,
};

/// Per-render hook cursor for one component. Hooks are positional: a
/// component must call the same hooks in the same order on every render.
pub struct Scope {
    component_id: ComponentId,
    store: Arc<Mutex<HookStore>>,
    dispatcher: Dispatcher,
    hook_cursor: usize,
    pending_effects: Vec<EffectInvocation>,
}

impl Scope {
    pub(crate) fn new(
        component_id: ComponentId,
        store: Arc<Mutex<HookStore>>,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            component_id,
            store,
            dispatcher,
            hook_cursor: 0,
            pending_effects: Vec::new(),
        }
    }

    pub fn use_state<T, F>(&mut self, init: F) -> (T, StateHandle<T>)
    where
        T: Clone + Send + 'static,
        F: FnOnce() -> T,
    {
        let index = self.next_index();
        let shared = {
            let mut store = self.store.lock();
            let slot = store.slot(index);
            match slot {
                HookSlot::Vacant => {
                    let state = Arc::new(Mutex::new(init()));
                    *slot = HookSlot::State(Box::new(state.clone()));
                    state
                }
                HookSlot::State(existing) => existing
                    .downcast_ref::<Arc<Mutex<T>>>()
                    .expect("use_state hook order mismatch")
                    .clone(),
                _ => panic!("use_state hook order mismatch"),
            }
        };
        let value = shared.lock().clone();
        let handle = StateHandle::new(shared, self.dispatcher.clone());
        (value, handle)
    }

    /// Schedules `effect` to run after the frame is committed whenever
    /// `deps` differ from the previous render (and always on the first one).
    /// The cleanup returned by the previous run fires before the next run
    /// and when the component unmounts.
    pub fn use_effect<D, F>(&mut self, deps: D, effect: F)
    where
        D: PartialEq + Clone + Send + Sync + 'static,
        F: FnOnce(Dispatcher) -> Option<Cleanup> + Send + Sync + 'static,
    {
        let index = self.next_index();
        let should_run = {
            let mut store = self.store.lock();
            let slot = store.slot(index);
            match slot {
                HookSlot::Vacant => {
                    *slot = HookSlot::Effect(EffectHook::default());
                    true
                }
                HookSlot::Effect(effect_slot) => effect_slot
                    .deps
                    .as_ref()
                    .and_then(|value| value.downcast_ref::<D>())
                    .map(|existing| existing != &deps)
                    .unwrap_or(true),
                _ => panic!("use_effect hook order mismatch"),
            }
        };

        if should_run {
            self.pending_effects.push(EffectInvocation {
                component_id: self.component_id.clone(),
                slot_index: index,
                deps: Box::new(deps),
                task: Box::new(effect),
            });
        }
    }

    pub fn use_memo<T, D, F>(&mut self, deps: D, compute: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        D: PartialEq + Clone + Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let index = self.next_index();
        let result = {
            let mut store = self.store.lock();
            let slot = store.slot(index);
            match slot {
                HookSlot::Vacant => {
                    let value = Arc::new(compute());
                    *slot = HookSlot::Memo(Box::new(MemoEntry::new(deps.clone(), value.clone())));
                    value
                }
                HookSlot::Memo(entry) => entry
                    .downcast_mut::<MemoEntry>()
                    .expect("use_memo hook order mismatch")
                    .apply_or_update(deps, compute),
                _ => panic!("use_memo hook order mismatch"),
            }
        };
        result
    }

    pub fn use_ref<T, Init>(&mut self, init: Init) -> RefHandle<T>
    where
        T: Send + 'static,
        Init: FnOnce() -> T,
    {
        let index = self.next_index();
        let shared = {
            let mut store = self.store.lock();
            let slot = store.slot(index);
            match slot {
                HookSlot::Vacant => {
                    let handle = Arc::new(Mutex::new(init()));
                    *slot = HookSlot::RefCell(Box::new(RefEntry::new(handle.clone())));
                    handle
                }
                HookSlot::RefCell(entry) => entry
                    .downcast_mut::<RefEntry<T>>()
                    .expect("use_ref hook order mismatch")
                    .handle
                    .clone(),
                _ => panic!("use_ref hook order mismatch"),
            }
        };
        RefHandle::new(shared)
    }

    /// Registers a scrollable surface owned by this component and returns a
    /// handle to it. The surface keeps its state across renders and is
    /// removed from the registry when the component unmounts.
    pub fn use_surface(&mut self, id: impl Into<String>) -> SurfaceHandle {
        let index = self.next_index();
        let id = id.into();
        let handle = {
            let mut store = self.store.lock();
            let slot = store.slot(index);
            match slot {
                HookSlot::Vacant => {
                    let handle = Surfaces::register(&id);
                    *slot = HookSlot::Surface(Box::new(SurfaceSlot::new(handle.clone())));
                    handle
                }
                HookSlot::Surface(entry) => {
                    let entry = entry
                        .downcast_mut::<SurfaceSlot>()
                        .expect("use_surface hook order mismatch");
                    entry.ensure_id(&id);
                    entry.handle()
                }
                _ => panic!("use_surface hook order mismatch"),
            }
        };
        handle
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub(crate) fn take_effects(&mut self) -> Vec<EffectInvocation> {
        std::mem::take(&mut self.pending_effects)
    }

    fn next_index(&mut self) -> usize {
        let current = self.hook_cursor;
        self.hook_cursor += 1;
        current
    }
}

struct MemoEntry {
    deps: Box<AnySlot>,
    value: Box<AnySlot>,
}

struct RefEntry<T: Send + 'static> {
    handle: Arc<Mutex<T>>,
}

impl<T: Send + 'static> RefEntry<T> {
    fn new(handle: Arc<Mutex<T>>) -> Self {
        Self { handle }
    }
}

impl MemoEntry {
    fn new<D, T>(deps: D, value: Arc<T>) -> Self
    where
        D: Send + Sync + 'static,
        T: Send + Sync + 'static,
    {
        Self {
            deps: Box::new(deps),
            value: Box::new(value),
        }
    }

    fn apply_or_update<T, D, F>(&mut self, deps: D, compute: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        D: PartialEq + Clone + Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let should_recompute = self
            .deps
            .as_ref()
            .downcast_ref::<D>()
            .map(|existing| existing != &deps)
            .unwrap_or(true);

        if should_recompute {
            let value = Arc::new(compute());
            self.deps = Box::new(deps);
            self.value = Box::new(value.clone());
            value
        } else {
            self.value
                .as_ref()
                .downcast_ref::<Arc<T>>()
                .expect("use_memo stored value mismatch")
                .clone()
        }
    }
}
