use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::mpsc;

use crate::events::EventBus;
use crate::hooks::{HookRegistry, Scope};
use crate::runtime::{AppMessage, ComponentId, Dispatcher, commit_effects};

struct ScopeHarness {
    registry: HookRegistry,
    dispatcher: Dispatcher,
    id: ComponentId,
    _rx: mpsc::Receiver<AppMessage>,
}

impl ScopeHarness {
    fn new(name: &'static str) -> Self {
        let (tx, rx) = mpsc::channel(16);
        Self {
            registry: HookRegistry::new(),
            dispatcher: Dispatcher::new(tx, EventBus::new(4)),
            id: ComponentId::new(&[0], name, None),
            _rx: rx,
        }
    }

    fn render(&self, body: impl FnOnce(&mut Scope)) {
        let store = self.registry.store_for(&self.id);
        let mut scope = Scope::new(self.id.clone(), store, self.dispatcher.clone());
        body(&mut scope);
        let effects = scope.take_effects();
        commit_effects(&self.registry, effects, &self.dispatcher);
    }

    fn unmount(&self) {
        self.registry.prune(&HashSet::new());
    }
}

#[test]
fn use_state_persists_between_renders() {
    let harness = ScopeHarness::new("StateKeeper");

    harness.render(|scope| {
        let (value, handle) = scope.use_state(|| 0i32);
        assert_eq!(value, 0);
        handle.set(5);
    });

    harness.render(|scope| {
        let (value, _handle) = scope.use_state(|| 0i32);
        assert_eq!(value, 5);
    });
}

#[test]
fn use_effect_reruns_only_when_deps_change() {
    let harness = ScopeHarness::new("EffectGate");
    let runs = Arc::new(AtomicUsize::new(0));

    for _ in 0..2 {
        let runs = runs.clone();
        harness.render(move |scope| {
            scope.use_effect(1u32, move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                None
            });
        });
    }
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    let counter = runs.clone();
    harness.render(move |scope| {
        scope.use_effect(2u32, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            None
        });
    });
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[test]
fn use_effect_cleanup_runs_before_next_invocation_and_on_unmount() {
    let harness = ScopeHarness::new("EffectCleanup");
    let cleanups = Arc::new(AtomicUsize::new(0));

    for deps in [1u32, 2u32] {
        let cleanups = cleanups.clone();
        harness.render(move |scope| {
            scope.use_effect(deps, move |_| {
                Some(Box::new(move || {
                    cleanups.fetch_add(1, Ordering::SeqCst);
                }) as crate::hooks::Cleanup)
            });
        });
    }
    // second run replaced the first, so exactly one cleanup has fired
    assert_eq!(cleanups.load(Ordering::SeqCst), 1);

    harness.unmount();
    assert_eq!(cleanups.load(Ordering::SeqCst), 2);
}

#[test]
fn use_ref_returns_the_same_cell_every_render() {
    let harness = ScopeHarness::new("RefCell");

    harness.render(|scope| {
        let cell = scope.use_ref(|| 0usize);
        cell.set(41);
    });

    harness.render(|scope| {
        let cell = scope.use_ref(|| 0usize);
        assert_eq!(cell.with(|value| *value), 41);
        cell.with_mut(|value| *value += 1);
        assert_eq!(cell.with(|value| *value), 42);
    });
}

#[test]
fn use_memo_recomputes_on_dep_change_only() {
    let harness = ScopeHarness::new("Memo");
    let computations = Arc::new(AtomicUsize::new(0));

    for (deps, expected) in [(1u32, 1usize), (1, 1), (2, 2)] {
        let computations = computations.clone();
        harness.render(move |scope| {
            let value = scope.use_memo(deps, || {
                computations.fetch_add(1, Ordering::SeqCst);
                deps * 10
            });
            assert_eq!(*value, deps * 10);
            assert_eq!(computations.load(Ordering::SeqCst), expected);
        });
    }
}

#[test]
fn use_surface_registers_once_and_releases_on_unmount() {
    let harness = ScopeHarness::new("SurfaceOwner");

    harness.render(|scope| {
        let surface = scope.use_surface("scope-owned-surface");
        surface.set_overflow("auto");
    });

    harness.render(|scope| {
        let surface = scope.use_surface("scope-owned-surface");
        // state survived the re-render
        assert_eq!(surface.overflow().as_deref(), Some("auto"));
        assert!(surface.exists());
    });

    harness.unmount();
    assert!(crate::surface::Surfaces::resolve("scope-owned-surface").is_none());
}
