use std::sync::Arc;

use parking_lot::Mutex;

use crate::runtime::Dispatcher;

#[derive(Clone)]
pub struct StateHandle<T: Send + 'static> {
    pub(crate) shared: Arc<Mutex<T>>,
    dispatcher: Dispatcher,
}

impl<T: Send + 'static> StateHandle<T> {
    pub(crate) fn new(shared: Arc<Mutex<T>>, dispatcher: Dispatcher) -> Self {
        Self { shared, dispatcher }
    }

    pub fn set(&self, next: T) {
        *self.shared.lock() = next;
        self.dispatcher.request_render();
    }

    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut *self.shared.lock());
        self.dispatcher.request_render();
    }
}

/// Stable per-component cell. Unlike [`StateHandle`], writing through a
/// `RefHandle` does not schedule a render.
#[derive(Clone)]
pub struct RefHandle<T: Send + 'static> {
    shared: Arc<Mutex<T>>,
}

impl<T: Send + 'static> RefHandle<T> {
    pub(crate) fn new(shared: Arc<Mutex<T>>) -> Self {
        Self { shared }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.shared.lock();
        f(&value)
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut value = self.shared.lock();
        f(&mut value)
    }

    pub fn set(&self, next: T) {
        *self.shared.lock() = next;
    }
}
