pub mod behaviors;
pub mod events;
pub mod hooks;
pub mod observer;
pub mod renderer;
pub mod runtime;
pub mod surface;

pub use behaviors::use_lock_scroll;
pub use events::{
    EventBus, FrameworkEvent, is_ctrl_c, key_pressed, mouse_position, mouse_scroll_delta,
};
pub use hooks::{RefHandle, Scope, StateHandle};
pub use observer::{ContentRect, SizeObserver, SizeObserverEntry};
pub use runtime::{
    App, AppConfig, ComponentElement, Dispatcher, Element, FlexDirection, ModalNode, View,
    ViewportNode, component,
};
pub use surface::{
    DEFAULT_OVERFLOW, InlineStyle, SurfaceHandle, SurfaceId, SurfaceRef, Surfaces,
};
