mod app;
mod component;
mod dispatcher;
mod element;
mod tasks;
mod view;

#[cfg(test)]
mod tests;

pub use ratatui::style::Color;

pub use app::App;
pub use app::AppConfig;
pub(crate) use app::commit_effects;
pub use component::{ComponentElement, ComponentId, component};
pub use dispatcher::{AppMessage, Dispatcher};
pub use element::{
    Element, FlexDirection, FlexNode, LayersNode, ModalNode, PanelNode, TextNode, ViewportNode,
};
pub use tasks::{DefaultRuntimeDriver, RuntimeDriver};
pub use view::{
    FlexView, LayersView, ModalView, PanelView, TextView, View, ViewportView,
};
