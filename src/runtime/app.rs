use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, trace, warn};

use crate::events::{DEFAULT_TICK_RATE, EventBus};
use crate::hooks::{EffectInvocation, HookRegistry, Scope};
use crate::renderer::Renderer;
use crate::surface::Surfaces;

use super::component::{ComponentElement, ComponentId};
use super::dispatcher::{AppMessage, Dispatcher};
use super::element::{Element, FlexDirection};
use super::tasks::{DefaultRuntimeDriver, RuntimeDriver};
use super::view::{
    FlexView, LayersView, ModalView, PanelView, TextView, View, ViewportView,
};

#[derive(Clone, Copy)]
enum RendererMode {
    Interactive,
    Headless,
}

#[derive(Clone)]
pub struct App {
    name: &'static str,
    root: ComponentElement,
    hooks: Arc<HookRegistry>,
    event_bus: EventBus,
    config: AppConfig,
    driver: Arc<dyn RuntimeDriver>,
    renderer_mode: RendererMode,
}

#[derive(Clone, Copy)]
pub struct AppConfig {
    pub tick_rate: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

impl App {
    pub fn new(name: &'static str, root: ComponentElement) -> Self {
        Self {
            name,
            root,
            hooks: Arc::new(HookRegistry::new()),
            event_bus: EventBus::new(64),
            config: AppConfig::default(),
            driver: Arc::new(DefaultRuntimeDriver),
            renderer_mode: RendererMode::Interactive,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_driver<D>(mut self, driver: D) -> Self
    where
        D: RuntimeDriver + 'static,
    {
        self.driver = Arc::new(driver);
        self
    }

    pub fn headless(mut self) -> Self {
        self.renderer_mode = RendererMode::Headless;
        self
    }

    pub async fn run(self) -> anyhow::Result<()> {
        info!(app = self.name, "starting runtime");
        let (tx, mut rx) = mpsc::channel(128);
        let dispatcher = Dispatcher::new(tx.clone(), self.event_bus.clone());
        let mut renderer = match self.renderer_mode {
            RendererMode::Interactive => Renderer::new(self.name).context("initialize renderer")?,
            RendererMode::Headless => Renderer::headless(),
        };
        let mut last_view: Option<View> = None;

        let event_task = self.driver.spawn_terminal_events(tx.clone());
        let tick_task = self
            .driver
            .spawn_tick_loop(tx.clone(), self.config.tick_rate);
        let shutdown_task = self.driver.spawn_shutdown_watcher(tx.clone());

        if tx.send(AppMessage::RequestRender).await.is_err() {
            warn!(app = self.name, "failed to enqueue initial render request");
        }
        let mut live_components = HashSet::new();

        while let Some(message) = rx.recv().await {
            trace!(app = self.name, message = ?message, "processing app message");
            match message {
                AppMessage::RequestRender => {
                    live_components.clear();
                    let mut effects = Vec::new();
                    let mut path = vec![0usize];
                    let view = self
                        .render_element(
                            Element::from(self.root.clone()),
                            &dispatcher,
                            &mut path,
                            &mut live_components,
                            &mut effects,
                        )?
                        .unwrap_or(View::Empty);

                    let should_render =
                        last_view.as_ref().map(|prev| prev != &view).unwrap_or(true);
                    if should_render {
                        renderer.draw(&view).map_err(|err| {
                            warn!(app = self.name, error = ?err, "renderer draw failed");
                            err
                        })?;
                        trace!(app = self.name, "frame drawn");
                    }
                    last_view = Some(view);
                    trace!(
                        app = self.name,
                        effect_count = effects.len(),
                        "render completed"
                    );
                    commit_effects(&self.hooks, effects, &dispatcher);
                    self.hooks.prune(&live_components);
                }
                AppMessage::ExternalEvent(event) => {
                    trace!(app = self.name, event = ?event, "dispatching external event");
                    Surfaces::handle_event(&event, &dispatcher);
                    self.event_bus.publish(event);
                }
                AppMessage::Shutdown => {
                    info!(app = self.name, "shutdown requested");
                    break;
                }
            }
        }

        drop(renderer);
        trace!(app = self.name, "tearing down runtime tasks");
        abort_and_log("terminal_events", event_task).await;
        abort_and_log("tick_loop", tick_task).await;
        abort_and_log("shutdown_watcher", shutdown_task).await;
        info!(app = self.name, "runtime stopped");
        Ok(())
    }

    fn render_element(
        &self,
        element: Element,
        dispatcher: &Dispatcher,
        path: &mut Vec<usize>,
        live: &mut HashSet<ComponentId>,
        effects: &mut Vec<EffectInvocation>,
    ) -> anyhow::Result<Option<View>> {
        match element {
            Element::Empty => Ok(Some(View::Empty)),
            Element::Text(node) => Ok(Some(View::Text(TextView {
                content: node.content,
                color: node.color,
            }))),
            Element::Flex(node) => {
                let mut children = Vec::new();
                for (index, child) in node.children.into_iter().enumerate() {
                    path.push(index);
                    if let Some(view) =
                        self.render_element(child, dispatcher, path, live, effects)?
                    {
                        children.push(view);
                    }
                    path.pop();
                }
                if children.is_empty() {
                    Ok(Some(View::Empty))
                } else {
                    Ok(Some(View::Flex(FlexView {
                        direction: node.direction,
                        children,
                    })))
                }
            }
            Element::Panel(node) => {
                path.push(0);
                let child = self.render_element(*node.child, dispatcher, path, live, effects)?;
                path.pop();
                Ok(Some(View::Panel(PanelView {
                    title: node.title,
                    child: child.map(Box::new),
                })))
            }
            Element::Viewport(node) => {
                let scroll_top = node.surface.scroll_top();
                Ok(Some(View::Viewport(ViewportView {
                    surface: node.surface,
                    lines: node.lines,
                    color: node.color,
                    scroll_top,
                })))
            }
            Element::Layered(node) => {
                let mut layers = Vec::new();
                for (index, layer) in node.layers.into_iter().enumerate() {
                    path.push(index);
                    if let Some(view) =
                        self.render_element(layer, dispatcher, path, live, effects)?
                    {
                        layers.push(view);
                    }
                    path.pop();
                }
                if layers.is_empty() {
                    Ok(Some(View::Empty))
                } else {
                    Ok(Some(View::Layered(LayersView { layers })))
                }
            }
            Element::Modal(node) => {
                path.push(0);
                let content =
                    self.render_element(*node.content, dispatcher, path, live, effects)?;
                path.pop();
                if let Some(content) = content {
                    Ok(Some(View::Modal(ModalView {
                        title: node.title,
                        content: Box::new(content),
                        width: node.width,
                        height: node.height,
                    })))
                } else {
                    Ok(Some(View::Empty))
                }
            }
            Element::Fragment(children) => {
                let mut views = Vec::new();
                for (index, child) in children.into_iter().enumerate() {
                    path.push(index);
                    if let Some(view) =
                        self.render_element(child, dispatcher, path, live, effects)?
                    {
                        views.push(view);
                    }
                    path.pop();
                }
                if views.is_empty() {
                    Ok(Some(View::Empty))
                } else if views.len() == 1 {
                    Ok(views.pop())
                } else {
                    Ok(Some(View::Flex(FlexView {
                        direction: FlexDirection::Column,
                        children: views,
                    })))
                }
            }
            Element::Component(component) => {
                self.render_component(component, dispatcher, path, live, effects)
            }
        }
    }

    fn render_component(
        &self,
        component: ComponentElement,
        dispatcher: &Dispatcher,
        path: &mut Vec<usize>,
        live: &mut HashSet<ComponentId>,
        effects: &mut Vec<EffectInvocation>,
    ) -> anyhow::Result<Option<View>> {
        let id = ComponentId::new(path, component.name, component.key.as_deref());
        live.insert(id.clone());
        let store = self.hooks.store_for(&id);
        let mut scope = Scope::new(id.clone(), store, dispatcher.clone());
        let child = (component.render)(&mut scope);
        effects.extend(scope.take_effects());
        self.render_element(child, dispatcher, path, live, effects)
    }
}

/// Commits scheduled effects after a frame: for each slot the previous
/// cleanup runs first, then the new task, whose cleanup is stored for the
/// next invocation or for unmount.
pub(crate) fn commit_effects(
    hooks: &HookRegistry,
    effects: Vec<EffectInvocation>,
    dispatcher: &Dispatcher,
) {
    for effect in effects {
        let EffectInvocation {
            component_id,
            slot_index,
            deps,
            task,
        } = effect;
        trace!(component = %component_id, slot_index, "running effect cleanup");
        hooks.with_effect_slot(&component_id, slot_index, |slot| {
            if let Some(cleanup) = slot.take_cleanup() {
                cleanup();
            }
        });
        trace!(component = %component_id, slot_index, "invoking effect task");
        let cleanup = task(dispatcher.clone());
        hooks.with_effect_slot(&component_id, slot_index, |slot| {
            slot.set_deps(deps);
            slot.set_cleanup(cleanup);
        });
    }
}

async fn abort_and_log(label: &str, handle: JoinHandle<()>) {
    handle.abort();
    match handle.await {
        Ok(_) => trace!(task = label, "task aborted cleanly"),
        Err(err) if err.is_cancelled() => trace!(task = label, "task cancellation confirmed"),
        Err(err) => warn!(task = label, error = ?err, "task join failed"),
    }
}
