use std::time::Duration;

use crossterm::event::KeyCode;
use tokio::sync::broadcast::error::RecvError;

use scrim::runtime::{AppConfig, Color, ModalNode, ViewportNode};
use scrim::{
    App, Dispatcher, Element, FrameworkEvent, Scope, StateHandle, SurfaceRef, component,
    key_pressed, use_lock_scroll,
};

const APP_NAME: &str = "Scrim Demo";
const LOG_SURFACE: &str = "activity-log";
const LOG_ROWS: usize = 120;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut app = App::new(APP_NAME, component("AppRoot", app_root)).with_config(AppConfig {
        tick_rate: Duration::from_millis(200),
    });
    if std::env::var_os("SCRIM_HEADLESS").is_some() {
        app = app.headless();
    }
    app.run().await
}

fn app_root(ctx: &mut Scope) -> Element {
    let (modal_open, set_modal) = ctx.use_state(|| false);
    let log = ctx.use_surface(LOG_SURFACE);
    let log_ref: SurfaceRef = ctx.use_ref(|| None);
    log_ref.set(Some(log.clone()));
    use_lock_scroll(ctx, modal_open, Some(&log_ref));

    ctx.use_effect((), move |dispatcher| {
        let mut events = dispatcher.events().subscribe();
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => handle_event(&event, &set_modal, &dispatcher),
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                }
            }
        });
        None
    });

    let lines = ctx.use_memo((), build_log_lines);

    let hint = if modal_open {
        "Press 'm' to close the modal and unlock the log."
    } else {
        "Scroll the log with the mouse wheel. Press 'm' to open a modal, 'q' to quit."
    };

    let mut layers = vec![Element::vstack(vec![
        Element::text(hint),
        Element::panel(
            "Activity",
            Element::viewport(ViewportNode::new(log.clone(), (*lines).clone())),
        ),
        Element::colored_text(
            format!("log overflow: {}", log.overflow_or_default()),
            Color::DarkGray,
        ),
    ])];
    if modal_open {
        layers.push(Element::modal(
            ModalNode::new(Element::text(
                "The log behind this dialog ignores wheel input until it closes.",
            ))
            .title("Scroll locked")
            .width(52)
            .height(7),
        ));
    }
    Element::layered(layers)
}

fn handle_event(event: &FrameworkEvent, toggle: &StateHandle<bool>, dispatcher: &Dispatcher) {
    if key_pressed(event, KeyCode::Char('m')) {
        toggle.update(|open| *open = !*open);
    } else if key_pressed(event, KeyCode::Char('q')) {
        dispatcher.shutdown();
    }
}

fn build_log_lines() -> Vec<String> {
    (1..=LOG_ROWS)
        .map(|index| format!("{index:>4}  worker-{:02} finished batch {index}", index % 7))
        .collect()
}
