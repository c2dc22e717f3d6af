use ratatui::style::Color;

use crate::surface::SurfaceHandle;

use super::component::ComponentElement;

/// Declarative description of the UI, produced by component render
/// functions and lowered to a [`View`](super::view::View) by the runtime.
#[derive(Clone, Debug)]
pub enum Element {
    Empty,
    Text(TextNode),
    Flex(FlexNode),
    Panel(PanelNode),
    Viewport(ViewportNode),
    Layered(LayersNode),
    Modal(ModalNode),
    Fragment(Vec<Element>),
    Component(ComponentElement),
}

#[derive(Clone, Debug)]
pub struct TextNode {
    pub content: String,
    pub color: Option<Color>,
}

#[derive(Clone, Debug)]
pub struct FlexNode {
    pub direction: FlexDirection,
    pub children: Vec<Element>,
}

#[derive(Clone, Debug)]
pub struct PanelNode {
    pub title: Option<String>,
    pub child: Box<Element>,
}

/// A scrollable region backed by a registered surface. The runtime samples
/// the surface's scroll offset while lowering, so wheel input reaching the
/// surface reflows the next frame.
#[derive(Clone, Debug)]
pub struct ViewportNode {
    pub surface: SurfaceHandle,
    pub lines: Vec<String>,
    pub color: Option<Color>,
}

impl ViewportNode {
    pub fn new(surface: SurfaceHandle, lines: Vec<String>) -> Self {
        Self {
            surface,
            lines,
            color: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Clone, Debug)]
pub struct LayersNode {
    pub layers: Vec<Element>,
}

#[derive(Clone, Debug)]
pub struct ModalNode {
    pub title: Option<String>,
    pub content: Box<Element>,
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl ModalNode {
    pub fn new(content: Element) -> Self {
        Self {
            title: None,
            content: Box::new(content),
            width: None,
            height: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Column,
}

impl Element {
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text(TextNode {
            content: content.into(),
            color: None,
        })
    }

    pub fn colored_text(content: impl Into<String>, color: Color) -> Self {
        Element::Text(TextNode {
            content: content.into(),
            color: Some(color),
        })
    }

    pub fn vstack(children: Vec<Element>) -> Self {
        Element::Flex(FlexNode {
            direction: FlexDirection::Column,
            children,
        })
    }

    pub fn hstack(children: Vec<Element>) -> Self {
        Element::Flex(FlexNode {
            direction: FlexDirection::Row,
            children,
        })
    }

    pub fn panel(title: impl Into<String>, child: Element) -> Self {
        Element::Panel(PanelNode {
            title: Some(title.into()),
            child: Box::new(child),
        })
    }

    pub fn viewport(node: ViewportNode) -> Self {
        Element::Viewport(node)
    }

    pub fn layered(layers: Vec<Element>) -> Self {
        Element::Layered(LayersNode { layers })
    }

    pub fn modal(node: ModalNode) -> Self {
        Element::Modal(node)
    }

    pub fn fragment(children: Vec<Element>) -> Self {
        Element::Fragment(children)
    }
}
