use ratatui::style::Color;

use crate::surface::SurfaceHandle;

use super::element::FlexDirection;

/// Resolved frame description: components already executed, surface scroll
/// offsets already sampled. Compared against the previous frame to skip
/// redundant draws.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Empty,
    Text(TextView),
    Flex(FlexView),
    Panel(PanelView),
    Viewport(ViewportView),
    Layered(LayersView),
    Modal(ModalView),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextView {
    pub content: String,
    pub color: Option<Color>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlexView {
    pub direction: FlexDirection,
    pub children: Vec<View>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub title: Option<String>,
    pub child: Option<Box<View>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewportView {
    pub surface: SurfaceHandle,
    pub lines: Vec<String>,
    pub color: Option<Color>,
    pub scroll_top: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayersView {
    pub layers: Vec<View>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalView {
    pub title: Option<String>,
    pub content: Box<View>,
    pub width: Option<u16>,
    pub height: Option<u16>,
}
