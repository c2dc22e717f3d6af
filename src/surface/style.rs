use std::collections::HashMap;

/// Fallback reported for a surface that has no explicit `overflow`
/// declaration. Consumers observe this value after an unlock of a previously
/// untouched surface, so it must stay `"visible"` rather than an empty string.
pub const DEFAULT_OVERFLOW: &str = "visible";

pub(crate) const OVERFLOW: &str = "overflow";
pub(crate) const OVERFLOW_HIDDEN: &str = "hidden";

/// String-keyed inline declarations owned by a single surface. Keys are
/// case-insensitive, values are stored verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    props: HashMap<String, String>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props
            .get(&name.to_ascii_lowercase())
            .map(|value| value.as_str())
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.props.insert(name.to_ascii_lowercase(), value.into());
    }

    pub fn unset(&mut self, name: &str) -> Option<String> {
        self.props.remove(&name.to_ascii_lowercase())
    }

    pub fn overflow(&self) -> Option<&str> {
        self.get(OVERFLOW)
    }

    pub fn overflow_or_default(&self) -> &str {
        self.overflow().unwrap_or(DEFAULT_OVERFLOW)
    }

    pub fn set_overflow(&mut self, value: impl Into<String>) {
        self.set(OVERFLOW, value);
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}
