use flowkeys_config::ExemptionConfig;

use super::event::KeyEvent;
use super::tree::ElementNode;

/// Decides whether a key event originated inside a shortcut-exempt region.
///
/// Injected into the dispatcher so the exemption policy can be swapped or
/// tested without a real element tree. Any `Fn(&KeyEvent<N>) -> bool`
/// closure is a classifier.
pub trait ExemptionClassifier<N> {
    fn is_exempt(&self, event: &KeyEvent<N>) -> bool;
}

impl<N, F> ExemptionClassifier<N> for F
where
    F: Fn(&KeyEvent<N>) -> bool,
{
    fn is_exempt(&self, event: &KeyEvent<N>) -> bool {
        self(event)
    }
}

/// True if `node` or any of its ancestors carries `marker`.
pub fn is_wrapped_with_class<N: ElementNode>(node: &N, marker: &str) -> bool {
    if node.has_class(marker) {
        return true;
    }
    let mut current = node.parent();
    while let Some(element) = current {
        if element.has_class(marker) {
            return true;
        }
        current = element.parent();
    }
    false
}

/// Classifies by walking the target's ancestry for a marker class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerClassifier {
    marker: String,
}

impl MarkerClassifier {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn from_config(config: &ExemptionConfig) -> Self {
        Self::new(config.marker_class.clone())
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl Default for MarkerClassifier {
    fn default() -> Self {
        Self::from_config(&ExemptionConfig::default())
    }
}

impl<N: ElementNode> ExemptionClassifier<N> for MarkerClassifier {
    fn is_exempt(&self, event: &KeyEvent<N>) -> bool {
        event
            .target
            .as_ref()
            .is_some_and(|target| is_wrapped_with_class(target, &self.marker))
    }
}
