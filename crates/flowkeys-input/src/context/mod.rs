//! Context classification: is the focused element inside a region that
//! keeps its native key handling?

mod classifier;
mod event;
mod tree;

pub use classifier::{is_wrapped_with_class, ExemptionClassifier, MarkerClassifier};
pub use event::KeyEvent;
pub use tree::{ElementNode, ElementRef, ElementTree, NodeId};
