use web_sys::{Element, HtmlElement};
use yew::NodeRef;

use crate::model::{ContactId, Transform};
use crate::state::LayerSurface;

/// A layer element; the transform goes out as the `--x`, `--y` and `--scale`
/// custom properties its inline CSS reads.
#[derive(Clone)]
pub struct StyleSurface {
    node: NodeRef,
}

impl StyleSurface {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }
}

impl LayerSurface for StyleSurface {
    fn apply(&self, transform: &Transform) {
        let Some(el) = self.node.cast::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        let _ = style.set_property("--x", &format!("{}px", transform.offset_x));
        let _ = style.set_property("--y", &format!("{}px", transform.offset_y));
        let _ = style.set_property("--scale", &transform.scale.to_string());
    }

    fn capture(&self, id: ContactId) {
        if let Some(el) = self.node.cast::<Element>() {
            let _ = el.set_pointer_capture(id.0);
        }
    }

    fn release(&self, id: ContactId) {
        if let Some(el) = self.node.cast::<Element>() {
            let _ = el.release_pointer_capture(id.0);
        }
    }
}
