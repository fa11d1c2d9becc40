// ============================================================================
// FIXTURES - Markup temporal para tests en navegador (wasm-bindgen-test)
// ============================================================================

use web_sys::{Element, MouseEvent, MouseEventInit};

use crate::dom::document;

/// `html` montado dentro de un div colgado de <html>; se quita en Drop
pub struct Fixture {
    root: Element,
}

impl Fixture {
    pub fn new(html: &str) -> Self {
        let doc = document().expect("document");
        let root = doc.create_element("div").expect("div");
        root.set_inner_html(html);
        doc.document_element()
            .expect("<html>")
            .append_child(&root)
            .expect("append fixture");
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn find(&self, selector: &str) -> Element {
        self.root
            .query_selector(selector)
            .expect("valid selector")
            .unwrap_or_else(|| panic!("fixture has no {}", selector))
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

/// Click cancelable que burbujea. Devuelve true si algún listener llamó preventDefault.
pub fn click(target: &Element) -> bool {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).expect("click event");
    target.dispatch_event(&event).expect("dispatch click");
    event.default_prevented()
}
