// ============================================================================
// ELEMENT HELPERS - Funciones básicas para leer/escribir el DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Leer text content (vacío si no hay)
pub fn text_content(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

/// Obtener atributo
pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Ancestro más cercano (incluido el propio elemento) que cumple el selector
pub fn closest(element: &Element, selector: &str) -> Result<Option<Element>, JsValue> {
    element.closest(selector)
}

/// Primer hermano (en orden del documento, sin contar el propio elemento)
/// que cumple el selector
pub fn first_sibling_matching(element: &Element, selector: &str) -> Result<Option<Element>, JsValue> {
    let parent = match element.parent_element() {
        Some(p) => p,
        None => return Ok(None),
    };

    let children = parent.children();
    for index in 0..children.length() {
        let Some(child) = children.item(index) else {
            continue;
        };
        if &child == element {
            continue;
        }
        if child.matches(selector)? {
            return Ok(Some(child));
        }
    }

    Ok(None)
}

/// Elemento sobre el que se disparó el evento, si es un Element
pub fn event_target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}
