// ============================================================================
// EVENT HANDLING - Listeners con ciclo de vida
// ============================================================================
// A diferencia de `closure.forget()`, el listener guarda su Closure y se
// desregistra en Drop: montar/desmontar no acumula listeners.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, MouseEvent};

/// Listener de click registrado sobre un ancestro estable (p.ej. document)
pub struct EventListener {
    closure: Closure<dyn FnMut(MouseEvent)>,
    target: EventTarget,
    event_type: String,
}

impl EventListener {
    /// Registrar listener de click
    pub fn click<F>(target: &EventTarget, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        Self::new(target, "click", handler)
    }

    pub fn new<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            closure,
            target: target.clone(),
            event_type: event_type.to_string(),
        })
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self.target.remove_event_listener_with_callback(
            &self.event_type,
            self.closure.as_ref().unchecked_ref(),
        ) {
            log::warn!("⚠️ [EVENTS] No se pudo quitar listener '{}': {:?}", self.event_type, e);
        }
    }
}
