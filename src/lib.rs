// ============================================================================
// COMMENT VOTES - Votos (+/-) de comentarios en Rust/WASM
// ============================================================================
// - Models: dirección, resultado, contador, notificación (lógica pura)
// - Controls: VoteControl tipado desde el DOM
// - Services: SOLO HTTP y puente hacia notif()
// - Handlers: click delegado -> POST -> efecto en la UI
// ============================================================================

pub mod config;
pub mod controls;
pub mod dom;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::dom::{document, EventListener};
use crate::handlers::VoteClickHandler;
use crate::services::JsNotifier;

// Listener delegado activo; None mientras no está montado
thread_local! {
    static VOTE_LISTENER: RefCell<Option<EventListener>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 [VOTES] Comment votes ({})", CONFIG.scoped_control_selector());

    mount_vote_controls()
}

/// Registrar un único listener de click en `document` para todos los controles
/// de voto, incluidos los que se rendericen después. Llamarla de nuevo no duplica.
#[wasm_bindgen]
pub fn mount_vote_controls() -> Result<(), JsValue> {
    if is_mounted() {
        log::warn!("⚠️ [VOTES] Ya montado, ignorando llamada duplicada");
        return Ok(());
    }

    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;

    let config = CONFIG.clone();
    let notifier = Rc::new(JsNotifier::new(&config.notifier_function));
    let handler = Rc::new(VoteClickHandler::new(config, notifier));

    let listener = EventListener::click(&doc, move |event: web_sys::MouseEvent| {
        handler.handle_click(&event);
    })?;

    log::debug!("✅ [VOTES] Listener delegado '{}' montado", listener.event_type());
    VOTE_LISTENER.with(|cell| {
        *cell.borrow_mut() = Some(listener);
    });

    Ok(())
}

/// Quitar el listener (p.ej. antes de reemplazar el bloque de comentarios)
#[wasm_bindgen]
pub fn unmount_vote_controls() {
    let removed = VOTE_LISTENER.with(|cell| cell.borrow_mut().take());
    if removed.is_some() {
        log::debug!("🧹 [VOTES] Listener delegado desmontado");
    }
}

pub fn is_mounted() -> bool {
    VOTE_LISTENER.with(|cell| cell.borrow().is_some())
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
