// ============================================================================
// NOTIFIER - Puente hacia el widget de notificaciones de la página
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::vote::{Notification, NotificationCategory};

/// Destino de las notificaciones de voto
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// Llama a la función global de la página (por defecto `notif`) con `{ msg, type }`
#[derive(Clone)]
pub struct JsNotifier {
    function_name: String,
}

impl JsNotifier {
    pub fn new(function_name: &str) -> Self {
        Self {
            function_name: function_name.to_string(),
        }
    }

    fn call(&self, notification: &Notification) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let function = js_sys::Reflect::get(&window, &JsValue::from_str(&self.function_name))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| JsValue::from_str(&format!("window.{} is not a function", self.function_name)))?;

        let payload = notification_payload(notification).map_err(|e| JsValue::from_str(&e))?;
        let payload = js_sys::JSON::parse(&payload)?;
        function.call1(&JsValue::NULL, &payload)?;
        Ok(())
    }
}

impl Notifier for JsNotifier {
    fn notify(&self, notification: &Notification) {
        if let Err(e) = self.call(notification) {
            log::warn!("⚠️ [NOTIFIER] {}() no disponible: {:?}", self.function_name, e);
            LogNotifier.notify(notification);
        }
    }
}

/// Solo registra en consola (sin window o sin widget en la página)
#[derive(Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.category {
            NotificationCategory::Success => log::info!("✅ [NOTIFIER] {}", notification.message),
            NotificationCategory::Notice => log::info!("ℹ️ [NOTIFIER] {}", notification.message),
        }
    }
}

/// JSON con la forma que espera el widget
pub fn notification_payload(notification: &Notification) -> Result<String, String> {
    serde_json::to_string(notification).map_err(|e| format!("Error serializando notificación: {}", e))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn install(name: &str, function: &js_sys::Function) {
        let window = web_sys::window().unwrap();
        js_sys::Reflect::set(&window, &JsValue::from_str(name), function).unwrap();
    }

    fn window_prop(name: &str) -> JsValue {
        js_sys::Reflect::get(&web_sys::window().unwrap(), &JsValue::from_str(name)).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_calls_page_function_with_msg_and_type() {
        install(
            "notif_capture",
            &js_sys::Function::new_with_args("payload", "window.__votesLastNotif = payload;"),
        );

        JsNotifier::new("notif_capture").notify(&Notification::notice("Голос уже учтён, спасибо!"));

        let payload = window_prop("__votesLastNotif");
        let msg = js_sys::Reflect::get(&payload, &JsValue::from_str("msg")).unwrap();
        let kind = js_sys::Reflect::get(&payload, &JsValue::from_str("type")).unwrap();
        assert_eq!(msg.as_string().as_deref(), Some("Голос уже учтён, спасибо!"));
        assert_eq!(kind.as_string().as_deref(), Some("notice"));
    }

    #[wasm_bindgen_test]
    fn test_missing_function_falls_back_to_log() {
        let notifier = JsNotifier::new("notif_not_installed");
        let notification = Notification::success("ok");

        assert!(notifier.call(&notification).is_err());
        notifier.notify(&notification);
    }

    #[wasm_bindgen_test]
    fn test_throwing_function_falls_back_to_log() {
        install("notif_throws", &js_sys::Function::new_no_args("throw new Error('boom');"));
        let notifier = JsNotifier::new("notif_throws");
        let notification = Notification::success("ok");

        assert!(notifier.call(&notification).is_err());
        notifier.notify(&notification);
    }
}
