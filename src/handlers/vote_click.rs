// ============================================================================
// VOTE CLICK HANDLER - click -> POST -> contador + notificación
// ============================================================================
// Cada click es una transacción independiente: sin estado entre clicks,
// sin deduplicar peticiones en vuelo. El contador se lee al llegar la
// respuesta, no al hacer click.
// ============================================================================

use std::rc::Rc;
use web_sys::{Element, MouseEvent};

use crate::config::VoteConfig;
use crate::controls::{TallyDisplay, VoteControl};
use crate::dom::{closest, event_target_element};
use crate::models::vote::{VoteEffect, VoteOutcome};
use crate::services::{Notifier, VoteClient};

pub struct VoteClickHandler {
    config: VoteConfig,
    client: VoteClient,
    notifier: Rc<dyn Notifier>,
}

impl VoteClickHandler {
    pub fn new(config: VoteConfig, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            config,
            client: VoteClient::new(),
            notifier,
        }
    }

    /// Control de voto sobre el que cayó el click, si está dentro de un contenedor de comentarios
    pub fn resolve_target(&self, event: &MouseEvent) -> Option<Element> {
        let target = event_target_element(event)?;
        let control = closest(&target, &self.config.control_selector).ok()??;
        let parent = control.parent_element()?;
        closest(&parent, &self.config.container_selector).ok()??;
        Some(control)
    }

    /// Punto de entrada del listener delegado
    pub fn handle_click(self: &Rc<Self>, event: &MouseEvent) {
        let Some(element) = self.resolve_target(event) else {
            return;
        };

        event.prevent_default();

        let control = match VoteControl::from_element(&element, &self.config) {
            Ok(control) => control,
            Err(e) => {
                log::warn!("⚠️ [VOTES] Control de voto inválido: {}", e);
                return;
            }
        };

        let handler = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            handler.vote(control).await;
        });
    }

    /// Enviar el voto y aplicar la respuesta. Fallos de red se descartan (solo log).
    pub async fn vote(&self, control: VoteControl) {
        match self.client.post_vote(&control.endpoint).await {
            Ok(status) => {
                self.apply(VoteOutcome::from_status(status), &control);
            }
            Err(e) => {
                log::error!("❌ [VOTES] Voto a {} no enviado: {}", control.endpoint, e);
            }
        }
    }

    pub fn apply<D: TallyDisplay>(&self, outcome: VoteOutcome, control: &VoteControl<D>) -> VoteEffect {
        apply_outcome(outcome, control, self.notifier.as_ref(), &self.config.language)
    }
}

/// Aplicar un resultado sobre el contador mostrado en este momento.
/// Como mucho una escritura del contador y una notificación.
pub fn apply_outcome<D: TallyDisplay>(
    outcome: VoteOutcome,
    control: &VoteControl<D>,
    notifier: &dyn Notifier,
    lang: &str,
) -> VoteEffect {
    let current = control.tally.read();
    let effect = VoteEffect::resolve(outcome, control.direction, &current, lang);

    match (&effect.tally_text, outcome.tally_multiplier()) {
        (Some(text), _) => {
            log::info!("🗳️ [VOTES] {:?} en {}: {} -> {}", outcome, control.endpoint, current.trim(), text);
            control.tally.write(text);
        }
        (None, Some(_)) => {
            log::warn!("⚠️ [VOTES] Contador ilegible {:?}, no se actualiza", current);
        }
        (None, None) => {
            if let VoteOutcome::Unknown(status) = outcome {
                log::debug!("🔇 [VOTES] HTTP {} ignorado para {}", status, control.endpoint);
            }
        }
    }

    if let Some(notification) = &effect.notification {
        notifier.notify(notification);
    }

    effect
}
