// ============================================================================
// VOTE CONTROL - Control de voto tipado a partir de un Element
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::config::VoteConfig;
use crate::dom::{first_sibling_matching, get_attribute, has_class, set_text_content, text_content};
use crate::models::vote::Direction;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoteControlError {
    #[error("vote control has no `{attribute}` endpoint")]
    MissingEndpoint { attribute: String },
    #[error("vote control has no sibling matching `{selector}` to hold the tally")]
    MissingTally { selector: String },
    #[error("DOM query failed: {0}")]
    Dom(String),
}

impl From<JsValue> for VoteControlError {
    fn from(value: JsValue) -> Self {
        VoteControlError::Dom(format!("{:?}", value))
    }
}

/// Dónde se muestra el contador. Element en el navegador, texto en memoria en tests.
pub trait TallyDisplay {
    fn read(&self) -> String;
    fn write(&self, text: &str);
}

impl TallyDisplay for Element {
    fn read(&self) -> String {
        text_content(self)
    }

    fn write(&self, text: &str) {
        set_text_content(self, text);
    }
}

/// Un control (+/-) listo para votar
#[derive(Clone, Debug)]
pub struct VoteControl<D = Element> {
    pub direction: Direction,
    pub endpoint: String,
    pub tally: D,
}

impl VoteControl<Element> {
    /// Construir desde el DOM; falla si falta el endpoint o el contador
    pub fn from_element(element: &Element, config: &VoteConfig) -> Result<Self, VoteControlError> {
        let direction = Direction::from_markers(
            has_class(element, &config.minus_class),
            has_class(element, &config.plus_class),
        );

        let endpoint = parse_endpoint(get_attribute(element, &config.endpoint_attribute), &config.endpoint_attribute)?;

        let tally = first_sibling_matching(element, &config.tally_selector)?.ok_or_else(|| {
            VoteControlError::MissingTally {
                selector: config.tally_selector.clone(),
            }
        })?;

        Ok(Self {
            direction,
            endpoint,
            tally,
        })
    }
}

fn parse_endpoint(raw: Option<String>, attribute: &str) -> Result<String, VoteControlError> {
    match raw.map(|s| s.trim().to_string()) {
        Some(endpoint) if !endpoint.is_empty() => Ok(endpoint),
        _ => Err(VoteControlError::MissingEndpoint {
            attribute: attribute.to_string(),
        }),
    }
}
