// ============================================================================
// CONFIG - Configuración en tiempo de compilación (option_env! + .env)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct VoteConfig {
    /// Contenedor de comentarios donde viven los controles de voto
    pub container_selector: String,
    /// Controles clicables (+/-)
    pub control_selector: String,
    /// Hermano que muestra el contador
    pub tally_selector: String,
    pub minus_class: String,
    pub plus_class: String,
    /// Atributo con la URL del endpoint de voto
    pub endpoint_attribute: String,
    /// Función global de la página que muestra notificaciones
    pub notifier_function: String,
    pub language: String,
    pub enable_logging: bool,
}

impl Default for VoteConfig {
    fn default() -> Self {
        Self {
            container_selector: ".comments".to_string(),
            control_selector: ".ajax-vote".to_string(),
            tally_selector: "span".to_string(),
            minus_class: "minus".to_string(),
            plus_class: "plus".to_string(),
            endpoint_attribute: "data-href".to_string(),
            notifier_function: "notif".to_string(),
            language: "RU".to_string(),
            enable_logging: true,
        }
    }
}

impl VoteConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            container_selector: env_or(option_env!("VOTES_CONTAINER_SELECTOR"), defaults.container_selector),
            control_selector: env_or(option_env!("VOTES_CONTROL_SELECTOR"), defaults.control_selector),
            tally_selector: env_or(option_env!("VOTES_TALLY_SELECTOR"), defaults.tally_selector),
            minus_class: env_or(option_env!("VOTES_MINUS_CLASS"), defaults.minus_class),
            plus_class: env_or(option_env!("VOTES_PLUS_CLASS"), defaults.plus_class),
            endpoint_attribute: env_or(option_env!("VOTES_ENDPOINT_ATTRIBUTE"), defaults.endpoint_attribute),
            notifier_function: env_or(option_env!("VOTES_NOTIFIER_FUNCTION"), defaults.notifier_function),
            language: env_or(option_env!("VOTES_LANGUAGE"), defaults.language).to_uppercase(),
            enable_logging: option_env!("VOTES_ENABLE_LOGGING")
                .map(parse_flag)
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// Selector completo de un control dentro de su contenedor
    pub fn scoped_control_selector(&self) -> String {
        format!("{} {}", self.container_selector, self.control_selector)
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

fn env_or(value: Option<&str>, default: String) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default,
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: VoteConfig = VoteConfig::from_env();
}
