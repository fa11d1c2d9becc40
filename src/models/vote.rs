// ============================================================================
// VOTE MODELS - Dirección, resultado, contador y notificación
// ============================================================================
// Lógica pura: no toca el DOM ni la red, así se puede testear en nativo
// ============================================================================

use serde::Serialize;
use std::fmt;

use crate::utils::i18n::t;

/// Sentido del voto de un control (+1 / -1)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Plus,
    Minus,
}

impl Direction {
    /// Resolver sentido a partir de las clases marcadoras.
    /// "plus" se evalúa después de "minus": con ambas clases gana Plus,
    /// sin ninguna el control vota +1.
    pub fn from_markers(has_minus: bool, has_plus: bool) -> Self {
        let mut direction = Direction::Plus;
        if has_minus {
            direction = Direction::Minus;
        }
        if has_plus {
            direction = Direction::Plus;
        }
        direction
    }

    pub fn delta(self) -> i64 {
        match self {
            Direction::Plus => 1,
            Direction::Minus => -1,
        }
    }
}

/// Resultado de un POST de voto según el status HTTP
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    /// 201: voto nuevo registrado
    Recorded,
    /// 200: el usuario cambió su voto anterior
    Changed,
    /// 304: voto ya registrado, sin cambios
    Unchanged,
    /// Cualquier otro status: se ignora
    Unknown(u16),
}

impl VoteOutcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            201 => VoteOutcome::Recorded,
            200 => VoteOutcome::Changed,
            304 => VoteOutcome::Unchanged,
            other => VoteOutcome::Unknown(other),
        }
    }

    /// Multiplicador aplicado al sentido del voto, None si el contador no cambia.
    /// Un cambio de voto cuenta doble: se retira el anterior y se suma el nuevo.
    pub fn tally_multiplier(self) -> Option<i64> {
        match self {
            VoteOutcome::Recorded => Some(1),
            VoteOutcome::Changed => Some(2),
            VoteOutcome::Unchanged | VoteOutcome::Unknown(_) => None,
        }
    }

    pub fn notification(self, lang: &str) -> Option<Notification> {
        match self {
            VoteOutcome::Recorded => Some(Notification::success(t("vote_recorded", lang))),
            VoteOutcome::Changed => Some(Notification::success(t("vote_changed", lang))),
            VoteOutcome::Unchanged => Some(Notification::notice(t("vote_already_recorded", lang))),
            VoteOutcome::Unknown(_) => None,
        }
    }
}

/// Contador de votos mostrado junto a los controles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tally(pub i64);

impl Tally {
    /// Parsear el texto del contador con la semántica de `parseInt`:
    /// espacios iniciales, signo opcional, dígitos iniciales; el resto se ignora.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits_len == 0 {
            return None;
        }

        // i128 para que "-9223372036854775808" (i64::MIN) sea representable
        let magnitude: i128 = rest[..digits_len].parse().ok()?;
        let value = if negative { -magnitude } else { magnitude };
        i64::try_from(value).ok().map(Tally)
    }

    pub fn apply(self, delta: i64) -> Self {
        Tally(self.0.saturating_add(delta))
    }

}

impl fmt::Display for Tally {
    /// Positivos con "+", cero y negativos tal cual
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Success,
    Notice,
}

/// Mensaje efímero para el widget de notificaciones de la página.
/// Se serializa con la forma que espera `notif()`: `{ msg, type }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    #[serde(rename = "msg")]
    pub message: String,
    #[serde(rename = "type")]
    pub category: NotificationCategory,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: NotificationCategory::Success,
        }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: NotificationCategory::Notice,
        }
    }
}

/// Efecto observable de una respuesta: texto nuevo del contador y/o notificación
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoteEffect {
    pub tally_text: Option<String>,
    pub notification: Option<Notification>,
}

impl VoteEffect {
    /// Calcular el efecto de `outcome` sobre el texto del contador leído al
    /// recibir la respuesta. Si el contador no es un entero no se reescribe,
    /// pero la notificación se mantiene: el servidor ya aceptó el voto.
    pub fn resolve(outcome: VoteOutcome, direction: Direction, current_text: &str, lang: &str) -> Self {
        let tally_text = outcome.tally_multiplier().and_then(|multiplier| {
            Tally::parse(current_text)
                .map(|tally| tally.apply(multiplier * direction.delta()).to_string())
        });

        Self {
            tally_text,
            notification: outcome.notification(lang),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tally_text.is_none() && self.notification.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_markers() {
        assert_eq!(Direction::from_markers(true, false), Direction::Minus);
        assert_eq!(Direction::from_markers(false, true), Direction::Plus);
        assert_eq!(Direction::from_markers(true, true), Direction::Plus);
        assert_eq!(Direction::from_markers(false, false), Direction::Plus);
        assert_eq!(Direction::Minus.delta(), -1);
    }

    #[test]
    fn test_outcome_from_status() {
        assert_eq!(VoteOutcome::from_status(201), VoteOutcome::Recorded);
        assert_eq!(VoteOutcome::from_status(200), VoteOutcome::Changed);
        assert_eq!(VoteOutcome::from_status(304), VoteOutcome::Unchanged);
        assert_eq!(VoteOutcome::from_status(403), VoteOutcome::Unknown(403));
        assert_eq!(VoteOutcome::Unknown(500).tally_multiplier(), None);
        assert!(VoteOutcome::Unknown(400).notification("EN").is_none());
    }

    #[test]
    fn test_tally_parse_like_parse_int() {
        assert_eq!(Tally::parse("+3"), Some(Tally(3)));
        assert_eq!(Tally::parse("-1"), Some(Tally(-1)));
        assert_eq!(Tally::parse("0"), Some(Tally(0)));
        assert_eq!(Tally::parse("  12 votos"), Some(Tally(12)));
        assert_eq!(Tally::parse("\n-7\n"), Some(Tally(-7)));
        assert_eq!(Tally::parse(""), None);
        assert_eq!(Tally::parse("+"), None);
        assert_eq!(Tally::parse("n/a"), None);
    }

    #[test]
    fn test_tally_parse_i64_bounds() {
        assert_eq!(Tally::parse("-9223372036854775808"), Some(Tally(i64::MIN)));
        assert_eq!(Tally::parse("+9223372036854775807"), Some(Tally(i64::MAX)));
        assert_eq!(Tally::parse("9223372036854775808"), None);
        assert_eq!(Tally::parse("-9223372036854775809"), None);
    }

    #[test]
    fn test_tally_rendering() {
        assert_eq!(Tally(4).to_string(), "+4");
        assert_eq!(Tally(0).to_string(), "0");
        assert_eq!(Tally(-3).to_string(), "-3");
    }

    #[test]
    fn test_recorded_adds_single_delta() {
        for v in -5i64..=5 {
            for direction in [Direction::Plus, Direction::Minus] {
                let effect = VoteEffect::resolve(VoteOutcome::Recorded, direction, &Tally(v).to_string(), "EN");
                let expected = v + direction.delta();
                assert_eq!(effect.tally_text, Some(Tally(expected).to_string()));
                assert_eq!(effect.tally_text.as_deref().map(|s| s.starts_with('+')), Some(expected > 0));
            }
        }
    }

    #[test]
    fn test_changed_adds_double_delta() {
        for v in -5i64..=5 {
            for direction in [Direction::Plus, Direction::Minus] {
                let effect = VoteEffect::resolve(VoteOutcome::Changed, direction, &Tally(v).to_string(), "EN");
                assert_eq!(effect.tally_text, Some(Tally(v + 2 * direction.delta()).to_string()));
            }
        }
    }

    #[test]
    fn test_unchanged_and_unknown_never_touch_tally() {
        for text in ["+3", "0", "-2"] {
            let effect = VoteEffect::resolve(VoteOutcome::Unchanged, Direction::Minus, text, "EN");
            assert_eq!(effect.tally_text, None);
            assert_eq!(effect.notification.map(|n| n.category), Some(NotificationCategory::Notice));

            let effect = VoteEffect::resolve(VoteOutcome::from_status(500), Direction::Plus, text, "EN");
            assert!(effect.is_empty());
        }
    }

    #[test]
    fn test_plus_recorded_example() {
        let effect = VoteEffect::resolve(VoteOutcome::from_status(201), Direction::Plus, "+3", "EN");
        assert_eq!(effect.tally_text.as_deref(), Some("+4"));
        assert_eq!(effect.notification.map(|n| n.category), Some(NotificationCategory::Success));
    }

    #[test]
    fn test_minus_changed_example() {
        let effect = VoteEffect::resolve(VoteOutcome::from_status(200), Direction::Minus, "-1", "EN");
        assert_eq!(effect.tally_text.as_deref(), Some("-3"));
        assert_eq!(effect.notification.map(|n| n.category), Some(NotificationCategory::Success));
    }

    #[test]
    fn test_dropping_to_zero_is_unprefixed() {
        let effect = VoteEffect::resolve(VoteOutcome::Recorded, Direction::Minus, "+1", "EN");
        assert_eq!(effect.tally_text.as_deref(), Some("0"));
    }

    #[test]
    fn test_unreadable_tally_keeps_notification() {
        let effect = VoteEffect::resolve(VoteOutcome::Recorded, Direction::Plus, "?", "EN");
        assert_eq!(effect.tally_text, None);
        assert!(effect.notification.is_some());
    }

    #[test]
    fn test_notification_payload_shape() {
        let json = serde_json::to_value(Notification::notice("hola")).unwrap();
        assert_eq!(json, serde_json::json!({ "msg": "hola", "type": "notice" }));
    }
}
