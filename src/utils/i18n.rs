// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "RU" => {
            translations.insert("vote_recorded", "Ваше мнение учтёно, спасибо!");
            translations.insert("vote_changed", "Ваше мнение изменено, спасибо!");
            translations.insert("vote_already_recorded", "Голос уже учтён, спасибо!");
        }
        _ => {
            // EN (por defecto)
            translations.insert("vote_recorded", "Your vote has been recorded, thank you!");
            translations.insert("vote_changed", "Your vote has been changed, thank you!");
            translations.insert("vote_already_recorded", "Your vote was already recorded, thank you!");
        }
    }

    translations
}

/// Función de traducción
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma ("RU" o "EN"); cualquier otro usa EN
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}
