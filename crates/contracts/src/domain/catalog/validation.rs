//! Client-side validation for the catalog form. Runs before any network
//! call; a submit that fails here must never reach the backend.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Locale cannot be empty")]
    Empty,
    #[error("Invalid locale format: {0}. Use format: en_US")]
    InvalidFormat(String),
    #[error("Locale already exists: {0}")]
    Duplicate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,
    #[error("At least one locale is required")]
    MissingLocales,
    #[error("Invalid locales: {}", .0.join(", "))]
    InvalidLocales(Vec<String>),
}

/// A locale is exactly two lowercase ASCII letters, an underscore, then two
/// uppercase ASCII letters (`en_US`). Matching is case-sensitive.
pub fn validate_locale_syntax(candidate: &str) -> Result<(), LocaleError> {
    let bytes = candidate.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[0].is_ascii_lowercase()
        && bytes[1].is_ascii_lowercase()
        && bytes[2] == b'_'
        && bytes[3].is_ascii_uppercase()
        && bytes[4].is_ascii_uppercase();

    if well_formed {
        Ok(())
    } else {
        Err(LocaleError::InvalidFormat(candidate.to_string()))
    }
}

/// Validate a locale about to be added interactively: non-empty, well
/// formed, and not already present (exact, case-sensitive match).
pub fn validate_new_locale(existing: &[String], candidate: &str) -> Result<(), LocaleError> {
    if candidate.trim().is_empty() {
        return Err(LocaleError::Empty);
    }
    validate_locale_syntax(candidate)?;
    if existing.iter().any(|l| l == candidate) {
        return Err(LocaleError::Duplicate(candidate.to_string()));
    }
    Ok(())
}

/// Validate the whole form before submit. Fails fast with the first
/// violated rule: missing name, then missing locales, then any
/// badly-formed locales (reported together).
pub fn validate_catalog_form(name: &str, locales: &[String]) -> Result<(), FormError> {
    if name.trim().is_empty() {
        return Err(FormError::MissingName);
    }
    if locales.is_empty() {
        return Err(FormError::MissingLocales);
    }
    let invalid: Vec<String> = locales
        .iter()
        .filter(|l| validate_locale_syntax(l).is_err())
        .cloned()
        .collect();
    if !invalid.is_empty() {
        return Err(FormError::InvalidLocales(invalid));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_locale() {
        assert_eq!(validate_locale_syntax("en_US"), Ok(()));
        assert_eq!(validate_locale_syntax("de_DE"), Ok(()));
    }

    #[test]
    fn rejects_wrong_case_and_length() {
        assert!(matches!(
            validate_locale_syntax("EN_us"),
            Err(LocaleError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_locale_syntax("en_USA"),
            Err(LocaleError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_locale_syntax("enUS"),
            Err(LocaleError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_locale_syntax(""),
            Err(LocaleError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_multibyte_input_without_panicking() {
        assert!(validate_locale_syntax("еn_US").is_err()); // Cyrillic 'е'
    }

    #[test]
    fn duplicate_locale_rejected_case_sensitively() {
        let existing = vec!["en_US".to_string()];
        assert!(matches!(
            validate_new_locale(&existing, "en_US"),
            Err(LocaleError::Duplicate(_))
        ));
        // A differently-cased string is not a duplicate, just malformed.
        assert!(matches!(
            validate_new_locale(&existing, "EN_US"),
            Err(LocaleError::InvalidFormat(_))
        ));
    }

    #[test]
    fn empty_candidate_rejected_before_syntax() {
        assert_eq!(validate_new_locale(&[], "   "), Err(LocaleError::Empty));
    }

    #[test]
    fn form_validation_fails_fast_in_order() {
        assert_eq!(
            validate_catalog_form("  ", &[]),
            Err(FormError::MissingName)
        );
        assert_eq!(
            validate_catalog_form("Shoes", &[]),
            Err(FormError::MissingLocales)
        );
        assert_eq!(
            validate_catalog_form(
                "Shoes",
                &["en_US".to_string(), "bad".to_string(), "EN_us".to_string()]
            ),
            Err(FormError::InvalidLocales(vec![
                "bad".to_string(),
                "EN_us".to_string()
            ]))
        );
        assert_eq!(
            validate_catalog_form("Shoes", &["en_US".to_string()]),
            Ok(())
        );
    }
}
