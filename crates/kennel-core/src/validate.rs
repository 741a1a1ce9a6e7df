use crate::error::{FieldError, ValidationErrors};
use crate::record::PuppyPayload;

/// Validation mode for a payload.
///
/// Strict mode requires every mandatory field to be present (create);
/// partial mode treats absence as "unchanged" (update). Present fields are
/// held to the same rules in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Strict,
    Partial,
}

/// Checks a payload against the field rules, accumulating every violation.
///
/// All fields are checked before returning; a failing payload reports the
/// full list of `{field, message}` pairs rather than the first one.
pub fn validate(payload: &PuppyPayload, mode: Mode) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    check_text_field("breed", payload.breed.as_deref(), mode, &mut errors);
    check_text_field("name", payload.name.as_deref(), mode, &mut errors);
    check_birth_date(payload.birth_date.as_deref(), mode, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Trims and HTML-escapes every provided string field.
///
/// Runs after validation, before the payload reaches a store, so that
/// free-form fields are inert when later rendered. An explicitly empty
/// `info` stays empty; the merge step turns it into a cleared value.
pub fn sanitize(payload: PuppyPayload) -> PuppyPayload {
    PuppyPayload {
        breed: payload.breed.map(|s| clean(&s)),
        name: payload.name.map(|s| clean(&s)),
        birth_date: payload.birth_date.map(|s| clean(&s)),
        image: payload.image.map(|s| clean(&s)),
        info: payload.info.map(|s| clean(&s)),
    }
}

fn check_text_field(
    field: &'static str,
    value: Option<&str>,
    mode: Mode,
    errors: &mut Vec<FieldError>,
) {
    let Some(value) = value else {
        if mode == Mode::Strict {
            errors.push(FieldError::new(field, "is required"));
        }
        return;
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, "must not be blank"));
    } else if !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ') {
        errors.push(FieldError::new(field, "must contain only letters and spaces"));
    }
}

fn check_birth_date(value: Option<&str>, mode: Mode, errors: &mut Vec<FieldError>) {
    let Some(value) = value else {
        if mode == Mode::Strict {
            errors.push(FieldError::new("birthDate", "is required"));
        }
        return;
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new("birthDate", "must not be blank"));
    } else if !is_date_shaped(trimmed) {
        errors.push(FieldError::new("birthDate", "must match YYYY-MM-DD"));
    }
}

/// Lexical `YYYY-MM-DD` check: four-digit year, month 01-12, day 01-31.
///
/// Deliberately not a calendar check; `2023-02-31` passes the shape rule.
fn is_date_shaped(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    let digits_at = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    if !digits_at(0..4) || !digits_at(5..7) || !digits_at(8..10) {
        return false;
    }

    let month = (bytes[5] - b'0') * 10 + (bytes[6] - b'0');
    let day = (bytes[8] - b'0') * 10 + (bytes[9] - b'0');
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

fn clean(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.trim().chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(breed: Option<&str>, name: Option<&str>, birth_date: Option<&str>) -> PuppyPayload {
        PuppyPayload {
            breed: breed.map(str::to_string),
            name: name.map(str::to_string),
            birth_date: birth_date.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn strict_accepts_complete_payload() {
        let p = payload(Some("Golden Retriever"), Some("Buddy"), Some("2022-01-01"));
        assert!(validate(&p, Mode::Strict).is_ok());
    }

    #[test]
    fn strict_requires_every_mandatory_field() {
        let err = validate(&PuppyPayload::default(), Mode::Strict).unwrap_err();
        let fields: Vec<_> = err.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["breed", "name", "birthDate"]);
    }

    #[test]
    fn violations_accumulate_across_fields() {
        let p = payload(Some(""), Some("   "), Some("2023-05-11"));
        let err = validate(&p, Mode::Strict).unwrap_err();
        assert!(err.errors().len() >= 2);
        assert!(err.errors().iter().any(|e| e.field == "breed"));
        assert!(err.errors().iter().any(|e| e.field == "name"));
    }

    #[test]
    fn digits_and_punctuation_are_rejected() {
        for bad in ["R2D2", "Rex!", "a-b"] {
            let p = payload(Some("Maltese"), Some(bad), Some("2022-01-01"));
            assert!(validate(&p, Mode::Strict).is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn unicode_letters_and_spaces_are_accepted() {
        let p = payload(Some("Pastore tedesco"), Some("Niño"), Some("2022-05-22"));
        assert!(validate(&p, Mode::Strict).is_ok());
    }

    #[test]
    fn partial_mode_allows_absent_fields() {
        assert!(validate(&PuppyPayload::default(), Mode::Partial).is_ok());
    }

    #[test]
    fn partial_mode_still_checks_present_fields() {
        let p = payload(Some("  "), None, None);
        let err = validate(&p, Mode::Partial).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].field, "breed");
    }

    #[test]
    fn date_must_be_iso_shaped() {
        let ok = ["2023-05-11", "1999-01-31", "2023-02-31"];
        for date in ok {
            let p = payload(Some("Maltese"), Some("Carlo"), Some(date));
            assert!(validate(&p, Mode::Strict).is_ok(), "{date} should pass");
        }

        let bad = ["05-11-2023", "2023-13-01", "2023-05-32", "2023-5-11", "2023/05/11", "20230511"];
        for date in bad {
            let p = payload(Some("Maltese"), Some("Carlo"), Some(date));
            assert!(validate(&p, Mode::Strict).is_err(), "{date} should fail");
        }
    }

    #[test]
    fn date_is_trimmed_before_matching() {
        let p = payload(Some("Maltese"), Some("Carlo"), Some("  2023-05-11 "));
        assert!(validate(&p, Mode::Strict).is_ok());
    }

    #[test]
    fn sanitize_trims_and_escapes() {
        let p = PuppyPayload {
            breed: Some("  Maltese ".to_string()),
            info: Some("<b>bold</b> & \"quoted\"".to_string()),
            ..Default::default()
        };

        let cleaned = sanitize(p);
        assert_eq!(cleaned.breed.as_deref(), Some("Maltese"));
        assert_eq!(
            cleaned.info.as_deref(),
            Some("&lt;b&gt;bold&lt;/b&gt; &amp; &quot;quoted&quot;")
        );
    }

    #[test]
    fn sanitize_keeps_explicit_empty_info() {
        let p = PuppyPayload {
            info: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(sanitize(p).info.as_deref(), Some(""));
    }
}
