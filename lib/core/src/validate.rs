use serde::Serialize;

/// A field-level validation error for one form field.
///
/// Handlers collect these and re-render the submitted form with the
/// messages attached next to the offending fields (HTTP 200), instead of
/// turning validation failures into HTTP error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name, e.g. `name` or `classId`.
    pub field: String,
    /// Human-readable message shown inline in the form.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Whether any error is attached to the given field.
pub fn has_error(errors: &[FieldError], field: &str) -> bool {
    errors.iter().any(|e| e.field == field)
}

/// First message attached to the given field, if any.
pub fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_field() {
        let errors = vec![
            FieldError::new("name", "Tên lớp không được để trống"),
            FieldError::new("classId", "Lớp không tồn tại"),
        ];
        assert!(has_error(&errors, "classId"));
        assert!(!has_error(&errors, "email"));
        assert_eq!(message_for(&errors, "name"), Some("Tên lớp không được để trống"));
        assert_eq!(message_for(&errors, "age"), None);
    }
}
