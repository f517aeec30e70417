use serde::{Deserialize, Serialize};

use schoolrec_core::FieldError;

/// Class — persistence row. PK = id (generated identity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Transfer object for a class, as handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Class> for ClassDto {
    fn from(c: Class) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
        }
    }
}

/// Validated class fields, produced by [`ClassForm::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInput {
    pub name: String,
    pub description: Option<String>,
}

/// Raw class form capture, bound from `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ClassForm {
    /// Validate the form. `name` must be non-blank; a blank description
    /// becomes `None`.
    pub fn validate(&self) -> Result<ClassInput, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Tên lớp không được để trống"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let description = self.description.trim();
        Ok(ClassInput {
            name: name.to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let form = ClassForm {
            name: "   ".into(),
            description: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "Tên lớp không được để trống");
    }

    #[test]
    fn blank_description_becomes_none() {
        let form = ClassForm {
            name: "10A1".into(),
            description: "  ".into(),
        };
        let input = form.validate().unwrap();
        assert_eq!(input.name, "10A1");
        assert_eq!(input.description, None);
    }

    #[test]
    fn fields_are_trimmed() {
        let form = ClassForm {
            name: " 10A1 ".into(),
            description: " science stream ".into(),
        };
        let input = form.validate().unwrap();
        assert_eq!(input.name, "10A1");
        assert_eq!(input.description.as_deref(), Some("science stream"));
    }
}
