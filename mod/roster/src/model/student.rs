use serde::{Deserialize, Serialize};

use schoolrec_core::FieldError;

use crate::model::ClassDto;

/// Student — persistence row. `class_id` references an existing class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub class_id: i64,
}

/// Transfer object for a student, with the referenced class resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub class: ClassDto,
}

/// Validated student fields, produced by [`StudentForm::validate`].
///
/// Validation only proves `class_id` is a well-formed id; whether the class
/// actually exists is checked against storage by the handler and the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentInput {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub class_id: i64,
}

/// Raw student form capture. `age` and `class_id` stay strings here so a
/// bad value surfaces as a field error instead of a failed bind.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: String,
    #[serde(default, rename = "classId")]
    pub class_id: String,
}

impl StudentForm {
    pub fn validate(&self) -> Result<StudentInput, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Tên học sinh không được để trống"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Email không được để trống"));
        }

        let age = match self.age.trim().parse::<i32>() {
            Ok(a) => Some(a),
            Err(_) => {
                errors.push(FieldError::new("age", "Tuổi không hợp lệ"));
                None
            }
        };

        // The picker can only submit numeric ids, so anything unparseable
        // is reported the same way as a reference to a missing class.
        let class_id = match self.class_id.trim().parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(FieldError::new("classId", "Lớp không tồn tại"));
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(StudentInput {
            name: name.to_string(),
            email: email.to_string(),
            age: age.unwrap(),
            class_id: class_id.unwrap(),
        })
    }
}
