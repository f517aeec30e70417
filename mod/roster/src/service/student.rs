use schoolrec_sql::{Row, Value};
use tracing::debug;

use crate::model::{ClassDto, Student, StudentDto, StudentInput};
use crate::service::{RosterError, RosterService};

const SELECT_JOINED: &str = "SELECT s.id, s.name, s.email, s.age, \
     c.id AS class_id, c.name AS class_name, c.description AS class_description \
     FROM student s JOIN class c ON c.id = s.class_id";

/// Map a joined row into the entity plus its resolved class, then compose
/// the DTO.
fn student_from_row(row: &Row) -> Result<StudentDto, RosterError> {
    let missing = |col: &str| RosterError::Internal(format!("student row missing {}", col));
    let student = Student {
        id: row.get_i64("id").ok_or_else(|| missing("id"))?,
        name: row.get_str("name").ok_or_else(|| missing("name"))?.to_string(),
        email: row.get_str("email").ok_or_else(|| missing("email"))?.to_string(),
        age: row.get_i64("age").ok_or_else(|| missing("age"))? as i32,
        class_id: row.get_i64("class_id").ok_or_else(|| missing("class_id"))?,
    };
    let class = ClassDto {
        id: student.class_id,
        name: row
            .get_str("class_name")
            .ok_or_else(|| missing("class_name"))?
            .to_string(),
        description: row.get_str("class_description").map(str::to_string),
    };
    Ok(StudentDto {
        id: student.id,
        name: student.name,
        email: student.email,
        age: student.age,
        class,
    })
}

impl RosterService {
    /// List all students, each with its class resolved.
    pub fn list_students(&self) -> Result<Vec<StudentDto>, RosterError> {
        let rows = self
            .sql
            .query(&format!("{} ORDER BY s.id", SELECT_JOINED), &[])?;
        rows.iter().map(student_from_row).collect()
    }

    /// Find a student by id, with its class resolved.
    pub fn find_student(&self, id: i64) -> Result<Option<StudentDto>, RosterError> {
        let rows = self.sql.query(
            &format!("{} WHERE s.id = ?1", SELECT_JOINED),
            &[Value::Integer(id)],
        )?;
        rows.first().map(student_from_row).transpose()
    }

    /// Create a new student. The referenced class must exist.
    pub fn create_student(&self, input: StudentInput) -> Result<StudentDto, RosterError> {
        let class = self
            .find_class(input.class_id)?
            .ok_or_else(|| RosterError::NotFound("Class not found".into()))?;

        let id = self.sql.insert(
            "INSERT INTO student (name, email, age, class_id) VALUES (?1, ?2, ?3, ?4)",
            &[
                Value::Text(input.name.clone()),
                Value::Text(input.email.clone()),
                Value::Integer(input.age as i64),
                Value::Integer(input.class_id),
            ],
        )?;
        debug!(id, name = %input.name, class_id = input.class_id, "student created");
        Ok(StudentDto {
            id,
            name: input.name,
            email: input.email,
            age: input.age,
            class,
        })
    }

    /// Update an existing student in place.
    ///
    /// The class reference is re-verified only when the selection changed;
    /// an unchanged reference is taken as-is from the current row.
    pub fn update_student(&self, id: i64, input: StudentInput) -> Result<(), RosterError> {
        let current = self
            .find_student(id)?
            .ok_or_else(|| RosterError::NotFound("Student not found".into()))?;

        if current.class.id != input.class_id {
            self.find_class(input.class_id)?
                .ok_or_else(|| RosterError::NotFound("Class not found".into()))?;
        }

        self.sql.exec(
            "UPDATE student SET name = ?1, email = ?2, age = ?3, class_id = ?4 WHERE id = ?5",
            &[
                Value::Text(input.name),
                Value::Text(input.email),
                Value::Integer(input.age as i64),
                Value::Integer(input.class_id),
                Value::Integer(id),
            ],
        )?;
        Ok(())
    }

    /// Delete a student by id.
    pub fn delete_student(&self, id: i64) -> Result<(), RosterError> {
        self.sql
            .exec("DELETE FROM student WHERE id = ?1", &[Value::Integer(id)])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{ClassInput, StudentInput};
    use crate::service::test_service;
    use crate::service::RosterError;

    fn student(name: &str, class_id: i64) -> StudentInput {
        StudentInput {
            name: name.into(),
            email: format!("{}@x.com", name.to_lowercase()),
            age: 20,
            class_id,
        }
    }

    #[test]
    fn create_resolves_current_class_fields() {
        let svc = test_service();
        let class = svc
            .create_class(ClassInput {
                name: "10A1".into(),
                description: Some("khối sáng".into()),
            })
            .unwrap();

        let s = svc.create_student(student("An", class.id)).unwrap();
        assert_eq!(s.class.name, "10A1");
        assert_eq!(s.class.description.as_deref(), Some("khối sáng"));

        let listed = svc.list_students().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].class.name, "10A1");
    }

    #[test]
    fn create_with_missing_class_persists_nothing() {
        let svc = test_service();
        let err = svc.create_student(student("An", 999)).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
        assert!(svc.list_students().unwrap().is_empty());
    }

    #[test]
    fn update_age_only_keeps_class_reference() {
        let svc = test_service();
        let class = svc
            .create_class(ClassInput {
                name: "10A1".into(),
                description: None,
            })
            .unwrap();
        let s = svc.create_student(student("An", class.id)).unwrap();

        let mut input = student("An", class.id);
        input.age = 21;
        svc.update_student(s.id, input).unwrap();

        let got = svc.find_student(s.id).unwrap().unwrap();
        assert_eq!(got.age, 21);
        assert_eq!(got.class.id, class.id);
    }

    #[test]
    fn update_to_missing_class_is_not_found() {
        let svc = test_service();
        let class = svc
            .create_class(ClassInput {
                name: "10A1".into(),
                description: None,
            })
            .unwrap();
        let s = svc.create_student(student("An", class.id)).unwrap();

        let err = svc.update_student(s.id, student("An", 999)).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));

        // Row untouched.
        let got = svc.find_student(s.id).unwrap().unwrap();
        assert_eq!(got.class.id, class.id);
    }

    #[test]
    fn update_moves_student_between_classes() {
        let svc = test_service();
        let a = svc
            .create_class(ClassInput {
                name: "10A1".into(),
                description: None,
            })
            .unwrap();
        let b = svc
            .create_class(ClassInput {
                name: "10A2".into(),
                description: None,
            })
            .unwrap();
        let s = svc.create_student(student("An", a.id)).unwrap();

        svc.update_student(s.id, student("An", b.id)).unwrap();
        let got = svc.find_student(s.id).unwrap().unwrap();
        assert_eq!(got.class.id, b.id);
        assert_eq!(got.class.name, "10A2");
    }

    #[test]
    fn update_missing_student_is_not_found() {
        let svc = test_service();
        let class = svc
            .create_class(ClassInput {
                name: "10A1".into(),
                description: None,
            })
            .unwrap();
        let err = svc.update_student(999, student("An", class.id)).unwrap_err();
        match err {
            RosterError::NotFound(m) => assert_eq!(m, "Student not found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn delete_then_class_is_free() {
        let svc = test_service();
        let class = svc
            .create_class(ClassInput {
                name: "10A1".into(),
                description: None,
            })
            .unwrap();
        let s = svc.create_student(student("An", class.id)).unwrap();

        svc.delete_student(s.id).unwrap();
        assert!(svc.find_student(s.id).unwrap().is_none());

        // With no students left the class can be deleted.
        svc.delete_class(class.id).unwrap();
    }
}
