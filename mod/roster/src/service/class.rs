use schoolrec_sql::{Row, Value};
use tracing::debug;

use crate::model::{Class, ClassDto, ClassInput};
use crate::service::{RosterError, RosterService};

fn class_from_row(row: &Row) -> Result<Class, RosterError> {
    Ok(Class {
        id: row
            .get_i64("id")
            .ok_or_else(|| RosterError::Internal("class row missing id".into()))?,
        name: row
            .get_str("name")
            .ok_or_else(|| RosterError::Internal("class row missing name".into()))?
            .to_string(),
        description: row.get_str("description").map(str::to_string),
    })
}

impl RosterService {
    /// List all classes.
    pub fn list_classes(&self) -> Result<Vec<ClassDto>, RosterError> {
        let rows = self
            .sql
            .query("SELECT id, name, description FROM class ORDER BY id", &[])?;
        rows.iter()
            .map(|r| class_from_row(r).map(ClassDto::from))
            .collect()
    }

    /// Find a class by id.
    pub fn find_class(&self, id: i64) -> Result<Option<ClassDto>, RosterError> {
        let rows = self.sql.query(
            "SELECT id, name, description FROM class WHERE id = ?1",
            &[Value::Integer(id)],
        )?;
        rows.first()
            .map(|r| class_from_row(r).map(ClassDto::from))
            .transpose()
    }

    /// Create a new class from validated input.
    pub fn create_class(&self, input: ClassInput) -> Result<ClassDto, RosterError> {
        let id = self.sql.insert(
            "INSERT INTO class (name, description) VALUES (?1, ?2)",
            &[
                Value::Text(input.name.clone()),
                input
                    .description
                    .clone()
                    .map(Value::Text)
                    .unwrap_or(Value::Null),
            ],
        )?;
        debug!(id, name = %input.name, "class created");
        Ok(ClassDto::from(Class {
            id,
            name: input.name,
            description: input.description,
        }))
    }

    /// Update an existing class in place.
    pub fn update_class(&self, id: i64, input: ClassInput) -> Result<(), RosterError> {
        let affected = self.sql.exec(
            "UPDATE class SET name = ?1, description = ?2 WHERE id = ?3",
            &[
                Value::Text(input.name),
                input.description.map(Value::Text).unwrap_or(Value::Null),
                Value::Integer(id),
            ],
        )?;
        if affected == 0 {
            return Err(RosterError::NotFound("Class not found".into()));
        }
        Ok(())
    }

    /// Delete a class by id.
    ///
    /// Rejected while students still reference the class, so no student row
    /// is ever left with a dangling class_id.
    pub fn delete_class(&self, id: i64) -> Result<(), RosterError> {
        let rows = self.sql.query(
            "SELECT COUNT(*) AS n FROM student WHERE class_id = ?1",
            &[Value::Integer(id)],
        )?;
        let referenced = rows.first().and_then(|r| r.get_i64("n")).unwrap_or(0);
        if referenced > 0 {
            return Err(RosterError::Conflict(format!(
                "class {} is still referenced by {} student(s)",
                id, referenced
            )));
        }

        self.sql
            .exec("DELETE FROM class WHERE id = ?1", &[Value::Integer(id)])?;
        Ok(())
    }
}
