use schoolrec_sql::SQLStore;

use crate::service::RosterError;

/// Initialize the SQLite schema for the roster tables.
pub fn init_schema(sql: &dyn SQLStore) -> Result<(), RosterError> {
    let statements = [
        "CREATE TABLE IF NOT EXISTS class (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT
        )",
        // class_id is validated by the service; see delete_class for the
        // referenced-class guard.
        "CREATE TABLE IF NOT EXISTS student (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            age INTEGER NOT NULL,
            class_id INTEGER NOT NULL REFERENCES class(id)
        )",
        "CREATE INDEX IF NOT EXISTS idx_student_class ON student(class_id)",
    ];

    for stmt in &statements {
        sql.exec(stmt, &[])
            .map_err(|e| RosterError::Storage(e.to_string()))?;
    }
    Ok(())
}
