//! HTML page builders for the roster screens.
//!
//! Pages are assembled from an embedded layout shell with marker
//! substitution — there is deliberately no template engine here.

use schoolrec_core::{message_for, FieldError};

use crate::model::{ClassDto, ClassForm, StudentDto, StudentForm};

const LAYOUT: &str = include_str!("web/layout.html");

/// Wrap page content in the shared layout shell.
fn page(title: &str, content: &str) -> String {
    LAYOUT
        .replace("{title}", &escape(title))
        .replace("{content}", content)
}

/// Escape text for safe interpolation into HTML.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inline error paragraph for one field, or nothing.
fn field_error(errors: &[FieldError], field: &str) -> String {
    match message_for(errors, field) {
        Some(msg) => format!("<p class=\"error\">{}</p>\n", escape(msg)),
        None => String::new(),
    }
}

// ── Class pages ─────────────────────────────────────────────────────

pub fn class_list_page(classes: &[ClassDto]) -> String {
    let mut rows = String::new();
    for c in classes {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"/classes/edit/{}\">Edit</a> \
             <a href=\"/classes/delete/{}\">Delete</a></td></tr>\n",
            c.id,
            escape(&c.name),
            escape(c.description.as_deref().unwrap_or("")),
            c.id,
            c.id,
        ));
    }
    let content = format!(
        "<p><a href=\"/classes/new\">New class</a></p>\n\
         <table>\n<tr><th>ID</th><th>Name</th><th>Description</th><th></th></tr>\n{}</table>",
        rows
    );
    page("Classes", &content)
}

fn class_form_fields(form: &ClassForm, errors: &[FieldError]) -> String {
    format!(
        "<label>Name\n<input type=\"text\" name=\"name\" value=\"{}\"></label>\n{}\
         <label>Description\n<input type=\"text\" name=\"description\" value=\"{}\"></label>\n\
         <div class=\"actions\"><button type=\"submit\">Save</button> \
         <a href=\"/classes\">Cancel</a></div>",
        escape(&form.name),
        field_error(errors, "name"),
        escape(&form.description),
    )
}

pub fn class_create_page(form: &ClassForm, errors: &[FieldError]) -> String {
    let content = format!(
        "<form method=\"post\" action=\"/classes\">\n{}\n</form>",
        class_form_fields(form, errors)
    );
    page("New class", &content)
}

pub fn class_update_page(id: i64, form: &ClassForm, errors: &[FieldError]) -> String {
    let content = format!(
        "<form method=\"post\" action=\"/classes/update/{}\">\n{}\n</form>",
        id,
        class_form_fields(form, errors)
    );
    page("Edit class", &content)
}

// ── Student pages ───────────────────────────────────────────────────

pub fn student_list_page(students: &[StudentDto]) -> String {
    let mut rows = String::new();
    for s in students {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"/students/edit/{}\">Edit</a> \
             <a href=\"/students/delete/{}\">Delete</a></td></tr>\n",
            s.id,
            escape(&s.name),
            escape(&s.email),
            s.age,
            escape(&s.class.name),
            escape(s.class.description.as_deref().unwrap_or("")),
            s.id,
            s.id,
        ));
    }
    let content = format!(
        "<p><a href=\"/students/new\">New student</a></p>\n\
         <table>\n<tr><th>ID</th><th>Name</th><th>Email</th><th>Age</th>\
         <th>Class</th><th>Class description</th><th></th></tr>\n{}</table>",
        rows
    );
    page("Students", &content)
}

fn class_picker(selected: &str, classes: &[ClassDto]) -> String {
    let mut options = String::new();
    for c in classes {
        let sel = if selected == c.id.to_string() {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            c.id,
            sel,
            escape(&c.name)
        ));
    }
    format!("<select name=\"classId\">\n{}</select>", options)
}

fn student_form_fields(
    form: &StudentForm,
    classes: &[ClassDto],
    errors: &[FieldError],
    cancel: &str,
) -> String {
    format!(
        "<label>Name\n<input type=\"text\" name=\"name\" value=\"{}\"></label>\n{}\
         <label>Email\n<input type=\"text\" name=\"email\" value=\"{}\"></label>\n{}\
         <label>Age\n<input type=\"text\" name=\"age\" value=\"{}\"></label>\n{}\
         <label>Class\n{}</label>\n{}\
         <div class=\"actions\"><button type=\"submit\">Save</button> \
         <a href=\"{}\">Cancel</a></div>",
        escape(&form.name),
        field_error(errors, "name"),
        escape(&form.email),
        field_error(errors, "email"),
        escape(&form.age),
        field_error(errors, "age"),
        class_picker(&form.class_id, classes),
        field_error(errors, "classId"),
        cancel,
    )
}

pub fn student_create_page(
    form: &StudentForm,
    classes: &[ClassDto],
    errors: &[FieldError],
) -> String {
    let content = format!(
        "<form method=\"post\" action=\"/students\">\n{}\n</form>",
        student_form_fields(form, classes, errors, "/students")
    );
    page("New student", &content)
}

pub fn student_update_page(
    id: i64,
    form: &StudentForm,
    classes: &[ClassDto],
    errors: &[FieldError],
) -> String {
    let content = format!(
        "<form method=\"post\" action=\"/students/update/{}\">\n{}\n</form>",
        id,
        student_form_fields(form, classes, errors, "/students")
    );
    page("Edit student", &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(escape("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn list_page_escapes_names() {
        let classes = vec![ClassDto {
            id: 1,
            name: "<script>".into(),
            description: None,
        }];
        let html = class_list_page(&classes);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn field_error_renders_inline() {
        let errors = vec![FieldError::new("classId", "Lớp không tồn tại")];
        let html = student_create_page(&StudentForm::default(), &[], &errors);
        assert!(html.contains("Lớp không tồn tại"));
    }

    #[test]
    fn picker_preselects_submitted_class() {
        let classes = vec![
            ClassDto { id: 1, name: "10A1".into(), description: None },
            ClassDto { id: 2, name: "10A2".into(), description: None },
        ];
        let html = class_picker("2", &classes);
        assert!(html.contains("<option value=\"2\" selected>"));
        assert!(html.contains("<option value=\"1\">"));
    }
}
