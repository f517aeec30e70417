pub mod class;
pub mod student;

pub use class::{Class, ClassDto, ClassForm, ClassInput};
pub use student::{Student, StudentDto, StudentForm, StudentInput};
