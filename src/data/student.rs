use crate::{
    data::{DataType, person::Person},
    error::{EmptyCourseSnafu, RegistrationResult},
};
use serde::{Deserialize, Serialize};
use snafu::ensure;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Student {
    person: Person,
    course_name: String,
}

/// One row of the enrollment file. Missing keys read as empty; any other
/// non-string value (`null` included) makes the row unreadable.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StudentRow {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "CourseName")]
    pub course_name: String,
}

impl Student {
    /// An empty course is left unset rather than rejected, so rows written
    /// before a course was recorded can still be loaded.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> RegistrationResult<Self> {
        let mut student = Self {
            person: Person::new(first_name, last_name)?,
            course_name: String::new(),
        };

        let course_name = course_name.into();
        if !course_name.is_empty() {
            student.set_course_name(course_name)?;
        }

        Ok(student)
    }

    pub const fn person(&self) -> &Person {
        &self.person
    }

    pub fn first_name(&self) -> String {
        self.person.first_name()
    }

    pub fn last_name(&self) -> String {
        self.person.last_name()
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> RegistrationResult<()> {
        self.person.set_first_name(value)
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> RegistrationResult<()> {
        self.person.set_last_name(value)
    }

    pub fn set_course_name(&mut self, value: impl AsRef<str>) -> RegistrationResult<()> {
        let trimmed = value.as_ref().trim();
        ensure!(!trimmed.is_empty(), EmptyCourseSnafu);

        self.course_name = trimmed.to_string();
        Ok(())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.person(), self.course_name)
    }
}

impl DataType for Student {
    type Row = StudentRow;

    fn to_row(&self) -> Self::Row {
        StudentRow {
            first_name: self.first_name(),
            last_name: self.last_name(),
            course_name: self.course_name.clone(),
        }
    }

    fn try_from_row(row: Self::Row) -> RegistrationResult<Self> {
        let StudentRow {
            first_name,
            last_name,
            course_name,
        } = row;

        Self::new(first_name, last_name, course_name)
    }
}
