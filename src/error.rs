use crate::data::person::NameField;
use snafu::Snafu;
use std::{fmt, io, path::PathBuf, string::FromUtf8Error};

pub type RegistrationResult<T> = Result<T, RegistrationError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RegistrationError {
    #[snafu(display("The {field} should not contain numbers or symbols."))]
    InvalidName { field: NameField, provided: String },
    #[snafu(display("The course name cannot be empty."))]
    EmptyCourse,
    #[snafu(display("Row {index} holds a value that is not allowed: {source}"))]
    InvalidRow {
        #[snafu(source(from(RegistrationError, Box::new)))]
        source: Box<RegistrationError>,
        index: usize,
    },
    #[snafu(display("Unable to find enrollment file {}", path.display()))]
    MissingFile { path: PathBuf },
    #[snafu(display("Enrollment file {} is not a list of records", path.display()))]
    InvalidFile {
        source: serde_json::Error,
        path: PathBuf,
    },
    #[snafu(display("Row {index} is not a record of text fields"))]
    MalformedRow {
        source: serde_json::Error,
        index: usize,
    },
    #[snafu(display("Error serialising enrollments to JSON"))]
    SerialiseEnrollments { source: serde_json::Error },
    #[snafu(display("Unable to read {}", path.display()))]
    ReadFile { source: io::Error, path: PathBuf },
    #[snafu(display("Unable to write {}", path.display()))]
    WriteFile { source: io::Error, path: PathBuf },
    #[snafu(display("The answer was not valid text"))]
    UnreadableInput { source: FromUtf8Error },
    #[snafu(display("Unable to read from the console"))]
    ReadInput { source: io::Error },
    #[snafu(display("Unable to write to the console"))]
    WriteOutput { source: io::Error },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Format,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Validation => "ValidationError",
            Self::NotFound => "NotFoundError",
            Self::Format => "FormatError",
            Self::Io => "IOError",
        })
    }
}

impl RegistrationError {
    #[allow(clippy::match_same_arms)]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName { .. } | Self::EmptyCourse => ErrorKind::Validation,
            Self::InvalidRow { source, .. } => source.kind(),
            Self::MissingFile { .. } => ErrorKind::NotFound,
            Self::InvalidFile { .. } | Self::MalformedRow { .. } => ErrorKind::Format,
            Self::SerialiseEnrollments { .. } | Self::UnreadableInput { .. } => ErrorKind::Format,
            Self::ReadFile { .. } | Self::WriteFile { .. } => ErrorKind::Io,
            Self::ReadInput { .. } | Self::WriteOutput { .. } => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_errors_keep_the_kind_of_what_they_wrap() {
        let wrapped = RegistrationError::InvalidRow {
            source: Box::new(RegistrationError::EmptyCourse),
            index: 3,
        };
        assert_eq!(wrapped.kind(), ErrorKind::Validation);
        assert_eq!(
            wrapped.to_string(),
            "Row 3 holds a value that is not allowed: The course name cannot be empty."
        );
    }

    #[test]
    fn name_errors_identify_the_field() {
        let e = RegistrationError::InvalidName {
            field: NameField::Last,
            provided: "D0e".into(),
        };
        assert_eq!(e.to_string(), "The last name should not contain numbers or symbols.");
        assert_eq!(e.kind().to_string(), "ValidationError");
    }
}
