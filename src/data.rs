use crate::error::RegistrationResult;
use serde::{Serialize, de::DeserializeOwned};

pub mod person;
pub mod student;

/// A record which can be stored as one row of the enrollment file.
pub trait DataType: Sized {
    type Row: Serialize + DeserializeOwned;

    fn to_row(&self) -> Self::Row;
    /// Builds a record from a stored row. Stored rows are more lenient than
    /// interactive input, but still go through validation.
    fn try_from_row(row: Self::Row) -> RegistrationResult<Self>;
}
