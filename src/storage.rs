use crate::{
    data::DataType,
    error::{
        InvalidFileSnafu, InvalidRowSnafu, MalformedRowSnafu, ReadFileSnafu, RegistrationError,
        RegistrationResult, SerialiseEnrollmentsSnafu, WriteFileSnafu,
    },
};
use serde_json::Value;
use snafu::ResultExt;
use std::{fs, io, path::Path};

#[derive(Debug)]
pub struct LoadReport<T> {
    pub records: Vec<T>,
    ///rows which were skipped, in file order
    pub skipped: Vec<RegistrationError>,
    ///set when there was no file to read
    pub missing: Option<RegistrationError>,
}

impl<T> LoadReport<T> {
    fn missing(path: &Path) -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
            missing: Some(RegistrationError::MissingFile {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Reads every record from `path`.
///
/// A missing file is not an error: it yields an empty report with
/// `missing` set. A row which cannot be turned into a record is kept in
/// `skipped` and the rest of the file is still read.
pub fn load<T: DataType>(path: &Path) -> RegistrationResult<LoadReport<T>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(?path, "No enrollment file yet");
            return Ok(LoadReport::missing(path));
        }
        Err(source) => {
            return Err(RegistrationError::ReadFile {
                source,
                path: path.to_path_buf(),
            });
        }
    };

    let rows: Vec<Value> = serde_json::from_str(&contents).context(InvalidFileSnafu { path })?;

    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = vec![];

    for (index, row) in rows.into_iter().enumerate() {
        let record = serde_json::from_value::<T::Row>(row)
            .context(MalformedRowSnafu { index })
            .and_then(|row| T::try_from_row(row).context(InvalidRowSnafu { index }));

        match record {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(?e, index, "Skipping row");
                skipped.push(e);
            }
        }
    }

    debug!(loaded = records.len(), skipped = skipped.len(), ?path, "Read enrollment file");
    Ok(LoadReport {
        records,
        skipped,
        missing: None,
    })
}

/// Overwrites `path` with every record, in order.
///
/// The whole file is serialised before it is opened, so a record that can't be
/// represented leaves the existing file alone.
pub fn save<T: DataType>(path: &Path, records: &[T]) -> RegistrationResult<()> {
    let rows: Vec<T::Row> = records.iter().map(DataType::to_row).collect();
    let serialised = serde_json::to_vec_pretty(&rows).context(SerialiseEnrollmentsSnafu)?;

    fs::write(path, serialised).context(WriteFileSnafu { path })?;

    info!(saved = records.len(), ?path, "Wrote enrollment file");
    Ok(())
}
