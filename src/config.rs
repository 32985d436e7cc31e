use dotenvy::var;
use std::{
    env::VarError,
    path::{Path, PathBuf},
    sync::Arc,
};

pub const FILE_ENV_VAR: &str = "ENROLMENT_FILE";
pub const DEFAULT_FILE_NAME: &str = "Enrollments.json";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    enrolment_file: Arc<PathBuf>,
}

impl RuntimeConfiguration {
    pub fn new() -> Self {
        Self::with_file(enrolment_file_from(var(FILE_ENV_VAR)))
    }

    pub fn with_file(enrolment_file: impl Into<PathBuf>) -> Self {
        Self {
            enrolment_file: Arc::new(enrolment_file.into()),
        }
    }

    pub fn enrolment_file(&self) -> &Path {
        self.enrolment_file.as_path()
    }
}

impl Default for RuntimeConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

///an unusable override falls back to the default rather than stopping startup
fn enrolment_file_from(lookup: Result<String, dotenvy::Error>) -> PathBuf {
    match lookup {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        Ok(_) | Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => {
            PathBuf::from(DEFAULT_FILE_NAME)
        }
        Err(e) => {
            warn!(?e, name = FILE_ENV_VAR, "Unusable env var, using {DEFAULT_FILE_NAME}");
            PathBuf::from(DEFAULT_FILE_NAME)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn explicit_file_is_kept() {
        let config = RuntimeConfiguration::with_file("somewhere/else.json");
        assert_eq!(config.enrolment_file(), Path::new("somewhere/else.json"));
    }

    #[test]
    fn env_override_is_used_when_set() {
        assert_eq!(
            enrolment_file_from(Ok("data/enrol.json".into())),
            PathBuf::from("data/enrol.json")
        );
    }

    #[test]
    fn missing_or_unusable_override_falls_back_to_the_default() {
        let lookups = [
            Err(dotenvy::Error::EnvVar(VarError::NotPresent)),
            Err(dotenvy::Error::EnvVar(VarError::NotUnicode(OsString::from("bad")))),
            Ok("   ".to_string()),
        ];

        for lookup in lookups {
            assert_eq!(enrolment_file_from(lookup), PathBuf::from(DEFAULT_FILE_NAME));
        }
    }
}
