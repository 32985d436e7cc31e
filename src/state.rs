use crate::{
    config::RuntimeConfiguration,
    console_conveniences::Console,
    data::student::Student,
    error::{ErrorKind, RegistrationResult},
    storage,
};
use std::io::{BufRead, Write};

/// Everything the menu loop owns: where the enrollments live and the
/// enrollments themselves.
#[derive(Debug)]
pub struct RegistrationState {
    config: RuntimeConfiguration,
    students: Vec<Student>,
}

impl RegistrationState {
    pub const fn new(config: RuntimeConfiguration) -> Self {
        Self {
            config,
            students: Vec::new(),
        }
    }

    pub const fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn register(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Replaces the in-memory enrollments with what is in the file, telling the
    /// user about anything that went wrong along the way. Only console errors
    /// are returned.
    pub fn reload<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> RegistrationResult<()> {
        self.students.clear();

        let report = match storage::load::<Student>(self.config.enrolment_file()) {
            Ok(report) => report,
            Err(e) => {
                let message = match e.kind() {
                    ErrorKind::Format => "Error: The enrollment file contains invalid JSON data.",
                    _ => "Error: There was a non-specific problem reading the file.",
                };
                return console.error_message(message, Some(&e));
            }
        };

        if let Some(notice) = &report.missing {
            info!(%notice, "Starting with no enrollments");
            console.line("Notice: The enrollment file was not found.")?;
            console.line("A new file will be created when you save.")?;
            console.blank()?;
        }

        for skipped in &report.skipped {
            console.error_message(
                "Warning: A row in the file had invalid data and was skipped.",
                Some(skipped),
            )?;
        }

        info!(
            loaded = report.records.len(),
            skipped = report.skipped.len(),
            "Loaded enrollments"
        );
        self.students = report.records;
        Ok(())
    }
}
