use crate::{
    actions::show::show_students,
    console_conveniences::Console,
    error::{ErrorKind, RegistrationError, RegistrationResult},
    state::RegistrationState,
    storage,
};
use std::io::{BufRead, Write};

/// Writes every enrollment to the configured file, then echoes what was
/// written. Failures are reported and leave the in-memory enrollments as they
/// were.
pub fn save_students<R: BufRead, W: Write>(
    state: &RegistrationState,
    console: &mut Console<R, W>,
) -> RegistrationResult<()> {
    if let Err(e) = storage::save(state.config().enrolment_file(), state.students()) {
        return console.error_message(failure_message(&e), Some(&e));
    }

    console.line("The following data was saved to file:")?;
    console.blank()?;
    show_students(state, console)
}

fn failure_message(error: &RegistrationError) -> &'static str {
    match error.kind() {
        ErrorKind::Format => "Error: Data could not be converted into valid JSON format.",
        _ => {
            "Error: There was a problem writing to the file.\nPlease check that the file is not open in another program."
        }
    }
}
