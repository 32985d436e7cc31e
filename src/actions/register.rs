use crate::{
    console_conveniences::Console,
    data::student::Student,
    error::{ErrorKind, RegistrationError, RegistrationResult},
    state::RegistrationState,
};
use std::io::{BufRead, Write};

/// Asks for a student's names and course, adding them to the enrollments if
/// every answer is valid. The first invalid answer abandons the entry.
pub fn register_student<R: BufRead, W: Write>(
    state: &mut RegistrationState,
    console: &mut Console<R, W>,
) -> RegistrationResult<()> {
    let mut student = Student::default();

    if ask(console, "Enter the student's first name: ", |answer| {
        student.set_first_name(answer)
    })? == Step::Abandon
    {
        return Ok(());
    }
    if ask(console, "Enter the student's last name: ", |answer| {
        student.set_last_name(answer)
    })? == Step::Abandon
    {
        return Ok(());
    }
    if ask(console, "Please enter the name of the course: ", |answer| {
        student.set_course_name(answer)
    })? == Step::Abandon
    {
        return Ok(());
    }

    console.blank()?;
    console.line(format_args!(
        "We have registered {} {} for {}.",
        student.first_name(),
        student.last_name(),
        student.course_name()
    ))?;
    console.blank()?;

    info!(%student, "Registered student");
    state.register(student);
    Ok(())
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Step {
    Next,
    Abandon,
}

///reports a bad answer itself, so `Abandon` needs no further handling
fn ask<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &str,
    apply: impl FnOnce(String) -> RegistrationResult<()>,
) -> RegistrationResult<Step> {
    let Some(answer) = console.prompt(question)? else {
        return Ok(Step::Abandon);
    };

    match answer.and_then(apply) {
        Ok(()) => Ok(Step::Next),
        Err(e) => {
            report_bad_entry(console, &e)?;
            Ok(Step::Abandon)
        }
    }
}

fn report_bad_entry<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    error: &RegistrationError,
) -> RegistrationResult<()> {
    let message = match error.kind() {
        ErrorKind::Validation => "One of the values was not the correct type of data!",
        _ => "Error: There was a problem with your entered data.",
    };
    console.error_message(message, Some(error))
}
