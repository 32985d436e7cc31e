use crate::{console_conveniences::Console, error::RegistrationResult, state::RegistrationState};
use std::io::{BufRead, Write};

pub fn show_students<R: BufRead, W: Write>(
    state: &RegistrationState,
    console: &mut Console<R, W>,
) -> RegistrationResult<()> {
    console.records(state.students())
}
