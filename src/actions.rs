use crate::{
    actions::{register::register_student, save::save_students, show::show_students},
    console_conveniences::Console,
    error::RegistrationResult,
    state::RegistrationState,
};
use std::io::{BufRead, Write};

pub mod register;
pub mod save;
pub mod show;

pub const MENU: &str = "\
---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course
    2. Show current data
    3. Save data to a file
    4. Exit the program
-----------------------------------------";

pub const INVALID_CHOICE: &str = "Please choose only 1, 2, 3, or 4.";
pub const FAREWELL: &str = "Program Ended. Thank you for using the Course Registration Program.";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Show,
    Save,
    Exit,
}

impl MenuChoice {
    pub fn parse(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::Register),
            "2" => Some(Self::Show),
            "3" => Some(Self::Save),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Shows the menu and runs the chosen action until the user exits or the
/// input runs out.
///
/// Every failure inside an action is reported to the user and the loop carries
/// on; only a broken console ends it early.
pub fn run<R: BufRead, W: Write>(
    state: &mut RegistrationState,
    console: &mut Console<R, W>,
) -> RegistrationResult<()> {
    loop {
        console.blank()?;
        console.line(MENU)?;
        console.blank()?;

        let Some(answer) = console.prompt("Enter your menu choice number: ")? else {
            debug!("Input closed, exiting");
            console.blank()?;
            break;
        };

        let Some(choice) = answer.ok().as_deref().and_then(MenuChoice::parse) else {
            console.error_message(INVALID_CHOICE, None)?;
            continue;
        };

        debug!(?choice, "Menu choice");
        match choice {
            MenuChoice::Register => register_student(state, console)?,
            MenuChoice::Show => show_students(state, console)?,
            MenuChoice::Save => save_students(state, console)?,
            MenuChoice::Exit => break,
        }
    }

    console.line(FAREWELL)
}
