use crate::error::{InvalidNameSnafu, RegistrationResult};
use snafu::ensure;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NameField {
    First,
    Last,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::First => "first name",
            Self::Last => "last name",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> RegistrationResult<Self> {
        let mut person = Self::default();
        person.set_first_name(first_name)?;
        person.set_last_name(last_name)?;
        Ok(person)
    }

    pub fn first_name(&self) -> String {
        title_case(&self.first_name)
    }

    pub fn last_name(&self) -> String {
        title_case(&self.last_name)
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> RegistrationResult<()> {
        self.first_name = validate_name(NameField::First, value.into())?;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> RegistrationResult<()> {
        self.last_name = validate_name(NameField::Last, value.into())?;
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first_name(), self.last_name())
    }
}

///letters only; number-letters such as roman numerals don't count
fn is_name_char(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

///empty is the "unset" value and always passes
fn validate_name(field: NameField, value: String) -> RegistrationResult<String> {
    ensure!(
        value.chars().all(is_name_char),
        InvalidNameSnafu {
            field,
            provided: value
        }
    );
    Ok(value)
}

/// Upper-cases every character that follows an uncased one (or starts the
/// string) and lower-cases every character that follows a cased one.
///
/// Digraphs such as `ǆ` become their upper-case form (`Ǆ`) rather than their
/// title-case form (`ǅ`), as `char` only exposes upper and lower mappings.
pub fn title_case(raw: &str) -> String {
    let mut output = String::with_capacity(raw.len());
    let mut previous_was_cased = false;

    for c in raw.chars() {
        if previous_was_cased {
            output.extend(c.to_lowercase());
        } else {
            output.extend(c.to_uppercase());
        }
        previous_was_cased = c.is_uppercase() || c.is_lowercase();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, RegistrationError};
    use proptest::prelude::*;

    #[test]
    fn names_are_read_back_in_title_case() {
        let person = Person::new("jOHN", "doe").unwrap();
        assert_eq!(person.first_name(), "John");
        assert_eq!(person.last_name(), "Doe");
        assert_eq!(person.to_string(), "John,Doe");
    }

    #[test]
    fn empty_names_are_accepted() {
        let person = Person::new("", "").unwrap();
        assert_eq!(person.to_string(), ",");
    }

    #[test]
    fn rejected_names_leave_the_old_value_in_place() {
        let mut person = Person::new("Ada", "Lovelace").unwrap();
        let err = person.set_first_name("Ada2").unwrap_err();

        assert!(matches!(
            err,
            RegistrationError::InvalidName { field: NameField::First, ref provided } if provided == "Ada2"
        ));
        assert_eq!(person.first_name(), "Ada");
    }

    #[test]
    fn whitespace_inside_a_name_is_rejected() {
        let err = Person::new("Mary Ann", "Smith").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn title_case_splits_on_non_letters() {
        assert_eq!(title_case("o'NEIL-smith"), "O'Neil-Smith");
        assert_eq!(title_case("élodie"), "Élodie");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn uncased_letters_start_a_new_word() {
        assert_eq!(title_case("王abc"), "王Abc");
        assert_eq!(Person::new("王abc", "").unwrap().first_name(), "王Abc");
    }

    #[test]
    fn number_letters_are_not_name_characters() {
        for name in ["Ⅻ", "Henryⅷ", "ⅰ"] {
            let err = Person::new(name, "Tudor").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        assert!(Person::new("Zoë", "Ngā").is_ok());
    }

    proptest! {
        #[test]
        fn alphabetic_names_round_trip_title_cased(name in "[a-zA-Z]{1,16}") {
            let person = Person::new(name.clone(), name.clone()).unwrap();
            let mut expected = name[..1].to_uppercase();
            expected.push_str(&name[1..].to_lowercase());

            prop_assert_eq!(person.first_name(), expected.clone());
            prop_assert_eq!(person.last_name(), expected);
        }

        #[test]
        fn names_with_digits_or_symbols_are_rejected(
            prefix in "[a-zA-Z]{0,6}",
            bad in "[0-9!@#$%^&*()_+=.,;: -]",
            suffix in "[a-zA-Z]{0,6}",
        ) {
            let name = format!("{prefix}{bad}{suffix}");
            let err = Person::new(name.as_str(), "Doe").unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::Validation);
        }
    }
}
