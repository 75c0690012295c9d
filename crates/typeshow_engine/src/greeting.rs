use tracing::{debug, instrument};
use typeshow_base::{PalHandle, TypeshowError, TypeshowResult};

use crate::config::Config;
use crate::reader::{ConsoleLine, read_line_with_mode};
use crate::value::ValueKind;

pub const WELCOME_MESSAGE: &str = "Welcome to the user input program";
pub const PROMPT: &str = "Enter your name: ";

/// Greets the user by the name typed on stdin.
///
/// The name is echoed with its trailing newline, so a blank line follows the greeting.
/// In strict mode a failed read is returned as an error before anything is greeted; the
/// [`ReadError`](crate::reader::ReadError) is the error's source.
#[instrument(skip_all, fields(mode = ?config.read_mode))]
pub fn run_greeting(pal: &PalHandle, config: &Config) -> TypeshowResult<ConsoleLine> {
    pal.write_stdout(&format!("{}\n", config.welcome_message))?;
    pal.write_stdout(&format!("{}\n", config.prompt))?;

    let mut stdin = pal.stdin()?;
    let name = read_line_with_mode(&mut *stdin, config.read_mode)
        .map_err(|e| Box::new(TypeshowError::from_source("Failed to read name", e)))?;
    debug!(bytes = name.as_str().len(), "read name");

    pal.write_stdout(&format!("Hello,  {}\n", name))?;
    pal.write_stdout(&format!("Type of name is {}\n", ValueKind::Text.type_name()))?;
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{ReadError, ReadMode};
    use std::error::Error;
    use typeshow_base::MockPal;

    fn config(read_mode: ReadMode) -> Config {
        Config {
            read_mode,
            ..Config::default()
        }
    }

    #[test]
    fn test_greeting_keeps_the_newline_of_the_name() {
        let pal = MockPal::new();
        pal.push_stdin("abhishek\n");

        let pal_handle = PalHandle::new(pal.clone());
        let name = run_greeting(&pal_handle, &config(ReadMode::BestEffort)).unwrap();

        assert_eq!(name.as_str(), "abhishek\n");
        assert_eq!(
            pal.stdout_contents(),
            "Welcome to the user input program\n\
             Enter your name: \n\
             Hello,  abhishek\n\
             \n\
             Type of name is String\n"
        );
    }

    #[test]
    fn test_best_effort_greets_empty_name_on_closed_input() {
        let pal = MockPal::new();

        let pal_handle = PalHandle::new(pal.clone());
        let name = run_greeting(&pal_handle, &config(ReadMode::BestEffort)).unwrap();

        assert_eq!(name.as_str(), "");
        assert!(pal.stdout_contents().ends_with("Hello,  \nType of name is String\n"));
    }

    #[test]
    fn test_strict_mode_surfaces_end_of_stream() {
        let pal = MockPal::new();

        let pal_handle = PalHandle::new(pal.clone());
        let err = run_greeting(&pal_handle, &config(ReadMode::Strict)).unwrap_err();

        let read_error = err
            .source()
            .and_then(|source| source.downcast_ref::<ReadError>())
            .expect("read error should be the source");
        assert!(matches!(read_error, ReadError::EndOfStream { .. }));
        assert_eq!(
            err.to_string(),
            "Failed to read name: end of input before any line was read"
        );
        assert!(!pal.stdout_contents().contains("Hello"));
    }

    #[test]
    fn test_custom_texts_from_config() {
        let pal = MockPal::new();
        pal.push_stdin("Ferris\n");
        let config = Config {
            welcome_message: "Hi there".to_string(),
            prompt: "Who are you?".to_string(),
            ..config(ReadMode::Strict)
        };

        run_greeting(&PalHandle::new(pal.clone()), &config).unwrap();

        assert!(pal.stdout_contents().starts_with("Hi there\nWho are you?\nHello,  Ferris\n"));
    }
}
