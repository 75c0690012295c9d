use tracing::{info, instrument};
use typeshow_base::{PalHandle, ResultExt, TypeshowResult};

use crate::config::Config;
use crate::greeting::run_greeting;
use crate::printer::TypedValuePrinter;
use crate::reader::ConsoleLine;
use crate::tour::{builtin_declarations, run_tour};

/// Runs the variable tour followed by the greeting.
///
/// Returns the line read for the greeting.
#[instrument(skip_all)]
pub fn run_program(pal: &PalHandle, config: &Config) -> TypeshowResult<ConsoleLine> {
    let mut declarations = builtin_declarations()?;
    declarations.extend(config.declarations()?);
    info!(declarations = declarations.len(), "starting variable tour");

    let printer = TypedValuePrinter::new(pal.clone());
    run_tour(&printer, &declarations).context("Failed to print the variable tour")?;
    run_greeting(pal, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VariableConfig;
    use crate::reader::ReadMode;
    use expect_test::expect;
    use typeshow_base::MockPal;

    #[test]
    fn test_full_run_in_best_effort_mode() {
        let pal = MockPal::new();
        pal.push_stdin("abhishek\n");
        let config = Config {
            read_mode: ReadMode::BestEffort,
            variables: vec![VariableConfig {
                label: "max_small".to_string(),
                value: Some("1e6".into()),
                kind: Some(crate::value::ValueKind::Float32),
            }],
            ..Config::default()
        };

        let name = run_program(&PalHandle::new(pal.clone()), &config).unwrap();

        assert_eq!(name.trimmed(), "abhishek");
        expect![[r#"
            username: abhishek
            username is of type: String
            is_logged_in: true
            is_logged_in is of type: bool
            small_val: 255
            small_val is of type: u8
            small_float: 255.45544
            small_float is of type: f32
            small_double: 255.4554451125445
            small_double is of type: f64
            another_variable: 0
            another_variable is of type: isize
            website: https://www.google.com
            website is of type: String
            number_of_users: 300000
            number_of_users is of type: isize
            LOGIN_TOKEN: gibberish
            LOGIN_TOKEN is of type: String
            max_small: 1e+06
            max_small is of type: f32
            Welcome to the user input program
            Enter your name: 
            Hello,  abhishek

            Type of name is String
        "#]]
        .assert_eq(&pal.stdout_contents());
    }

    #[test]
    fn test_strict_run_fails_on_closed_input_after_the_tour() {
        let pal = MockPal::new();

        let err = run_program(&PalHandle::new(pal.clone()), &Config::default()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to read name: end of input before any line was read"
        );
        let output = pal.stdout_contents();
        assert!(output.contains("LOGIN_TOKEN is of type: String\n"));
        assert!(output.ends_with("Enter your name: \n"));
    }

    #[test]
    fn test_invalid_config_variable_stops_before_printing() {
        let pal = MockPal::new();
        let config = Config {
            variables: vec![VariableConfig {
                label: "broken".to_string(),
                value: None,
                kind: None,
            }],
            ..Config::default()
        };

        assert!(run_program(&PalHandle::new(pal.clone()), &config).is_err());
        assert_eq!(pal.stdout_contents(), "");
    }
}
