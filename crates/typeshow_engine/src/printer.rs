use std::fmt;

use tracing::instrument;
use typeshow_base::{PalHandle, ResultExt, TypeshowResult};

use crate::value::{Label, TypedValue};

/// The two lines rendered for a labelled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    display_line: String,
    type_line: String,
}

impl Description {
    /// `<label>: <formatted value>`
    pub fn display_line(&self) -> &str {
        &self.display_line
    }

    /// `<label> is of type: <type name>`
    pub fn type_line(&self) -> &str {
        &self.type_line
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.display_line)?;
        writeln!(f, "{}", self.type_line)
    }
}

/// Renders labelled values together with their type and writes them to stdout.
///
/// ```
/// use typeshow_base::{MockPal, PalHandle};
/// use typeshow_engine::{Label, TypedValue, TypedValuePrinter};
///
/// let pal = MockPal::new();
/// let printer = TypedValuePrinter::new(PalHandle::new(pal.clone()));
/// printer.print(&Label::new("small_val").unwrap(), &TypedValue::from(255u8)).unwrap();
/// assert_eq!(pal.stdout_contents(), "small_val: 255\nsmall_val is of type: u8\n");
/// ```
#[derive(Debug, Clone)]
pub struct TypedValuePrinter {
    pal: PalHandle,
}

impl TypedValuePrinter {
    pub fn new(pal: PalHandle) -> Self {
        Self { pal }
    }

    /// Renders both lines without writing them anywhere.
    pub fn describe(label: &Label, value: &TypedValue) -> Description {
        Description {
            display_line: format!("{}: {}", label, value),
            type_line: format!("{} is of type: {}", label, value.type_name()),
        }
    }

    /// Renders both lines and writes them to stdout, each terminated by a newline.
    #[instrument(skip(self, value), fields(label = %label, kind = ?value.kind()))]
    pub fn print(&self, label: &Label, value: &TypedValue) -> TypeshowResult<Description> {
        let description = Self::describe(label, value);
        self.pal
            .write_stdout(&description.to_string())
            .with_context(|| format!("Failed to print '{}'", label))?;
        Ok(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;
    use expect_test::expect;
    use typeshow_base::MockPal;

    fn label(text: &str) -> Label {
        Label::new(text).unwrap()
    }

    #[test]
    fn test_describe_formats_both_lines() {
        let description = TypedValuePrinter::describe(&label("username"), &"abhishek".into());

        assert_eq!(description.display_line(), "username: abhishek");
        assert_eq!(description.type_line(), "username is of type: String");
    }

    #[test]
    fn test_describe_is_total_over_every_kind() {
        for kind in ValueKind::ALL {
            let description = TypedValuePrinter::describe(&label("v"), &kind.zero_value());
            assert!(description.display_line().starts_with("v: "));
            assert_eq!(
                description.type_line(),
                format!("v is of type: {}", kind.type_name())
            );
        }
    }

    #[test]
    #[allow(clippy::excessive_precision)]
    fn test_float_widths_render_differently() {
        let literal_f32: TypedValue = 255.45544511254451885_f32.into();
        let literal_f64: TypedValue = 255.45544511254451885_f64.into();
        let as_f32 = TypedValuePrinter::describe(&label("small_float"), &literal_f32);
        let as_f64 = TypedValuePrinter::describe(&label("small_double"), &literal_f64);

        assert_eq!(as_f32.display_line(), "small_float: 255.45544");
        assert_eq!(as_f32.type_line(), "small_float is of type: f32");
        assert_eq!(as_f64.display_line(), "small_double: 255.4554451125445");
        assert_eq!(as_f64.type_line(), "small_double is of type: f64");
    }

    #[test]
    fn test_describe_is_idempotent() {
        let value = TypedValue::Int(300000);
        let first = TypedValuePrinter::describe(&label("number_of_users"), &value).to_string();
        let second = TypedValuePrinter::describe(&label("number_of_users"), &value).to_string();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_print_writes_two_lines_per_call() {
        let pal = MockPal::new();
        let printer = TypedValuePrinter::new(PalHandle::new(pal.clone()));

        printer.print(&label("is_logged_in"), &true.into()).unwrap();
        printer.print(&label("another_variable"), &TypedValue::DefaultInt).unwrap();

        expect![[r#"
            is_logged_in: true
            is_logged_in is of type: bool
            another_variable: 0
            another_variable is of type: isize
        "#]]
        .assert_eq(&pal.stdout_contents());
    }
}
