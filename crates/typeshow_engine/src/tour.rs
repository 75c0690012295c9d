/* 📖 # What does the variable tour show?

Each declaration form gets one entry: explicit types (`username` .. `small_double`),
a variable declared without an initializer (`another_variable`), inferred types
(`website`, `number_of_users`) and a constant (`LOGIN_TOKEN`).
Extra declarations from the config file are appended after these.
*/

use tracing::instrument;
use typeshow_base::TypeshowResult;

use crate::printer::TypedValuePrinter;
use crate::value::{Label, TypedValue};

/// Constant shown at the end of the tour.
pub const LOGIN_TOKEN: &str = "gibberish";

/// One labelled value of the tour.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub label: Label,
    pub value: TypedValue,
}

impl Declaration {
    pub fn new(label: impl Into<String>, value: impl Into<TypedValue>) -> TypeshowResult<Self> {
        Ok(Self {
            label: Label::new(label)?,
            value: value.into(),
        })
    }
}

/// The fixed declarations of the tour, in display order.
#[allow(clippy::excessive_precision)]
pub fn builtin_declarations() -> TypeshowResult<Vec<Declaration>> {
    let username: String = "abhishek".to_string();
    let is_logged_in: bool = true;
    let small_val: u8 = 255;
    let small_float: f32 = 255.45544511254451885;
    let small_double: f64 = 255.45544511254451885;
    let another_variable = TypedValue::DefaultInt;
    let website = "https://www.google.com";
    let number_of_users = 300_000_isize;

    Ok(vec![
        Declaration::new("username", username)?,
        Declaration::new("is_logged_in", is_logged_in)?,
        Declaration::new("small_val", small_val)?,
        Declaration::new("small_float", small_float)?,
        Declaration::new("small_double", small_double)?,
        Declaration::new("another_variable", another_variable)?,
        Declaration::new("website", website)?,
        Declaration::new("number_of_users", number_of_users)?,
        Declaration::new("LOGIN_TOKEN", LOGIN_TOKEN)?,
    ])
}

/// Prints every declaration in order.
#[instrument(skip_all, fields(count = declarations.len()))]
pub fn run_tour(printer: &TypedValuePrinter, declarations: &[Declaration]) -> TypeshowResult<()> {
    for declaration in declarations {
        printer.print(&declaration.label, &declaration.value)?;
    }
    Ok(())
}
