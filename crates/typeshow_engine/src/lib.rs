/* 📖 # What does typeshow_engine do?

It renders values next to the names of their types and reads a line from the console:
- `value`: the closed set of value kinds and their zero values
- `float_format`: shortest round-trip float rendering
- `printer`: the two-line description of a labelled value
- `reader`: strict and best-effort console line reading
- `tour`, `greeting`, `program`: the two programs the CLI runs
*/

pub mod config;
pub mod float_format;
pub mod greeting;
pub mod printer;
pub mod program;
pub mod reader;
pub mod tour;
pub mod value;

pub use config::{CONFIG_FILE_NAME, Config, VariableConfig, VariableLiteral, load_config};
pub use greeting::run_greeting;
pub use printer::{Description, TypedValuePrinter};
pub use program::run_program;
pub use reader::{ConsoleLine, ReadError, ReadMode, read_line, read_line_with_mode};
pub use tour::{Declaration, builtin_declarations, run_tour};
pub use value::{Label, TypedValue, ValueKind};
