/* 📖 # What lives in typeshow_base?

The error type, tracing setup and the platform abstraction layer shared by the engine and the CLI.
*/

pub mod error;
pub mod pal;
mod pal_tests;
pub mod tracing;

pub use error::{ErrorKind, ResultExt, TypeshowError, TypeshowResult};
pub use pal::{FilePath, MockPal, Pal, PalHandle, RealPal};
