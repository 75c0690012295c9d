/* 📖 # What is the Platform Abstraction Layer?

Everything typeshow reads or writes outside of memory goes through the `Pal` trait:
standard input, standard output and the optional config file.
`RealPal` talks to the process streams and the filesystem, `MockPal` keeps all of it in memory
so tests can feed input lines and inspect the exact output bytes.
*/

mod file_path;
pub mod mock;
pub mod real_pal;
mod traits;

pub use file_path::FilePath;
pub use mock::MockPal;
pub use real_pal::RealPal;
pub use traits::{Pal, PalHandle};
