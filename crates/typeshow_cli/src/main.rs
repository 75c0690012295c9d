/* 📖 # How does the CLI run?

There are no arguments. `typeshow` prints the variable tour, then asks for a name on stdin
and greets it. An optional `typeshow.toml` in the current directory can switch the read mode,
change the greeting texts and add variables to the tour.

Exit codes:
- 0: tour and greeting completed
- 1: the config could not be loaded, output could not be written, or the name could not be
  read in strict mode
*/

use std::env;
use std::process;

use typeshow_base::tracing::{debug, init_tracing};
use typeshow_base::{FilePath, PalHandle, RealPal};
use typeshow_engine::{CONFIG_FILE_NAME, load_config, run_program};

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let current_dir = env::current_dir().unwrap_or_else(|e| {
        eprintln!("Error: Failed to get current directory: {}", e);
        process::exit(1);
    });

    let pal = PalHandle::new(RealPal::new(current_dir));

    let config = match load_config(&pal, &FilePath::from(CONFIG_FILE_NAME)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config from {}: {}", CONFIG_FILE_NAME, e);
            if let Some(cause) = e.cause() {
                eprintln!("  caused by: {}", cause);
            }
            debug!(root_cause = %e.root_cause(), "{:?}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_program(&pal, &config) {
        eprintln!("Error: {}", e);
        debug!("{:?}", e);
        process::exit(1);
    }
}
