//! minicrm main entrypoint.

use minicrm::run;
use minicrm::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
