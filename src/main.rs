//! rBreakScheduler main entrypoint.

use rbreakscheduler::run;
use rbreakscheduler::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
