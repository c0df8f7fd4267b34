use stepicons::config::read_config;
use stepicons::launcher::generate_launcher_icons;
use stepicons::logger::{self, log_error};
use stepicons::log_report;

fn main() {
    logger::init();
    let cfg = read_config();
    match generate_launcher_icons(&cfg) {
        Ok(report) => log_report(&report, "All icons generated successfully!"),
        Err(e) => log_error("Icon generation failed", &e),
    }
}
