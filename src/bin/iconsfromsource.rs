use stepicons::config::read_config;
use stepicons::from_source::generate_from_source;
use stepicons::logger::{self, log_error};
use stepicons::log_report;

fn main() {
    logger::init();
    let cfg = read_config();
    match generate_from_source(&cfg) {
        Ok(report) => log_report(&report, "All icons generated successfully."),
        Err(e) => log_error("Nothing generated", &e),
    }
}
