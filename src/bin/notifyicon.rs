use stepicons::config::read_config;
use stepicons::logger::{self, log_error, log_line};
use stepicons::notification::create_notification_icon;

fn main() {
    logger::init();
    let cfg = read_config();
    match create_notification_icon(&cfg) {
        Ok(path) => log_line(&format!("Successfully created {}", path.display())),
        Err(e) => log_error("Notification icon not created", &e),
    }
}
