use std::io::Write;

use dayglow_core::storage::NotificationsConfig;

/// Announce a finished countdown on the terminal.
pub fn completion(config: &NotificationsConfig, message: &str) {
    if !config.enabled {
        return;
    }
    let mut out = std::io::stdout().lock();
    if config.bell {
        let _ = write!(out, "\x07");
    }
    let _ = writeln!(out, "\n*** {message} ***");
    let _ = out.flush();
}
