use crate::utils::log::{log, LogLevel};
use std::process::Command;

/// Native libraries whose compile flags end up in the generated config
pub static PKG_LIBS: &str = "chafa ncursesw";

/// Asks pkg-config for the compile flags of the given libraries
/// # Arguments
/// * `libs` - Space separated library names to query
///
/// Returns the captured stdout of the query and whether it exited
/// successfully. stdout is a space separated flag list with a single
/// trailing newline.
pub fn cflags(libs: &str) -> (String, bool) {
    let cmd = format!("pkg-config --cflags {}", libs);
    log(LogLevel::Info, &format!("  Command: {}", &cmd));
    let output = Command::new("sh")
        .arg("-c")
        .arg(&cmd)
        .output()
        .unwrap_or_else(|why| {
            log(
                LogLevel::Error,
                &format!("Could not run pkg-config: {}", why),
            );
            std::process::exit(1);
        });
    if !output.status.success() {
        log(
            LogLevel::Debug,
            &format!("  Stderr: {}", String::from_utf8_lossy(&output.stderr)),
        );
    }
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        output.status.success(),
    )
}
