use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use pangowho_io::Source;

///
/// Load `source` with `task`, behind a spinner on stderr when it has to be fetched.
///
/// Local files load without one. The spinner is cleared when the task returns,
/// whatever its outcome, so error messages are printed on a clean line.
///
pub fn with_spinner<T>(source: &Source, message: String, task: impl FnOnce() -> T) -> T {
    if !source.is_remote() {
        return task();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = task();

    pb.finish_and_clear();
    result
}
