use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::{Path, MAIN_SEPARATOR};

/// Turn an absolute discovery result into the path written to a file
/// list: the dataset-root prefix is removed, along with any leading
/// path separator left behind.
pub fn relative_to_root(path: &Path, root: &Path) -> String {
    let stripped = path.strip_prefix(root).unwrap_or(path);
    stripped
        .to_string_lossy()
        .trim_start_matches(MAIN_SEPARATOR)
        .to_string()
}

/// Create a progress bar with the given length and label.
///
/// Bars draw to stdout so that `ProgressBar::println` echoes each list
/// line to standard output without tearing the bar.
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(len, ProgressDrawTarget::stdout());
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .progress_chars("#>-"),
    );
    pb
}
