//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for the policy sweep
pub fn create_sweep_progress(total_positions: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_positions);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} positions")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}
