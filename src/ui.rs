//! Terminal output for successful runs

use console::Style;
use std::path::Path;

/// Line announcing the created post, e.g. `Created _posts/2024-03-05-hello.md`
pub fn created_line(path: &Path) -> String {
    format!(
        "{} {}",
        Style::new().bold().green().apply_to("Created"),
        path.display()
    )
}

/// Print the created post's path to stdout
pub fn print_created(path: &Path) {
    println!("{}", created_line(path));
}
