use colored::Colorize;
use package_sorting::Category;

/// Progress line for a step that is about to run
pub fn status_message(message: &str) {
    println!("{} {}", "›".cyan().bold(), message.bright_white());
}

pub fn success_message(message: &str) {
    println!("{} {}", "✔".green().bold(), message.green());
}

pub fn warning_message(message: &str) {
    println!("{} {}", "!".yellow().bold(), message.yellow());
}

/// Errors go to stderr so `classify --json` output stays parseable
pub fn error_message(message: &str) {
    eprintln!("{} {}", "✘".red().bold(), message.red().bold());
}

/// Title line above a block of command output
pub fn section_header(title: &str) {
    println!("\n{} {}", "📦".cyan(), title.to_uppercase().cyan().bold());
}

/// Secondary detail, dimmed so results stand out
pub fn info_message(message: &str) {
    println!("  {}", message.dimmed());
}

/// Category label colored by how far the package leaves the standard lane
pub fn category_label(category: Category) -> String {
    match category {
        Category::Standard => category.as_str().green().bold().to_string(),
        Category::Special => category.as_str().yellow().bold().to_string(),
        Category::Rejected => category.as_str().red().bold().to_string(),
    }
}
