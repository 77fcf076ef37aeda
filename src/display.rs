use crate::types::Repository;
use colored::*;

pub const ESPRIT_PI_BANNER: &str = r"
  _____ ____  ____  ____  ___ _____      ____ ___
 | ____/ ___||  _ \|  _ \|_ _|_   _|    |  _ \_ _|
 |  _| \___ \| |_) | |_) || |  | |_____ | |_) | |
 | |___ ___) |  __/|  _ < | |  | |_____||  __/| |
 |_____|____/|_|   |_| \_\___| |_|      |_|  |___|
";

const HEADERS: [&str; 4] = ["Repository Name", "Owner", "Stars", "URL"];

/// Build the results table as a string: header row, separator, one row per
/// repository in the given order, and a trailing total count line.
pub fn render_table(repos: &[Repository]) -> String {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();

    for repo in repos {
        widths[0] = widths[0].max(repo.name.len());
        widths[1] = widths[1].max(repo.owner.login.len());
        widths[2] = widths[2].max(repo.stargazers_count.to_string().len());
        widths[3] = widths[3].max(repo.html_url.len());
    }

    let mut out = String::new();
    out.push_str(&format_row(HEADERS.map(String::from).as_slice(), &widths));
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 3 * 2));
    out.push('\n');

    for repo in repos {
        let cells = [
            repo.name.clone(),
            repo.owner.login.clone(),
            repo.stargazers_count.to_string(),
            repo.html_url.clone(),
        ];
        out.push_str(&format_row(&cells, &widths));
    }

    out.push('\n');
    out.push_str(&format!("Total repositories found: {}\n", repos.len()));
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

pub fn print_banner() {
    println!("{}", ESPRIT_PI_BANNER.bold().blue());
}

pub fn print_results(repos: &[Repository]) {
    print!("{}", render_table(repos));
}
