//! Terminal output formatting.

use colored::Colorize;
use disclo_core::announcement::model::Announcement;
use unicode_width::UnicodeWidthStr;

const DATE_WIDTH: usize = 12;

/// Print announcements as a table.
pub fn print_announcements_table(stock_code: &str, announcements: &[Announcement]) {
    if announcements.is_empty() {
        println!("{}", format!("No reports found for {}.", stock_code).dimmed());
        return;
    }

    let title_width = term_width().saturating_sub(DATE_WIDTH + 2).max(20);

    println!("{} {}", pad_right("Date", DATE_WIDTH).bold(), "Title".bold());
    println!("{}", "─".repeat(DATE_WIDTH + 1 + title_width.min(60)));

    for a in announcements {
        println!(
            "{} {}",
            pad_right(&a.announcement_time, DATE_WIDTH).yellow(),
            truncate_visual(&a.announcement_title, title_width)
        );
        println!("{} {}", " ".repeat(DATE_WIDTH), a.adjunct_url.dimmed());
    }

    println!();
    println!("{} report(s) for {}", announcements.len(), stock_code.cyan());
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}
