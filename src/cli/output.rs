//! Terminal output helpers shared by every command.
//!
//! Commands never call `println!` directly for user-facing text; routing
//! everything through here keeps the symbols and colors uniform, and makes
//! it easy to audit that nothing sensitive leaks into ordinary output.
//! Passwords are printed in exactly one place: `print_record_details` with
//! `reveal` set.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::Record;

/// Green check mark, for completed operations.
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Red cross to stderr, for failures.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Yellow warning sign to stderr, for recoverable problems.
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Blue info marker, for neutral status messages.
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Dim arrow for follow-up hints after a command finishes.
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of entries (Index, Title, Username). Passwords and notes
/// never appear here — use `show` for a single entry.
pub fn print_records_table(records: &[Record]) {
    if records.is_empty() {
        info("No entries in this vault yet.");
        tip("Run `passlock add` to add your first entry.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Title", "Username"]);

    for (index, record) in records.iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            record.title.clone(),
            record.username.clone(),
        ]);
    }

    println!("{table}");
}

/// Print one entry's full details. The password is masked unless `reveal`.
pub fn print_record_details(index: usize, record: &Record, reveal: bool) {
    println!("{} {}", style("Entry").bold(), style(index).bold());
    println!("  {:10} {}", style("Title:").dim(), record.title);
    println!("  {:10} {}", style("Username:").dim(), record.username);

    if reveal {
        println!("  {:10} {}", style("Password:").dim(), record.password);
    } else {
        println!(
            "  {:10} {} {}",
            style("Password:").dim(),
            "********",
            style("(use --reveal to print)").dim()
        );
    }

    if !record.notes.is_empty() {
        println!("  {:10} {}", style("Notes:").dim(), record.notes);
    }
}
