//! Output formatting and progress spinners for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{pagerank::Distribution, tictactoe::Board};

/// Create a spinner for long-running tasks
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Rank table: a title line, then `  page: 0.1234` per page in page order
pub fn format_rank_table(title: &str, ranks: &Distribution) -> String {
    format!("{title}\n{ranks}")
}

/// Board with row and column labels
///
/// ```text
///    0 1 2
/// 0  X . O
/// ```
pub fn format_board(board: &Board) -> String {
    let mut out = String::from("   0 1 2\n");
    for (i, row) in board.cells().iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
        out.push_str(&format!("{i}  {}\n", cells.join(" ")));
    }
    out
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rank_table() {
        let ranks: Distribution = [("2.html".to_string(), 0.75), ("1.html".to_string(), 0.25)]
            .into_iter()
            .collect();
        assert_eq!(
            format_rank_table("PageRank Results from Iteration", &ranks),
            "PageRank Results from Iteration\n  1.html: 0.2500\n  2.html: 0.7500\n"
        );
    }

    #[test]
    fn test_format_board() {
        let board = Board::from_string("X.O|...|...").unwrap();
        assert_eq!(
            format_board(&board),
            "   0 1 2\n0  X . O\n1  . . .\n2  . . .\n"
        );
    }
}
