use anyhow::Result;
use std::io::{self, BufRead, Write};
use word_search_rs::{SubstringIndex, MAX_RESULTS};

/// Interactive word search over a grid typed at the terminal.
///
/// Usage: cargo run --example word_search
fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let mut stdout = io::stdout();

    writeln!(stdout, "Welcome to the Word Search Console App!")?;
    writeln!(stdout, "Enter the grid row by row (type 'END' to finish):")?;
    stdout.flush()?;

    let mut rows: Vec<String> = Vec::new();
    for line in input.by_ref() {
        let line = line?;
        if line.eq_ignore_ascii_case("END") {
            break;
        }

        // Reject rows that would make the grid ragged and ask again.
        if let Some(first) = rows.first() {
            let expected = first.chars().count();
            let found = line.chars().count();
            if found != expected {
                writeln!(
                    stdout,
                    "Row has {} characters, expected {}. Please re-enter it.",
                    found, expected
                )?;
                continue;
            }
        }
        rows.push(line);
    }
    log::debug!("read {} grid rows", rows.len());

    writeln!(stdout, "Enter the words to search for, separated by spaces:")?;
    stdout.flush()?;
    let Some(line) = input.next() else {
        return Ok(());
    };
    let line = line?;
    let words: Vec<&str> = line.split_whitespace().collect();

    let index = match SubstringIndex::from_rows(&rows) {
        Ok(index) => index,
        Err(err) => {
            writeln!(stdout, "Error: {}", err)?;
            return Ok(());
        }
    };

    writeln!(stdout, "\nTop {} Words Found:", MAX_RESULTS)?;
    for word in index.find(&words) {
        writeln!(stdout, "{}", word)?;
    }

    Ok(())
}
