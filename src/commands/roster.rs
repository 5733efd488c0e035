//! Class roster commands

use crate::{
    config::DatabaseConfig,
    storage::{Database, StudentRecord},
    Result,
};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Handle `roster seed`
pub fn handle_seed(config: &DatabaseConfig) -> Result<()> {
    let mut db = Database::open(config)?;
    let rows = db.seed_students()?;

    info!(rows, path = %config.path().display(), "students table ready");
    println!("✓ Table created and {} students inserted", rows);
    Ok(())
}

/// Handle `roster ask` against the process's stdin and stdout
pub fn handle_ask(config: &DatabaseConfig) -> Result<()> {
    let db = Database::open_existing(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    ask_question(&db, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Prompt for one name, look it up, and print the answer.
///
/// Returns the matched student so callers can inspect the outcome.
pub fn ask_question<R: BufRead, W: Write>(
    db: &Database,
    mut input: R,
    mut output: W,
) -> Result<Option<StudentRecord>> {
    write!(output, "Who do you want to know about? ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let name = line.trim();

    let student = db.find_student(name)?;
    writeln!(output, "{}", describe_student(name, student.as_ref()))?;
    Ok(student)
}

/// Human-readable answer for a lookup
pub fn describe_student(name: &str, student: Option<&StudentRecord>) -> String {
    match student {
        Some(s) => format!("{} likes to eat {}.", s.name, s.favorite_food),
        None => format!("No student named {:?} is on the roster.", name),
    }
}
