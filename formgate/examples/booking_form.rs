//! Interactive walkthrough of a clinic booking form.
//!
//! Reads one line per field from stdin and echoes the feedback a UI host
//! would render inline. Try leaving fields empty, mistyping the email, or
//! sneaking digits into the owner name.

use std::fs::File;
use std::io::{self, BufRead, Write};

use formgate::{Feedback, FormValidator};
use simplelog::{Config, LevelFilter, WriteLogger};

struct ConsoleFeedback;

impl Feedback for ConsoleFeedback {
    fn mark_valid(&mut self, field: &str) {
        println!("  [{field}] ok");
    }

    fn mark_invalid(&mut self, _field: &str) {}

    fn show_message(&mut self, field: &str, message: &str) {
        println!("  [{field}] {message}");
    }

    fn clear_message(&mut self, _field: &str) {}

    fn focus(&mut self, field: &str) {
        println!("-> fix `{field}` first");
    }
}

fn main() -> io::Result<()> {
    let log_file = File::create("booking_form.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut form = FormValidator::new();
    form.add_field("owner", "required|onlyLetters|minLength:3|capitalize")
        .expect("field");
    form.add_field("email", "required|email").expect("field");
    form.add_field("phone", "required|phone").expect("field");
    form.add_field("ci", "required|ci").expect("field");
    form.add_field("date", "required|futureDate").expect("field");

    println!("Clinic booking form (date is YYYY-MM-DD)\n");

    let stdin = io::stdin();
    let mut feedback = ConsoleFeedback;
    let names: Vec<String> = form.fields().map(|field| field.name().to_string()).collect();

    for name in &names {
        print!("{name}: ");
        io::stdout().flush()?;
        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
        let line = line.trim_end_matches(['\n', '\r']);

        form.on_input(name, line, line.len(), &mut feedback)
            .expect("registered field");
        form.on_blur(name, &mut feedback).expect("registered field");

        let stored = form.value_of(name).unwrap_or_default().to_string();
        if stored != line {
            println!("  [{name}] formatted to `{stored}`");
        }
    }

    println!();
    if form.on_submit(&mut feedback) {
        println!("Booking submitted.");
    } else {
        println!("Booking blocked; fix the fields above and try again.");
    }
    Ok(())
}
