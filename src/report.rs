use dialoguer::console::{Term, style};

pub const NOTHING_SELECTED: &str = "Nothing selected";

/// User-facing console messages.
pub trait Reporter {
    fn success(&self, text: &str);
    fn error(&self, text: &str);
    fn log(&self, text: &str);
}

#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    term: Term,
}

impl ConsoleReporter {
    /// Messages go to stdout, or to stderr when stdout is reserved for JSON.
    pub fn new(json: bool) -> Self {
        let term = if json { Term::stderr() } else { Term::stdout() };
        Self { term }
    }

    fn write(&self, line: &str) {
        let _ = self.term.write_line(line);
    }
}

impl Reporter for ConsoleReporter {
    fn success(&self, text: &str) {
        self.write(&format!("{}{text}", style("✔ ").green()));
    }

    fn error(&self, text: &str) {
        self.write(&format!("{}{text}", style("✖ ").red()));
    }

    fn log(&self, text: &str) {
        self.write(text);
    }
}

pub fn matched_message(refs: &[String]) -> String {
    format!("Matched: {}", refs.join(", "))
}

pub fn deleted_message(remote: &str, count: usize) -> String {
    let noun = if count == 1 { "ref" } else { "refs" };
    format!("Deleted {count} {noun} from {remote}")
}
