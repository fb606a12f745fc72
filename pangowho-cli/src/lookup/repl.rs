use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Sender};
use std::thread;

use pangowho_core::matcher::resolve;
use pangowho_core::{FullMap, PrefixMap};

use super::interrupt::forward_interrupt;

pub const PROMPT: &str = "Enter a PANGO lineage: ";
pub const NO_MATCH: &str = "No matches found";
pub const FAREWELL: &str = "Terminating program.";

///
/// A table the interactive loop can answer queries from.
///
pub trait LineageLookup {
    /// Lines to print for a query, or `None` when the table has no answer.
    fn describe(&self, lineage: &str) -> Option<Vec<String>>;
}

impl LineageLookup for PrefixMap {
    fn describe(&self, lineage: &str) -> Option<Vec<String>> {
        resolve(lineage, self).map(|hit| {
            vec![
                format!("matched: {}", hit.prefix),
                format!("wholabel: {}", hit.label),
            ]
        })
    }
}

impl LineageLookup for FullMap {
    fn describe(&self, lineage: &str) -> Option<Vec<String>> {
        self.get(lineage).map(|entry| {
            vec![
                format!("wholabel: {}", entry.wholabel),
                format!("nextclade: {}", entry.nextclade),
                format!("unaliased: {}", entry.unaliased),
                format!("aliased: {}", entry.aliased),
            ]
        })
    }
}

///
/// What the interactive loop waits on between prompts.
///
#[derive(Debug)]
pub enum ReplEvent {
    /// A query, minus its line terminator.
    Line(String),
    /// Standard input is exhausted (Ctrl+D on a terminal).
    EndOfInput,
    /// The user pressed Ctrl+C.
    Interrupt,
    /// Reading standard input failed.
    Failed(io::Error),
}

///
/// Read `input` line by line onto `events` until it ends or fails.
///
/// Lines are taken as typed, minus the line terminator. Stops early once the
/// receiving end is gone.
///
pub fn forward_lines<R: BufRead>(mut input: R, events: Sender<ReplEvent>) {
    let mut line = String::new();

    loop {
        line.clear();
        let event = match input.read_line(&mut line) {
            Ok(0) => ReplEvent::EndOfInput,
            Ok(_) => ReplEvent::Line(line.trim_end_matches(['\n', '\r']).to_string()),
            Err(e) => ReplEvent::Failed(e),
        };

        let last = !matches!(event, ReplEvent::Line(_));
        if events.send(event).is_err() || last {
            break;
        }
    }
}

///
/// Prompt for lineages, answering each one from `table`, until the session is
/// interrupted or the input ends.
///
/// Both Ctrl+C and end of input end the session normally with a farewell line.
///
/// # Returns
/// - the number of queries answered or reported as misses
///
pub fn run_repl<T, I, W>(table: &T, events: I, out: &mut W) -> io::Result<usize>
where
    T: LineageLookup + ?Sized,
    I: IntoIterator<Item = ReplEvent>,
    W: Write,
{
    let mut events = events.into_iter();
    let mut queries = 0;

    loop {
        write!(out, "\n{}", PROMPT)?;
        out.flush()?;

        let lineage = match events.next() {
            Some(ReplEvent::Line(lineage)) => lineage,
            Some(ReplEvent::Failed(e)) => return Err(e),
            Some(ReplEvent::Interrupt) | Some(ReplEvent::EndOfInput) | None => {
                writeln!(out, "\n{}", FAREWELL)?;
                break;
            }
        };

        match table.describe(&lineage) {
            Some(lines) => {
                for text in lines {
                    writeln!(out, "{}", text)?;
                }
            }
            None => writeln!(out, "{}", NO_MATCH)?,
        }
        queries += 1;
    }

    log::debug!("Interactive session ended after {} queries", queries);

    Ok(queries)
}

///
/// Run an interactive session on the terminal: queries from stdin, answers to
/// stdout, Ctrl+C and end of input both ending it normally.
///
pub fn run_terminal_session<T>(table: &T) -> io::Result<usize>
where
    T: LineageLookup + ?Sized,
{
    let (sender, receiver) = mpsc::channel();

    forward_interrupt(sender.clone())?;
    thread::spawn(move || forward_lines(io::stdin().lock(), sender));

    let stdout = io::stdout();
    run_repl(table, receiver, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pangowho_core::{FullMappingBuilder, LineageRecord};

    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::io::Cursor;

    fn session<T: LineageLookup>(table: &T, input: &str) -> (usize, String) {
        let (sender, receiver) = mpsc::channel();
        forward_lines(Cursor::new(input), sender);

        let mut out = Vec::new();
        let queries = run_repl(table, receiver, &mut out).unwrap();
        (queries, String::from_utf8(out).unwrap())
    }

    #[rstest]
    fn test_core_table_session() {
        let table: PrefixMap = [("B.1.617.2", "Delta")].into_iter().collect();

        let (queries, transcript) = session(&table, "B.1.617.2.1\nB.1.1.7\n");

        assert_eq!(queries, 2);
        assert_eq!(
            transcript,
            "\nEnter a PANGO lineage: matched: B.1.617.2\nwholabel: Delta\n\
             \nEnter a PANGO lineage: No matches found\n\
             \nEnter a PANGO lineage: \nTerminating program.\n"
        );
    }

    #[rstest]
    fn test_full_table_session() {
        let table: PrefixMap = [("AY", "Delta")].into_iter().collect();
        let records = vec![LineageRecord::new("AY.4", "B.1.617.2.4", "21J")];
        let full_map = FullMappingBuilder::new(&table).build(&records);

        let (queries, transcript) = session(&full_map, "B.1.617.2.4\r\nAY.4.1\n");

        assert_eq!(queries, 2);
        assert_eq!(
            transcript,
            "\nEnter a PANGO lineage: wholabel: Unknown\nnextclade: 21J\nunaliased: B.1.617.2.4\naliased: AY.4\n\
             \nEnter a PANGO lineage: No matches found\n\
             \nEnter a PANGO lineage: \nTerminating program.\n"
        );
    }

    #[rstest]
    fn test_last_line_without_newline_is_answered() {
        let table: PrefixMap = [("BA", "Omicron")].into_iter().collect();

        let (queries, transcript) = session(&table, "BA.5");

        assert_eq!(queries, 1);
        assert_eq!(transcript.contains("wholabel: Omicron\n"), true);
    }

    #[rstest]
    fn test_empty_input_ends_immediately() {
        let (queries, transcript) = session(&PrefixMap::new(), "");

        assert_eq!(queries, 0);
        assert_eq!(transcript, format!("\n{}\n{}\n", PROMPT, FAREWELL));
    }

    #[rstest]
    fn test_blank_query_is_a_miss() {
        let table: PrefixMap = [("B", "root")].into_iter().collect();
        let (_, transcript) = session(&table, "\n");
        assert_eq!(transcript.contains(NO_MATCH), true);
    }

    #[rstest]
    fn test_interrupt_ends_session_normally() {
        let table: PrefixMap = [("B.1.617.2", "Delta")].into_iter().collect();
        let events = vec![
            ReplEvent::Line("B.1.617.2.1".to_string()),
            ReplEvent::Interrupt,
            ReplEvent::Line("B.1.1.7".to_string()),
        ];

        let mut out = Vec::new();
        let queries = run_repl(&table, events, &mut out).unwrap();

        assert_eq!(queries, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nEnter a PANGO lineage: matched: B.1.617.2\nwholabel: Delta\n\
             \nEnter a PANGO lineage: \nTerminating program.\n"
        );
    }

    #[rstest]
    fn test_read_failure_is_an_error() {
        let events = vec![ReplEvent::Failed(io::Error::other("stdin closed"))];

        let mut out = Vec::new();
        let result = run_repl(&PrefixMap::new(), events, &mut out);

        assert_eq!(result.is_err(), true);
    }

    #[rstest]
    fn test_forward_lines_ends_with_end_of_input() {
        let (sender, receiver) = mpsc::channel();
        forward_lines(Cursor::new("AY.4\r\n"), sender);

        let events: Vec<ReplEvent> = receiver.into_iter().collect();

        assert_eq!(events.len(), 2);
        assert_eq!(matches!(&events[0], ReplEvent::Line(l) if l == "AY.4"), true);
        assert_eq!(matches!(events[1], ReplEvent::EndOfInput), true);
    }
}
