//! Interactive read/print loop.
//!
//! The session reads one line at a time, stops on an exit keyword or at end
//! of input, and prints the responder's answer for everything else:
//!
//! ```text
//! AI Chatbot: Hello! I'm a simple chatbot. Type 'bye' to exit.
//! --------------------------------------------------
//! You: tell me about pizza
//! AI Chatbot: I can try to tell you about pizza.
//! --------------------------------------------------
//! You: bye
//! AI Chatbot: See you later!
//! ```
//!
//! Exit keywords are checked on the raw line and never reach the responder.

use crate::{FAREWELLS, Responder, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use std::io::{BufRead, Write};
use tracing::info;

/// Lines that end the session (compared trimmed and lower-cased).
pub const EXIT_KEYWORDS: &[&str] = &["bye", "goodbye", "exit", "quit"];

/// Whether `line` asks to end the session.
pub fn is_exit_keyword(line: &str) -> bool {
    let line = line.trim().to_lowercase();
    EXIT_KEYWORDS.contains(&line.as_str())
}

/// Labels and layout of the session transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Prefix of every bot line.
    pub bot_label: String,
    /// Prompt printed before reading a line.
    pub user_prompt: String,
    /// Width of the `-` separator printed after the banner and each answer.
    pub separator_width: usize,
    /// First bot line of the session.
    pub banner: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            bot_label: "AI Chatbot:".to_string(),
            user_prompt: "You: ".to_string(),
            separator_width: 50,
            banner: "Hello! I'm a simple chatbot. Type 'bye' to exit.".to_string(),
        }
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    ExitKeyword,
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Number of lines answered by the responder.
    pub turns: usize,
    pub end: SessionEnd,
}

pub struct Session<'a> {
    responder: &'a Responder,
    options: SessionOptions,
}

impl<'a> Session<'a> {
    pub fn new(responder: &'a Responder, options: SessionOptions) -> Self {
        Self { responder, options }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Run until an exit keyword or end of input, using the thread-local RNG.
    pub fn run<I: BufRead, O: Write>(&self, input: I, output: O) -> Result<SessionSummary> {
        self.run_with(input, output, &mut rand::thread_rng())
    }

    /// Run until an exit keyword or end of input.
    ///
    /// # Errors
    ///
    /// Fails only when reading `input` or writing `output` fails.
    pub fn run_with<I, O, R>(&self, mut input: I, mut output: O, rng: &mut R) -> Result<SessionSummary>
    where
        I: BufRead,
        O: Write,
        R: Rng + ?Sized,
    {
        let separator = "-".repeat(self.options.separator_width);
        let label = &self.options.bot_label;

        info!("session started");
        writeln!(output, "{label} {}", self.options.banner)?;
        writeln!(output, "{separator}")?;

        let mut turns = 0;
        let mut line = String::new();
        let end = loop {
            write!(output, "{}", self.options.user_prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break SessionEnd::EndOfInput;
            }
            let text = line.trim_end_matches(['\r', '\n']);

            if is_exit_keyword(text) {
                let farewell = FAREWELLS.choose(rng).copied().unwrap_or("Goodbye!");
                writeln!(output, "{label} {farewell}")?;
                break SessionEnd::ExitKeyword;
            }

            let response = self.responder.respond_with(text, rng);
            turns += 1;
            writeln!(output, "{label} {response}")?;
            writeln!(output, "{separator}")?;
        };

        output.flush()?;
        info!(turns, ?end, "session ended");
        Ok(SessionSummary { turns, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FALLBACK_RESPONSE, Normalizer, Rule, RuleTable};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;
    use std::io::Cursor;

    fn run(responder: &Responder, input: &str) -> (SessionSummary, String) {
        let session = Session::new(responder, SessionOptions::default());
        let mut out = Vec::new();
        let summary = session.run_with(Cursor::new(input), &mut out, &mut StepRng::new(0, 0)).expect("in-memory I/O");
        (summary, String::from_utf8(out).expect("utf-8 transcript"))
    }

    #[test]
    fn exit_keywords() {
        for line in ["bye", "quit", "exit", "goodbye", "BYE", "  Quit  ", "Goodbye\r\n"] {
            assert!(is_exit_keyword(line), "'{}' should end the session", line);
        }
        for line in ["bye bye", "byee", "see you", "", "exit now"] {
            assert!(!is_exit_keyword(line), "'{}' should not end the session", line);
        }
    }

    #[test]
    fn transcript_layout() {
        let responder = Responder::default();
        let (summary, transcript) = run(&responder, "tell me about pizza\nbye\n");

        let separator = "-".repeat(50);
        let expected = format!(
            "AI Chatbot: Hello! I'm a simple chatbot. Type 'bye' to exit.\n\
             {separator}\n\
             You: AI Chatbot: I can try to tell you about pizza.\n\
             {separator}\n\
             You: AI Chatbot: Goodbye! Have a great day!\n"
        );
        assert_eq!(transcript, expected);
        assert_eq!(summary, SessionSummary { turns: 1, end: SessionEnd::ExitKeyword });
    }

    #[test]
    fn exit_keyword_skips_the_responder() {
        // A table that would answer "quit" itself if it ever saw it.
        let rules = RuleTable::new(vec![Rule::new("quit", [r"\bquit\b"], ["RESPONDER SAW QUIT"]).unwrap()]).unwrap();
        let responder = Responder::new(Normalizer::default(), rules);

        let (summary, transcript) = run(&responder, "QUIT\n");
        assert!(!transcript.contains("RESPONDER SAW QUIT"));
        assert!(transcript.contains(FAREWELLS[0]));
        assert_eq!(summary.turns, 0);
        assert_eq!(summary.end, SessionEnd::ExitKeyword);

        // Not an exit keyword on its own, so the responder answers.
        let (summary, transcript) = run(&responder, "please quit\n");
        assert!(transcript.contains("RESPONDER SAW QUIT"));
        assert_eq!(summary, SessionSummary { turns: 1, end: SessionEnd::EndOfInput });
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let responder = Responder::default();
        let (summary, transcript) = run(&responder, "xyzzy\n");
        assert!(transcript.contains(FALLBACK_RESPONSE));
        assert!(transcript.ends_with("You: \n"));
        assert_eq!(summary, SessionSummary { turns: 1, end: SessionEnd::EndOfInput });

        let (summary, _) = run(&responder, "");
        assert_eq!(summary, SessionSummary { turns: 0, end: SessionEnd::EndOfInput });
    }

    #[test]
    fn farewell_is_random_but_from_the_list() {
        let responder = Responder::default();
        let session = Session::new(&responder, SessionOptions::default());
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..20 {
            let mut out = Vec::new();
            session.run_with(Cursor::new("exit\n"), &mut out, &mut rng).expect("in-memory I/O");
            let transcript = String::from_utf8(out).expect("utf-8 transcript");
            let last = transcript.lines().last().unwrap_or_default();
            let farewell = last.trim_start_matches("AI Chatbot: ");
            assert!(FAREWELLS.contains(&farewell), "unexpected farewell line '{}'", last);
        }
    }

    #[test]
    fn custom_options() {
        let responder = Responder::default();
        let options = SessionOptions {
            bot_label: "Bot>".to_string(),
            user_prompt: "> ".to_string(),
            separator_width: 3,
            banner: "hi".to_string(),
        };
        let session = Session::new(&responder, options);
        let mut out = Vec::new();
        session.run_with(Cursor::new("bye\n"), &mut out, &mut StepRng::new(0, 0)).expect("in-memory I/O");
        assert_eq!(String::from_utf8(out).expect("utf-8"), "Bot> hi\n---\n> Bot> Goodbye! Have a great day!\n");
    }

    #[test]
    fn run_uses_the_thread_rng() {
        let responder = Responder::default();
        let session = Session::new(&responder, SessionOptions::default());
        assert_eq!(session.options().user_prompt, "You: ");

        let mut out = Vec::new();
        let summary = session.run(Cursor::new("hello\nquit\n"), &mut out).expect("in-memory I/O");
        assert_eq!(summary, SessionSummary { turns: 1, end: SessionEnd::ExitKeyword });

        let transcript = String::from_utf8(out).expect("utf-8 transcript");
        let farewell = transcript.lines().last().unwrap_or_default().trim_start_matches("AI Chatbot: ");
        assert!(FAREWELLS.contains(&farewell), "unexpected farewell '{}'", farewell);
    }
}
