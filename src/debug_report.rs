use palaver::{Reply, Responder};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print how `reply` was produced: normalization, the matching rule and timing.
pub fn print_reply(responder: &Responder, reply: &Reply, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Input: \"{}\"", reply.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Normalization ━━━", ansi::GRAY));
    if reply.normalized.is_empty() {
        println!("  {}", palette.dim("(nothing left after stop-word removal)"));
    } else {
        let tokens: Vec<String> =
            reply.normalized.split(' ').map(|t| palette.paint(format!("[{t}]"), ansi::YELLOW)).collect();
        println!("  {}", tokens.join(" "));
    }

    println!("\n{}", palette.paint("━━━ Match ━━━", ansi::GRAY));
    match &reply.matched {
        Some(m) => {
            println!(
                "  {} {} {} {}",
                palette.paint(format!("[{}]", m.rule_index), ansi::GRAY),
                palette.bold(palette.paint(&m.rule, ansi::GREEN)),
                palette.dim("│ pattern:"),
                palette.paint(format!("#{} {}", m.pattern_index, m.pattern), ansi::BLUE),
            );
            for (idx, capture) in m.captures.iter().enumerate() {
                println!("      {} {}", palette.dim(format!("{{{idx}}} =")), palette.paint(format!("\"{capture}\""), ansi::YELLOW));
            }
        }
        None => {
            println!("  {}", palette.dim(format!("No rule matched ({} rules scanned)", responder.rules().len())));
            println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
            println!("  • The words that mattered are stop words (how, what, you, ...)");
            println!("  • No pattern covers this vocabulary");
            println!("\n{}", palette.dim("  Tip: RUST_LOG=palaver=trace shows the normalization steps"));
        }
    }

    println!("\n{}", palette.paint("━━━ Response ━━━", ansi::GRAY));
    println!("  {}", palette.bold(&reply.response));

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", reply.elapsed), ansi::GREEN));
    println!();
}
