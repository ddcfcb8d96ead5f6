//! Response templates.
//!
//! A template is plain text with positional placeholders: `{0}` receives the
//! first capture group of the matching pattern, `{1}` the second, and so on.
//! `{{` and `}}` produce literal braces; any other brace sequence is kept as
//! literal text. Templates are parsed once, when the rule is built.

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source`. Parsing never fails; malformed placeholders are literal text.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut ahead = chars.clone();
                    let mut digits = String::new();
                    while let Some(d) = ahead.peek().copied().filter(char::is_ascii_digit) {
                        digits.push(d);
                        ahead.next();
                    }

                    let closed = ahead.next() == Some('}');
                    match digits.parse::<usize>() {
                        Ok(index) if closed => {
                            if !literal.is_empty() {
                                segments.push(Segment::Literal(std::mem::take(&mut literal)));
                            }
                            segments.push(Segment::Slot(index));
                            chars = ahead;
                        }
                        _ => literal.push('{'),
                    }
                }
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { source: source.to_string(), segments }
    }

    /// The template exactly as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Placeholder indices, in order of appearance.
    pub fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Slot(i) => Some(*i),
            Segment::Literal(_) => None,
        })
    }

    /// Highest placeholder index, if the template has any.
    pub fn max_slot(&self) -> Option<usize> {
        self.slots().max()
    }

    /// Render with `groups[i]` substituted for `{i}`. Missing or
    /// non-participating groups render as empty text.
    pub fn render<S: AsRef<str>>(&self, groups: &[Option<S>]) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(index) => {
                    if let Some(Some(value)) = groups.get(*index) {
                        out.push_str(value.as_ref());
                    }
                }
            }
        }
        out
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
