//! Placeholder templates for custom messages.
//!
//! A template refers to five context slots followed by the caller's own
//! arguments:
//!
//! | Placeholder | Alias     | Value                                   |
//! |-------------|-----------|-----------------------------------------|
//! | `${0}`      | `${test}` | the check (its key, or its type name)   |
//! | `${1}`      | `${arg}`  | the value under test, bounded           |
//! | `${2}`      | `${type}` | the value's type name                   |
//! | `${3}`      | `${name}` | the value's display name                |
//! | `${4}`      | `${obj}`  | the object operand, or `null`           |
//! | `${5}`, ... |           | caller arguments, in order              |
//!
//! `\$` is a literal `$`. A placeholder that is malformed or points past the
//! last argument is copied into the output unchanged.
//!
//! Passing [`VERBATIM`] as the only argument skips parsing altogether and
//! returns the pattern as is.

use std::fmt::{self, Display, Write as _};

use smallvec::SmallVec;

use super::{ViolationContext, short_type_name};

/// Number of context slots in front of the caller's arguments.
pub const CONTEXT_SLOTS: usize = 5;

/// Argument list that makes a template verbatim: a single NUL character.
pub const VERBATIM: &[&dyn Display] = &[&'\0'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'p> {
    Text(&'p str),
    Slot { index: usize, raw: &'p str },
}

/// Renders `pattern` for a failed check.
pub fn render(pattern: &str, ctx: &ViolationContext<'_>, args: &[&dyn Display]) -> String {
    if is_verbatim(args) {
        return pattern.to_owned();
    }

    let tokens = tokenize(pattern);
    let mut out = String::with_capacity(pattern.len() + 16);
    for token in &tokens {
        match *token {
            Token::Text(text) => out.push_str(text),
            Token::Slot { index, raw } => write_slot(&mut out, index, raw, ctx, args),
        }
    }
    out
}

fn tokenize(pattern: &str) -> SmallVec<[Token<'_>; 8]> {
    let bytes = pattern.as_bytes();
    let mut tokens = SmallVec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'$') => {
                push_text(&mut tokens, &pattern[start..i]);
                tokens.push(Token::Text("$"));
                i += 2;
                start = i;
            }
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                let Some(len) = pattern[i + 2..].find('}') else {
                    break;
                };
                let end = i + 2 + len;
                if let Some(index) = slot_index(&pattern[i + 2..end]) {
                    push_text(&mut tokens, &pattern[start..i]);
                    tokens.push(Token::Slot {
                        index,
                        raw: &pattern[i..=end],
                    });
                    start = end + 1;
                    i = end + 1;
                } else {
                    // Not a slot: only the `${` itself is literal.
                    i += 2;
                }
            }
            _ => i += 1,
        }
    }
    push_text(&mut tokens, &pattern[start..]);
    tokens
}

fn push_text<'p>(tokens: &mut SmallVec<[Token<'p>; 8]>, text: &'p str) {
    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
}

fn slot_index(name: &str) -> Option<usize> {
    match name {
        "test" => Some(0),
        "arg" => Some(1),
        "type" => Some(2),
        "name" => Some(3),
        "obj" => Some(4),
        digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            digits.parse().ok()
        }
        _ => None,
    }
}

fn write_slot(
    out: &mut String,
    index: usize,
    raw: &str,
    ctx: &ViolationContext<'_>,
    args: &[&dyn Display],
) {
    match index {
        0 => match ctx.key() {
            Some(key) => {
                let _ = write!(out, "{key:?}");
            }
            None => out.push_str(&short_type_name(ctx.check_type())),
        },
        1 => out.push_str(&ctx.arg()),
        2 => out.push_str(&short_type_name(ctx.value_type())),
        3 => out.push_str(ctx.name()),
        4 => out.push_str(&ctx.obj()),
        n => match args.get(n - CONTEXT_SLOTS) {
            Some(arg) => {
                let _ = write!(out, "{arg}");
            }
            None => out.push_str(raw),
        },
    }
}

fn is_verbatim(args: &[&dyn Display]) -> bool {
    match args {
        [only] => {
            let mut probe = NulProbe::default();
            write!(probe, "{only}").is_ok() && probe.seen
        }
        _ => false,
    }
}

/// Accepts exactly one NUL character and fails on anything else.
#[derive(Default)]
struct NulProbe {
    seen: bool,
}

impl fmt::Write for NulProbe {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if c != '\0' || self.seen {
                return Err(fmt::Error);
            }
            self.seen = true;
        }
        Ok(())
    }
}
