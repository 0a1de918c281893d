//! Bounded, type-aware stringification of checked values.
//!
//! Values are rendered through their `Debug` output, streamed into a writer
//! that keeps at most [`MAX_WIDTH`] characters. Scalars stop formatting as
//! soon as the budget is spent. Sequences, sets and maps are recognised by
//! their opening bracket and keep streaming (without storing the tail) so
//! their element count can be reported:
//!
//! ```text
//! -5                          i32
//! "hello"                     &str
//! Vec[3] of [1, 2, 3]         Vec<i32>
//! i32[4] of [1, 2, 3, 4]      [i32; 4]
//! HashMap[1] of {"a": 1}      HashMap<&str, i32>
//! ```

use std::fmt::{self, Debug, Write as _};

/// Characters of a value's rendering kept in a message.
pub const MAX_WIDTH: usize = 60;

/// Appended when a rendering was cut at [`MAX_WIDTH`].
pub const ELLIPSIS: &str = "...";

/// Renders `value` for a message. `type_name` is the full type name of the
/// value, as given by [`std::any::type_name`].
pub fn stringify(value: &dyn Debug, type_name: &str) -> String {
    let mut sink = Sink::default();
    // An error here only means the sink stopped early.
    let _ = write!(sink, "{value:?}");

    let mut sample = sink.kept;
    if sink.truncated {
        sample.push_str(ELLIPSIS);
    }
    match sink.scan {
        Some(scan) => format!("{}[{}] of {sample}", collection_label(type_name), scan.count()),
        None => sample,
    }
}

/// Strips module paths from every path in a type name.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut ident_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(ident_start);
        } else {
            out.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                ident_start = out.len();
            }
        }
    }
    out
}

/// The name used in front of a collection's size: the bare container name,
/// or the element type for arrays and slices.
///
/// Owning pointers are looked through: `Box<[u8]>` is labelled `u8`.
fn collection_label(type_name: &str) -> String {
    let mut name = strip_refs(type_name);
    while let Some(inner) = pointee(name) {
        name = strip_refs(inner);
    }
    if let Some(inner) = name.strip_prefix('[') {
        let element = match inner.rfind(';') {
            Some(semi) => &inner[..semi],
            None => inner.strip_suffix(']').unwrap_or(inner),
        };
        return short_type_name(element.trim());
    }
    let base = name.split('<').next().unwrap_or(name);
    short_type_name(base)
}

const POINTERS: &[&str] = &["Box", "Rc", "Arc", "Cow"];

fn strip_refs(mut name: &str) -> &str {
    loop {
        let next = name.trim_start_matches('&');
        let next = next.strip_prefix("mut ").unwrap_or(next);
        if next.len() == name.len() {
            return name;
        }
        name = next;
    }
}

/// The type argument of an owning pointer type, if `name` is one.
fn pointee(name: &str) -> Option<&str> {
    let open = name.find('<')?;
    let inner = name[open + 1..].strip_suffix('>')?;
    POINTERS
        .contains(&short_type_name(&name[..open]).as_str())
        .then_some(inner)
}

// ============================================================================
// SINK
// ============================================================================

#[derive(Default)]
struct Sink {
    kept: String,
    width: usize,
    truncated: bool,
    started: bool,
    scan: Option<Scan>,
}

impl fmt::Write for Sink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if !self.started {
                self.started = true;
                if c == '[' || c == '{' {
                    self.scan = Some(Scan::default());
                }
            }
            if let Some(scan) = &mut self.scan {
                scan.feed(c);
            }
            if self.width < MAX_WIDTH {
                self.kept.push(c);
                self.width += 1;
            } else {
                self.truncated = true;
                let open = self.scan.as_ref().is_some_and(|scan| !scan.closed);
                if !open {
                    return Err(fmt::Error);
                }
            }
        }
        Ok(())
    }
}

/// Tracks nesting and quoting of a `Debug` collection rendering to count
/// its top-level elements.
#[derive(Default)]
struct Scan {
    depth: usize,
    quote: Option<char>,
    escaped: bool,
    separators: usize,
    content: bool,
    closed: bool,
}

impl Scan {
    fn feed(&mut self, c: char) {
        if self.closed {
            return;
        }
        if let Some(quote) = self.quote {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == quote {
                self.quote = None;
            }
            return;
        }
        match c {
            '"' | '\'' => {
                self.quote = Some(c);
                self.content = true;
            }
            '[' | '{' | '(' => {
                if self.depth > 0 {
                    self.content = true;
                }
                self.depth += 1;
            }
            ']' | '}' | ')' => {
                self.depth = self.depth.saturating_sub(1);
                if self.depth == 0 {
                    self.closed = true;
                }
            }
            ',' if self.depth == 1 => self.separators += 1,
            c if !c.is_whitespace() => self.content = true,
            _ => {}
        }
    }

    fn count(&self) -> usize {
        if self.content { self.separators + 1 } else { 0 }
    }
}
