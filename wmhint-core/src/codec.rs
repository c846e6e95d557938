//! Decoding of the directives trusted clients embed in their window titles.
//!
//! A directive starts at the `@!` marker. Up to the next `;` comes an optional `x,y`
//! coordinate pair, and every letter after the marker is a flag:
//!
//! | letter | meaning                          |
//! |--------|----------------------------------|
//! | `B`    | keep at the bottom of the stack  |
//! | `T`    | keep above other windows         |
//! | `D`    | show on all workspaces           |
//! | `H`    | hide from the window list        |
//! | `F`    | snap back to `x,y` when moved    |
//!
//! `B` and `T` exclude each other; the last one wins. Decoding is total: bad coordinates or
//! unknown letters never keep the rest of the directive from being read.
use crate::models::{Directive, Pin, Position};

pub const MARKER: &str = "@!";

/// Titles ending in two spaces stand for this directive.
const DOUBLE_SPACE_DIRECTIVE: &str = "@!HTD";
/// Titles ending in a single space stand for this directive.
const SINGLE_SPACE_DIRECTIVE: &str = "@!H";

/// Decode a title, honoring the trailing-whitespace markers.
#[must_use]
pub fn decode(title: Option<&str>) -> Directive {
    decode_with(title, true)
}

/// Decode a title. With `whitespace_markers` set, a title ending in spaces is read as one of
/// the fixed directives some toolkits fall back to because they cannot put `@!` in a title.
#[must_use]
pub fn decode_with(title: Option<&str>, whitespace_markers: bool) -> Directive {
    let Some(mut title) = title else {
        return Directive::default();
    };
    if whitespace_markers {
        title = expand_whitespace_marker(title);
    }
    let Some(start) = title.find(MARKER) else {
        return Directive::default();
    };
    let body = &title[start + MARKER.len()..];

    let mut directive = Directive {
        position: parse_position(body),
        ..Directive::default()
    };
    for letter in body.trim().chars().map(|c| c.to_ascii_uppercase()) {
        match letter {
            'B' => directive.pin = Pin::Bottom,
            'T' => directive.pin = Pin::Top,
            'D' => directive.all_workspaces = true,
            'H' => directive.skip_window_list = true,
            'F' => directive.fixed = true,
            _ => {}
        }
    }
    directive
}

fn expand_whitespace_marker(title: &str) -> &str {
    if title.ends_with("  ") {
        DOUBLE_SPACE_DIRECTIVE
    } else if title.ends_with(' ') {
        SINGLE_SPACE_DIRECTIVE
    } else {
        title
    }
}

fn parse_position(body: &str) -> Option<Position> {
    let field = body.split(';').next().unwrap_or_default().trim();
    let mut coords = field.split(',');
    let x = coords.next().and_then(parse_leading_int)?;
    let y = coords.next().and_then(parse_leading_int)?;
    Some(Position::new(x, y))
}

/// Read the integer a token starts with, ignoring whatever follows it: `"5TBH"` is 5.
fn parse_leading_int(token: &str) -> Option<i32> {
    let token = token.trim_start();
    let unsigned = token.strip_prefix(&['-', '+'][..]).unwrap_or(token);
    let digits = unsigned.len()
        - unsigned
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .len();
    if digits == 0 {
        return None;
    }
    let sign = token.len() - unsigned.len();
    token[..sign + digits].parse().ok()
}
