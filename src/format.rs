//! Display-name formatting for people.
//!
//! A label reads `"<last><suffix>, <first> (<title>)"`. Honorifics that leak
//! into the free-text `name` field are never used as name parts; callers are
//! expected to carry them in `title` instead.

/// Tokens that are dropped when they appear as the first or last name token.
pub const HONORIFICS: [&str; 11] = [
    "Mr.", "Mrs.", "Ms.", "Miss", "Dr.", "Dr", "Prof.", "Professor", "Sir", "Madam", "Mx.",
];

/// Label used when no usable name token remains.
pub const UNKNOWN_NAME: &str = "Unknown Name";

/// Anything that can be labelled: a full name plus optional suffix and title.
pub trait Named {
    fn name(&self) -> &str;
    fn suffix(&self) -> Option<&str> {
        None
    }
    fn title(&self) -> Option<&str> {
        None
    }
}

pub fn is_honorific(token: &str) -> bool {
    HONORIFICS.contains(&token)
}

/// Format a display label. Never panics; unusable names fall back to
/// [`UNKNOWN_NAME`] while keeping the title.
pub fn format_label<N: Named + ?Sized>(person: &N) -> String {
    let parts: Vec<&str> = person.name().split_whitespace().collect();
    let mut tokens = parts.as_slice();
    // Honorifics at either end give up their slot to the neighbouring token.
    while let Some((head, rest)) = tokens.split_first()
        && is_honorific(head)
    {
        tokens = rest;
    }
    while let Some((tail, rest)) = tokens.split_last()
        && is_honorific(tail)
    {
        tokens = rest;
    }

    let suffix_part = non_empty(person.suffix())
        .map(|s| format!(" {s}"))
        .unwrap_or_default();
    let title_part = non_empty(person.title())
        .map(|t| format!(" ({t})"))
        .unwrap_or_default();

    match tokens {
        [] => format!("{UNKNOWN_NAME}{title_part}"),
        // A lone token is rendered once rather than as both first and last name.
        [only] => format!("{only}{suffix_part}{title_part}"),
        [first, .., last] => format!("{last}{suffix_part}, {first}{title_part}"),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
