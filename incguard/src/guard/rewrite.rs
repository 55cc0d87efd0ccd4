//! Guard pair detection and substitution.
//!
//! A guard pair is `#ifndef`, one whitespace character, a name, a newline,
//! then `#define`, one whitespace character, the *same* name and a newline.
//! The name is a possibly empty run of word characters or backslashes. The
//! pair may start anywhere in the text, not only at the beginning of a line.
//!
//! Matching is an explicit scan: the first name is captured and the second
//! line must repeat it verbatim, so `#ifndef A` / `#define B` is never a
//! guard.

use std::fmt;
use std::ops::Range;

const IFNDEF: &str = "#ifndef";
const DEFINE: &str = "#define";

/// A guard pair found in header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardMatch<'a> {
    start: usize,
    end: usize,
    name: &'a str,
}

impl<'a> GuardMatch<'a> {
    /// The guard name shared by both directives.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Byte range of the two lines, including the trailing newline.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// What a rewrite does (or would do) to one header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardStatus {
    /// The first guard pair is already the canonical one.
    Canonical,
    /// The first guard pair is replaced; `previous` is its old name.
    Rewritten {
        /// Name carried by the replaced pair.
        previous: String,
    },
    /// No guard pair was found; the content is left alone.
    Missing,
}

impl GuardStatus {
    /// Returns true when the header content changes.
    #[must_use]
    pub fn changes_content(&self) -> bool {
        matches!(self, Self::Rewritten { .. })
    }

    /// Short lowercase label used in listings.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Canonical => "ok",
            Self::Rewritten { .. } => "stale",
            Self::Missing => "missing",
        }
    }
}

impl fmt::Display for GuardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical => write!(f, "canonical"),
            Self::Rewritten { previous } if previous.is_empty() => {
                write!(f, "rewritten (was empty)")
            }
            Self::Rewritten { previous } => write!(f, "rewritten (was {previous})"),
            Self::Missing => write!(f, "no guard"),
        }
    }
}

/// Builds the canonical two-line guard header for `identifier`.
///
/// # Examples
///
/// ```
/// use incguard::guard::canonical_header;
///
/// assert_eq!(canonical_header("FOO_HPP"), "#ifndef FOO_HPP\n#define FOO_HPP\n");
/// ```
#[must_use]
pub fn canonical_header(identifier: &str) -> String {
    format!("{IFNDEF} {identifier}\n{DEFINE} {identifier}\n")
}

/// Finds the first guard pair in `content`.
///
/// # Examples
///
/// ```
/// use incguard::guard::find_guard;
///
/// let text = "// header\n#ifndef OLD\n#define OLD\n#endif\n";
/// let found = find_guard(text).unwrap();
/// assert_eq!(found.name(), "OLD");
/// assert_eq!(&text[found.span()], "#ifndef OLD\n#define OLD\n");
///
/// assert!(find_guard("#ifndef A\n#define B\n").is_none());
/// ```
#[must_use]
pub fn find_guard(content: &str) -> Option<GuardMatch<'_>> {
    content
        .match_indices(IFNDEF)
        .find_map(|(start, _)| match_at(content, start))
}

/// Replaces the first guard pair in `content` with the canonical pair for
/// `identifier`. Content without a guard pair is returned unchanged.
///
/// # Examples
///
/// ```
/// use incguard::guard::rewrite_guard;
///
/// let text = "#ifndef OLD\n#define OLD\n#endif\n";
/// assert_eq!(rewrite_guard(text, "NEW"), "#ifndef NEW\n#define NEW\n#endif\n");
/// assert_eq!(rewrite_guard("#pragma once\n", "NEW"), "#pragma once\n");
/// ```
#[must_use]
pub fn rewrite_guard(content: &str, identifier: &str) -> String {
    match first_pair(content, identifier) {
        FirstPair::Stale(found) => {
            let span = found.span();
            let header = canonical_header(identifier);
            let mut out = String::with_capacity(content.len() - span.len() + header.len());
            out.push_str(&content[..span.start]);
            out.push_str(&header);
            out.push_str(&content[span.end..]);
            out
        }
        FirstPair::Canonical | FirstPair::Absent => content.to_string(),
    }
}

/// Reports what [`rewrite_guard`] would do to `content` without building the
/// new text.
///
/// A canonical header at or before the first guard pair makes the content
/// `Canonical`, even when `identifier` is not a valid guard name.
///
/// A pair whose name already equals `identifier` but is separated by a tab
/// (or any whitespace other than a single space) is still `Rewritten`, since
/// the rewrite normalizes it.
#[must_use]
pub fn classify(content: &str, identifier: &str) -> GuardStatus {
    match first_pair(content, identifier) {
        FirstPair::Canonical => GuardStatus::Canonical,
        FirstPair::Stale(found) => GuardStatus::Rewritten {
            previous: found.name().to_string(),
        },
        FirstPair::Absent => GuardStatus::Missing,
    }
}

/// The first guard pair of a header, relative to one identifier.
enum FirstPair<'a> {
    Canonical,
    Stale(GuardMatch<'a>),
    Absent,
}

/// An identifier derived from a path may hold characters that are not name
/// characters (`-`, spaces), so its canonical header is not always a match
/// for [`find_guard`]. It still counts as the first pair when it occurs no
/// later than the first matchable one.
fn first_pair<'a>(content: &'a str, identifier: &str) -> FirstPair<'a> {
    let canonical_at = content.find(&canonical_header(identifier));
    match find_guard(content) {
        Some(found) if canonical_at.is_some_and(|pos| pos <= found.span().start) => {
            FirstPair::Canonical
        }
        Some(found) => FirstPair::Stale(found),
        None if canonical_at.is_some() => FirstPair::Canonical,
        None => FirstPair::Absent,
    }
}

fn match_at(content: &str, start: usize) -> Option<GuardMatch<'_>> {
    let rest = skip_whitespace_char(&content[start + IFNDEF.len()..])?;
    let name_len = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
    let (name, rest) = rest.split_at(name_len);

    let rest = rest.strip_prefix('\n')?.strip_prefix(DEFINE)?;
    let rest = skip_whitespace_char(rest)?
        .strip_prefix(name)?
        .strip_prefix('\n')?;

    Some(GuardMatch {
        start,
        end: content.len() - rest.len(),
        name,
    })
}

fn skip_whitespace_char(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    chars.next().filter(|c| c.is_whitespace())?;
    Some(chars.as_str())
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\\'
}
