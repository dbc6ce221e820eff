use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ReplacementTable;

/// Matches a trailing course-code list like "(IN0001)", "(IN1234, MA5678)" or
/// "[WI9012]" and everything after it. Course codes mark the end of the
/// meaningful part of a title.
static RE_COURSE_CODES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" ?[\[(](?:[A-Z]{2,3}\d+[,\s]*)+[)\]].*").unwrap());

/// Matches the "taught in <city>, by <teacher>" tail of language course
/// titles, from the first city marker onward.
static RE_CITY_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(" ?(?:München|Garching|Weihenstephan).+").unwrap());

/// Matches runs of 2+ whitespace characters.
static RE_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s\s+").unwrap());

/// Matches internal-id artifacts the upstream sometimes prefixes titles
/// with, like "0000002467 " in "0000002467 Semantik".
static RE_LEADING_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0\d+ ").unwrap());

/// Matches a language-course level token ("Spanisch B1.2", "Französisch
/// A1/A2") followed by a trailing fragment to discard.
static RE_LANGUAGE_LEVEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"((?:Spanisch|Französisch)\s[ABC][12](?:\.[12]|/[ABC][12])?)\s").unwrap()
});

/// Group/type markers that carry no information once the title is shortened.
const REDUNDANT_TOKENS: [&str; 10] = [
    "Standardgruppe",
    "PR, ",
    "VO, ",
    "FA, ",
    "VI, ",
    "TT, ",
    "UE, ",
    "SE, ",
    "(Limited places) ",
    "(Online)",
];

/// Strip the backslash-escaping the upstream parser adds to text fields.
///
/// `\n`/`\N` become a newline; any other escaped character is kept verbatim
/// with the backslash dropped. Never fails; malformed input passes through.
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(escaped) => out.push(escaped),
            None => out.push('\\'),
        }
    }
    out
}

/// Clean up a raw event title: strip escaping and markup, then abbreviate
/// known course names via the ordered replacement table.
///
/// Applied twice to its own output this is a no-op, provided the table never
/// maps onto one of its own source phrases. May return an empty string when
/// the whole title was markup.
pub fn normalize_summary(summary: &str, replacements: &ReplacementTable) -> String {
    let summary = unescape(summary);
    let summary = RE_COURSE_CODES.replace(&summary, "");
    let summary = RE_CITY_TAIL.replace(&summary, "");
    let mut summary = RE_SPACES.replace_all(&summary, " ").into_owned();

    for replacement in replacements.entries() {
        summary = summary.replace(&replacement.key, &replacement.value);
    }
    for token in REDUNDANT_TOKENS {
        summary = summary.replace(token, "");
    }
    summary = RE_LEADING_ID.replace(&summary, "").into_owned();

    // Language course titles keep a room/teacher fragment even after the
    // city strip; cut right after the level token.
    if let Some(caps) = RE_LANGUAGE_LEVEL.captures(&summary) {
        if let Some(level) = caps.get(1) {
            summary.truncate(level.end());
        }
    }

    summary
}
