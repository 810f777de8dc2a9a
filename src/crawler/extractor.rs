//! Contact information extraction
//!
//! Three independent regular expressions are run over the raw page text,
//! markup included. Matches are not HTML-aware and may come from inside tags
//! or attributes.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const PHONE_PATTERN: &str = r"\d\d\d-\d\d\d-\d\d\d\d";

/// "City, State ZIP" shaped text, with anything allowed between comma and ZIP
const ADDRESS_PATTERN: &str = r"\b\w+\s*\w*\s*,\n*\s*\w+.*\s*\w*\s\d{5}\b";

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Kind of contact information a record holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Phone,
    Address,
    Email,
}

impl Category {
    /// All categories in output order
    pub const ALL: [Category; 3] = [Category::Phone, Category::Address, Category::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "PHONE",
            Self::Address => "ADDRESS",
            Self::Email => "EMAIL",
        }
    }

    fn pattern(&self) -> &'static Regex {
        static PHONE: OnceLock<Regex> = OnceLock::new();
        static ADDRESS: OnceLock<Regex> = OnceLock::new();
        static EMAIL: OnceLock<Regex> = OnceLock::new();

        let (cell, source) = match self {
            Self::Phone => (&PHONE, PHONE_PATTERN),
            Self::Address => (&ADDRESS, ADDRESS_PATTERN),
            Self::Email => (&EMAIL, EMAIL_PATTERN),
        };

        // Patterns are literals; a failure to compile is a programming error
        let compile = || Regex::new(source).expect("valid contact pattern");
        cell.get_or_init(compile)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of contact information found on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    /// URL of the page the text was found on
    pub source_url: String,

    /// Which pattern matched
    pub category: Category,

    /// The matched substring, verbatim
    pub text: String,
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug-format the text so embedded newlines stay on one line
        write!(
            f,
            "({}, {}, {:?})",
            self.source_url, self.category, self.text
        )
    }
}

/// Extracts phone numbers, addresses and emails from page text
///
/// Each category is scanned independently over the whole input, so one span
/// may be reported under several categories. Results are grouped PHONE, then
/// ADDRESS, then EMAIL; within a group they keep left-to-right match order.
/// Duplicates are kept.
///
/// # Example
///
/// ```
/// use contact_crawler::crawler::{extract_information, Category};
///
/// let records = extract_information("u", "Call 410-555-0199 or email a.b+c@sub.example.co");
/// assert_eq!(records[0].category, Category::Phone);
/// assert_eq!(records[1].text, "a.b+c@sub.example.co");
/// ```
pub fn extract_information(source_url: &str, text: &str) -> Vec<ContactRecord> {
    Category::ALL
        .into_iter()
        .flat_map(move |category| {
            category
                .pattern()
                .find_iter(text)
                .map(move |m| ContactRecord {
                    source_url: source_url.to_string(),
                    category,
                    text: m.as_str().to_string(),
                })
        })
        .collect()
}
