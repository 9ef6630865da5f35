// src/process/name.rs
use crate::error::FormatError;

/// Tokenized owner name.
///
/// Both the normalizer and the email synthesizer go through this one
/// representation, so the trailing-period convention for initials lives in a
/// single place: [`NameParts::display_name`] adds the period, and
/// [`NameParts::from_display`] strips it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    /// First and middle tokens, title-cased, without initial periods.
    pub given: Vec<String>,
    /// Last name, title-cased.
    pub last: String,
}

impl NameParts {
    /// Parse the export's `"Last, First Middle"` form. Splits on the first
    /// comma only, so `"Public, John Q"` and `"St. James, Mary"` both work.
    pub fn from_listed(raw: &str) -> Result<Self, FormatError> {
        let (last, given) = raw
            .split_once(',')
            .ok_or_else(|| FormatError::NoComma(raw.to_string()))?;
        Ok(Self {
            given: given.split_whitespace().map(title_case).collect(),
            last: title_case(last.trim()),
        })
    }

    /// Parse an already-normalized `"First M. Last"` form back into parts.
    /// The last whitespace token is the last name; any trailing periods on
    /// given tokens are dropped.
    pub fn from_display(name: &str) -> Result<Self, FormatError> {
        let mut tokens: Vec<&str> = name.split_whitespace().collect();
        let last = tokens.pop().ok_or(FormatError::EmptyName)?;
        Ok(Self {
            given: tokens
                .iter()
                .map(|t| t.trim_end_matches('.').to_string())
                .collect(),
            last: last.to_string(),
        })
    }

    /// Render `"First M. Last"`: single-letter given tokens are initials and
    /// get a trailing period.
    pub fn display_name(&self) -> String {
        let mut tokens: Vec<String> = self
            .given
            .iter()
            .map(|t| {
                if t.chars().count() == 1 {
                    format!("{t}.")
                } else {
                    t.clone()
                }
            })
            .collect();
        tokens.push(self.last.clone());
        tokens.join(" ")
    }
}

/// Normalize a listed name to display form: `"Doe, John Q"` → `"John Q. Doe"`.
pub fn normalize_name(raw: &str) -> Result<String, FormatError> {
    Ok(NameParts::from_listed(raw)?.display_name())
}

/// Upper-case the first letter of each alphanumeric run, lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if c.is_alphanumeric() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_simple_name() {
        assert_eq!(normalize_name("doe, john").unwrap(), "John Doe");
    }

    #[test]
    fn single_letter_tokens_become_initials() {
        assert_eq!(normalize_name("Smith, J").unwrap(), "J. Smith");
        assert_eq!(normalize_name("Roe, Jane A").unwrap(), "Jane A. Roe");
    }

    #[test]
    fn splits_on_first_comma_only() {
        // Second comma stays inside the given-name part.
        assert_eq!(normalize_name("Public, John, Q").unwrap(), "John, Q. Public");
    }

    #[test]
    fn output_never_contains_the_separator_comma() {
        for raw in ["doe, john", "SMITH, JANE A", "o'brien, pat"] {
            let normalized = normalize_name(raw).unwrap();
            let parts = NameParts::from_listed(raw).unwrap();
            assert!(!parts.last.contains(','));
            assert!(normalized.starts_with(char::is_uppercase), "{normalized}");
        }
    }

    #[test]
    fn title_cases_punctuated_names() {
        assert_eq!(normalize_name("o'brien, pat").unwrap(), "Pat O'Brien");
    }

    #[test]
    fn missing_comma_is_a_format_error() {
        let err = normalize_name("John Doe").unwrap_err();
        assert!(matches!(err, FormatError::NoComma(ref v) if v == "John Doe"));
    }

    #[test]
    fn display_round_trips_through_parts() {
        let parts = NameParts::from_listed("Public, John Q").unwrap();
        let display = parts.display_name();
        assert_eq!(display, "John Q. Public");
        assert_eq!(NameParts::from_display(&display).unwrap(), parts);
    }

    #[test]
    fn empty_display_name_is_a_format_error() {
        assert!(matches!(
            NameParts::from_display("   ").unwrap_err(),
            FormatError::EmptyName
        ));
    }
}
