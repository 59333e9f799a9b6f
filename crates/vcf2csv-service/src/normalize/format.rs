//! Best-effort value formatting. Nothing here fails: unrecognized input is
//! returned unchanged.

use chrono::NaiveDate;
use chrono::format::{Parsed, StrftimeItems};

/// Separator between a value and the person it belongs to, as in `"3/5 - Jane"`.
pub const NAME_SEPARATOR: &str = " - ";

/// Output layout for every recognized date: abbreviated month, unpadded day.
const DATE_OUTPUT: &str = "%b %-d";

/// Stand-in year for month/day dates. A leap year keeps Feb 29 valid.
const YEARLESS: i32 = 2000;

/// Accepted input layouts, tried in order.
const DATE_LAYOUTS: [DateLayout; 3] = [
    DateLayout {
        pattern: "%m/%d",
        has_year: false,
    },
    DateLayout {
        pattern: "%Y-%m-%d",
        has_year: true,
    },
    // %B also accepts the abbreviated month name
    DateLayout {
        pattern: "%B %d, %Y",
        has_year: true,
    },
];

struct DateLayout {
    pattern: &'static str,
    has_year: bool,
}

impl DateLayout {
    fn parse(&self, value: &str) -> Option<NaiveDate> {
        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, value, StrftimeItems::new(self.pattern)).ok()?;
        if !self.has_year {
            parsed.set_year(i64::from(YEARLESS)).ok()?;
        }
        parsed.to_naive_date().ok()
    }
}

/// ## Summary
/// Formats a date as `"Mon D"`, dropping the year.
///
/// Accepts `M/D`, `YYYY-MM-DD` and `Month D, YYYY`. Anything else is returned
/// unchanged.
#[must_use]
pub fn format_date(value: &str) -> String {
    let trimmed = value.trim();
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| layout.parse(trimmed))
        .map_or_else(
            || value.to_string(),
            |date| date.format(DATE_OUTPUT).to_string(),
        )
}

/// ## Summary
/// Formats a North American phone number as `"(AAA) BBB-CCCC"`.
///
/// Only inputs with exactly ten digits are rewritten; everything else is
/// returned unchanged.
#[must_use]
pub fn format_phone(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        value.to_string()
    }
}

/// ## Summary
/// Applies the `"Value - Name"` convention: rewrites it to
/// `"Name: transform(Value)"`.
///
/// Without the separator the whole value goes through `transform` with no
/// name prefix.
#[must_use]
pub fn format_named(value: &str, transform: impl Fn(&str) -> String) -> String {
    match value.split_once(NAME_SEPARATOR) {
        Some((value, name)) => format!("{}: {}", name.trim(), transform(value.trim())),
        None => transform(value),
    }
}

/// Identity transform for values that are only split, never reformatted.
#[must_use]
pub fn verbatim(value: &str) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::month_day("3/5", "Mar 5")]
    #[case::padded_month_day("03/05", "Mar 5")]
    #[case::iso("2024-03-05", "Mar 5")]
    #[case::abbreviated_month("Mar 5, 2024", "Mar 5")]
    #[case::long_month("March 5, 2024", "Mar 5")]
    #[case::apple_no_year("1604-12-25", "Dec 25")]
    #[case::leap_day("2/29", "Feb 29")]
    #[case::surrounding_space(" 2024-03-05 ", "Mar 5")]
    fn formats_known_layouts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_date(input), expected);
    }

    #[rstest]
    #[case::free_text("next tuesday")]
    #[case::empty("")]
    #[case::impossible_day("2/30")]
    #[case::month_out_of_range("13/1")]
    #[case::with_year_slash("3/5/2024")]
    #[case::vcard4_basic("19800305")]
    fn passes_through_unknown_dates(#[case] input: &str) {
        assert_eq!(format_date(input), input);
    }

    #[rstest]
    #[case::formatted("(555) 123-4567", "(555) 123-4567")]
    #[case::bare("5551234567", "(555) 123-4567")]
    #[case::dotted("555.123.4567", "(555) 123-4567")]
    #[case::seven_digits("123-4567", "123-4567")]
    #[case::country_code("+1 555 123 4567", "+1 555 123 4567")]
    #[case::empty("", "")]
    fn formats_phones(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_phone(input), expected);
    }

    #[test]
    fn named_value_is_rewritten() {
        assert_eq!(format_named("3/5 - Jane", format_date), "Jane: Mar 5");
        assert_eq!(
            format_named("5551234567 - Office", format_phone),
            "Office: (555) 123-4567"
        );
    }

    #[test]
    fn unnamed_value_has_no_prefix() {
        assert_eq!(format_named("3/5", format_date), "Mar 5");
        assert_eq!(format_named("jane@example.com", verbatim), "jane@example.com");
    }

    #[test]
    fn only_first_separator_splits() {
        assert_eq!(
            format_named("3/5 - Mary - Kate", format_date),
            "Mary - Kate: Mar 5"
        );
    }

    #[test]
    fn hyphen_without_spaces_is_not_a_separator() {
        assert_eq!(format_named("2024-03-05", format_date), "Mar 5");
    }
}
