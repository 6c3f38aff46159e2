//! Input validation for author and book forms.
//!
//! All validators are pure functions returning `AppResult`; blank input on
//! optional fields yields `Ok(None)` rather than an error.

use chrono::{Datelike, NaiveDate, Utc};

use crate::error::{AppError, AppResult};

/// Books printed before the Gutenberg press are not expected here.
pub const MIN_PUBLICATION_YEAR: i32 = 1450;

/// Strip an ISBN down to its canonical form: decimal digits and `X` only.
pub fn normalize_isbn(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| c.is_ascii_digit() || c.eq_ignore_ascii_case(&'x'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Validate a free-form ISBN. Blank input means "no ISBN"; anything else
/// must normalize to exactly 10 or 13 characters.
pub fn validate_isbn(input: &str) -> AppResult<Option<String>> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    let normalized = normalize_isbn(input);
    if normalized.len() != 10 && normalized.len() != 13 {
        return Err(AppError::Validation(format!(
            "ISBN must have 10 or 13 characters, found {}",
            normalized.len()
        )));
    }

    Ok(Some(normalized))
}

/// Render a normalized ISBN with conventional hyphenation.
/// ISBN-10 groups as 1-3-5-1, ISBN-13 as 3-1-3-5-1; anything else is
/// returned untouched.
pub fn format_isbn(isbn: &str) -> String {
    match isbn.len() {
        13 => format!(
            "{}-{}-{}-{}-{}",
            &isbn[0..3],
            &isbn[3..4],
            &isbn[4..7],
            &isbn[7..12],
            &isbn[12..13]
        ),
        10 => format!(
            "{}-{}-{}-{}",
            &isbn[0..1],
            &isbn[1..4],
            &isbn[4..9],
            &isbn[9..10]
        ),
        _ => isbn.to_string(),
    }
}

/// Parse a date in one of the accepted forms: `YYYY-MM-DD`, `DD.MM.YYYY`,
/// or a bare 4-digit year (taken as January 1). Blank input means "no date".
pub fn validate_date(input: &str) -> AppResult<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if input.len() == 4 && input.chars().all(|c| c.is_ascii_digit()) {
        let year: i32 = input.parse().map_err(|_| invalid_date(input))?;
        let date = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| invalid_date(input))?;
        return Ok(Some(date));
    }

    for fmt in ["%Y-%m-%d", "%d.%m.%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Ok(Some(date));
        }
    }

    Err(invalid_date(input))
}

fn invalid_date(input: &str) -> AppError {
    AppError::Validation(format!(
        "Invalid date format: {}. Please use YYYY-MM-DD, DD.MM.YYYY or YYYY",
        input
    ))
}

/// Validate a publication year. Blank input means "no year"; anything else
/// must be a number in `[1450, current_year + 1]` (the +1 allows books
/// announced for next year).
pub fn validate_year(input: &str) -> AppResult<Option<i32>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let year: i32 = input
        .parse()
        .map_err(|_| AppError::Validation("The year must be a valid number".to_string()))?;

    let max_year = Utc::now().year() + 1;
    if year < MIN_PUBLICATION_YEAR || year > max_year {
        return Err(AppError::Validation(format!(
            "The year must be between {} and {}",
            MIN_PUBLICATION_YEAR, max_year
        )));
    }

    Ok(Some(year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn normalizes_hyphenated_isbn() {
        assert_eq!(normalize_isbn("978-3-16-148410-0"), "9783161484100");
        assert_eq!(normalize_isbn("3 16 148410 x"), "316148410X");
    }

    #[test]
    fn accepts_isbn_10_and_13() {
        assert_eq!(
            validate_isbn("978-3-16-148410-0").unwrap(),
            Some("9783161484100".to_string())
        );
        assert_eq!(
            validate_isbn("3-16-148410-X").unwrap(),
            Some("316148410X".to_string())
        );
    }

    #[test]
    fn blank_isbn_means_none() {
        assert_eq!(validate_isbn("").unwrap(), None);
        assert_eq!(validate_isbn("   ").unwrap(), None);
    }

    #[test]
    fn rejects_isbn_of_wrong_length_citing_length() {
        let msg = validation_message(validate_isbn("123456789").unwrap_err());
        assert!(msg.contains("found 9"), "message was: {}", msg);

        let msg = validation_message(validate_isbn("12345678901234").unwrap_err());
        assert!(msg.contains("found 14"), "message was: {}", msg);
    }

    #[test]
    fn formats_isbn_13_in_grouped_hyphenation() {
        assert_eq!(format_isbn("9783161484100"), "978-3-161-48410-0");
    }

    #[test]
    fn formats_isbn_10_in_grouped_hyphenation() {
        assert_eq!(format_isbn("316148410X"), "3-161-48410-X");
    }

    #[test]
    fn format_leaves_other_lengths_untouched() {
        assert_eq!(format_isbn("12345"), "12345");
    }

    #[test]
    fn accepts_iso_date() {
        let date = validate_date("1989-12-31").unwrap().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1989, 12, 31).unwrap());
    }

    #[test]
    fn accepts_dotted_date() {
        let date = validate_date("31.12.1989").unwrap().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1989, 12, 31).unwrap());
    }

    #[test]
    fn accepts_bare_year_as_january_first() {
        let date = validate_date("1989").unwrap().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1989, 1, 1).unwrap());
    }

    #[test]
    fn blank_date_means_none() {
        assert_eq!(validate_date("").unwrap(), None);
        assert_eq!(validate_date("   ").unwrap(), None);
    }

    #[test]
    fn rejects_slash_separated_date() {
        let msg = validation_message(validate_date("1989/12/31").unwrap_err());
        assert!(msg.contains("1989/12/31"), "message was: {}", msg);
        assert!(msg.contains("YYYY-MM-DD"), "message was: {}", msg);
    }

    #[test]
    fn year_range_boundaries() {
        assert_eq!(validate_year("1450").unwrap(), Some(1450));
        assert!(validate_year("1449").is_err());

        let next_year = Utc::now().year() + 1;
        assert_eq!(
            validate_year(&next_year.to_string()).unwrap(),
            Some(next_year)
        );
        assert!(validate_year(&(next_year + 1).to_string()).is_err());
    }

    #[test]
    fn out_of_range_year_states_the_bounds() {
        let msg = validation_message(validate_year("1449").unwrap_err());
        assert!(msg.contains("between 1450"), "message was: {}", msg);
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let msg = validation_message(validate_year("abc").unwrap_err());
        assert!(msg.contains("valid number"), "message was: {}", msg);
    }

    #[test]
    fn blank_year_means_none() {
        assert_eq!(validate_year("").unwrap(), None);
    }
}
