// src/domain/extract.rs

use super::property::Scalar;

/// Bedrooms: absent or blank is 0, but a non-empty string with no digits
/// ("Studio") counts as 1. Averages depend on this asymmetry.
pub fn extract_bedroom_count(field: Option<&Scalar>) -> u32 {
    extract_count(field, 1)
}

/// Bathrooms: absent, blank and unparseable are all 0.
pub fn extract_bathroom_count(field: Option<&Scalar>) -> u32 {
    extract_count(field, 0)
}

fn extract_count(field: Option<&Scalar>, unparseable: u32) -> u32 {
    match field {
        None => 0,
        Some(Scalar::Number(n)) if n.is_finite() && *n > 0.0 => n.trunc() as u32,
        Some(Scalar::Number(_)) => 0,
        Some(Scalar::Text(s)) if s.trim().is_empty() => 0,
        // a digit run only fails to parse on overflow
        Some(Scalar::Text(s)) => first_digit_run(s)
            .map(|digits| digits.parse::<u32>().unwrap_or(u32::MAX))
            .unwrap_or(unparseable),
        Some(Scalar::Other(_)) => unparseable,
    }
}

/// Price from a numeric field or a formatted string such as "€350,000".
/// Anything unreadable is 0.
pub fn extract_price(field: Option<&Scalar>) -> f64 {
    match field {
        Some(Scalar::Number(n)) if n.is_finite() => *n,
        Some(Scalar::Text(s)) => {
            let cleaned: String = s.chars().filter(|c| *c != ',').collect();
            first_number_run(&cleaned)
                .and_then(|run| run.parse().ok())
                .unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

fn first_digit_run(s: &str) -> Option<&str> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

fn first_number_run(s: &str) -> Option<&str> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());
    Some(rest[..end].trim_end_matches('.'))
}
