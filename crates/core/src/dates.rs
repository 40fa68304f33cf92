//! Date conversion between the loose input formats accepted by the survey
//! frontend and the canonical ISO storage form.
//!
//! Accepted inputs are `DD/MM/YYYY`, the 8-digit compact `DDMMYYYY`, or an
//! already-ISO `YYYY-MM-DD` string. Storage is always `YYYY-MM-DD`; display
//! is always `DD/MM/YYYY`. Numeric ranges are deliberately not checked here:
//! a malformed value flows through unchanged and is rejected by the DATE
//! column on insert.

use chrono::NaiveDate;

/// Normalize a loosely formatted date to the ISO storage form.
///
/// Empty or absent input maps to `None` (not provided).
pub fn to_iso(input: Option<&str>) -> Option<String> {
    let input = input?.trim();
    if input.is_empty() {
        return None;
    }

    if input.contains('/') {
        let mut parts = input.splitn(3, '/');
        if let (Some(dia), Some(mes), Some(ano)) = (parts.next(), parts.next(), parts.next()) {
            return Some(format!("{ano}-{mes}-{dia}"));
        }
    }

    if input.len() == 8 && input.chars().all(|c| c.is_ascii_digit()) {
        let (dia, rest) = input.split_at(2);
        let (mes, ano) = rest.split_at(2);
        return Some(format!("{ano}-{mes}-{dia}"));
    }

    // Assumed already ISO.
    Some(input.to_string())
}

/// Format an ISO date for display as `DD/MM/YYYY`.
///
/// Empty or absent input maps to `None`. A string that does not parse as a
/// calendar date is returned unchanged rather than dropped, so the caller
/// still sees whatever was stored.
pub fn to_br(iso: Option<&str>) -> Option<String> {
    let iso = iso?.trim();
    if iso.is_empty() {
        return None;
    }

    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(d) => Some(d.format("%d/%m/%Y").to_string()),
        Err(_) => Some(iso.to_string()),
    }
}
