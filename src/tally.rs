//! Banknote tally: one count per denomination, and the totals derived from it.

use std::fmt;

use crate::error::{AppError, Result};

/// Hong Kong banknote face values accepted by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Denomination {
    Thousand,
    FiveHundred,
    Hundred,
    Fifty,
    Twenty,
    Ten,
}

impl Denomination {
    /// Every denomination, largest first. Display and report order follow this.
    pub const ALL: [Denomination; 6] = [
        Denomination::Thousand,
        Denomination::FiveHundred,
        Denomination::Hundred,
        Denomination::Fifty,
        Denomination::Twenty,
        Denomination::Ten,
    ];

    pub const fn face_value(self) -> u32 {
        match self {
            Denomination::Thousand => 1000,
            Denomination::FiveHundred => 500,
            Denomination::Hundred => 100,
            Denomination::Fifty => 50,
            Denomination::Twenty => 20,
            Denomination::Ten => 10,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Denomination::Thousand => 0,
            Denomination::FiveHundred => 1,
            Denomination::Hundred => 2,
            Denomination::Fifty => 3,
            Denomination::Twenty => 4,
            Denomination::Ten => 5,
        }
    }
}

impl TryFrom<u32> for Denomination {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self> {
        Denomination::ALL
            .into_iter()
            .find(|d| d.face_value() == value)
            .ok_or(AppError::UnknownDenomination(value))
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.face_value())
    }
}

/// One row of the deposit report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    pub denomination: Denomination,
    pub count: u32,
    pub line_total: u64,
}

/// What the report screen shows in its table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBody {
    /// No notes entered; rendered as a placeholder row instead of a table.
    Empty,
    Lines(Vec<LineItem>),
}

/// Note counts keyed by denomination.
///
/// Storage is a fixed array indexed by [`Denomination`], so every
/// denomination always has exactly one count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u32; 6],
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, denomination: Denomination) -> u32 {
        self.counts[denomination.slot()]
    }

    pub fn set(&mut self, denomination: Denomination, count: u32) {
        self.counts[denomination.slot()] = count;
    }

    /// Stores whatever the user typed. Anything unparseable or negative becomes 0.
    pub fn set_count(&mut self, denomination: Denomination, raw: &str) {
        self.set(denomination, parse_count(raw));
    }

    pub fn line_total(&self, denomination: Denomination) -> u64 {
        u64::from(denomination.face_value()) * u64::from(self.count(denomination))
    }

    pub fn total(&self) -> u64 {
        Denomination::ALL
            .into_iter()
            .map(|d| self.line_total(d))
            .sum()
    }

    pub fn non_zero_entries(&self) -> Vec<LineItem> {
        Denomination::ALL
            .into_iter()
            .filter(|d| self.count(*d) > 0)
            .map(|d| LineItem {
                denomination: d,
                count: self.count(d),
                line_total: self.line_total(d),
            })
            .collect()
    }

    pub fn report(&self) -> ReportBody {
        let entries = self.non_zero_entries();
        if entries.is_empty() {
            ReportBody::Empty
        } else {
            ReportBody::Lines(entries)
        }
    }

    /// Text for the denomination's input box. Zero shows as blank so the placeholder is visible.
    pub fn input_value(&self, denomination: Denomination) -> String {
        match self.count(denomination) {
            0 => String::new(),
            n => n.to_string(),
        }
    }
}

/// Reads a leading base-10 integer the way a browser's `parseInt` does.
///
/// Leading whitespace and a single sign are accepted, digits are read until the
/// first non-digit, and the rest is ignored. No digits at all yields 0, negative
/// numbers clamp to 0, and values past `u32::MAX` saturate.
pub fn parse_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .map(|b| u32::from(b - b'0'));

    let mut seen_digit = false;
    let mut value: u32 = 0;
    for digit in digits {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if !seen_digit || negative {
        return 0;
    }
    value
}
