// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `A1`-style cell addressing.

use std::{fmt, str::FromStr};

use lazy_regex::regex_captures;

use crate::error::SheetError;

/// Maximum number of rows of a worksheet.
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns of a worksheet (`XFD`).
pub const MAX_COLUMNS: u32 = 16_384;

/// 1-based coordinate of a worksheet cell.
///
/// Ordered row-major, so iterating a sorted collection of [`CellRef`]s walks a
/// sheet line by line.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CellRef {
    /// 1-based row.
    pub row: u32,

    /// 1-based column.
    pub column: u32,
}

impl CellRef {
    /// Creates a new [`CellRef`] without checking its bounds.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Checks whether this [`CellRef`] lies within worksheet bounds.
    ///
    /// # Errors
    ///
    /// With [`SheetError::OutOfBounds`] if it doesn't.
    pub const fn check(self) -> Result<Self, SheetError> {
        if self.row == 0
            || self.row > MAX_ROWS
            || self.column == 0
            || self.column > MAX_COLUMNS
        {
            return Err(SheetError::OutOfBounds {
                row: self.row,
                column: self.column,
            });
        }
        Ok(self)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_name(self.column), self.row)
    }
}

impl FromStr for CellRef {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SheetError::InvalidReference { reference: s.into() };

        let (_, letters, digits) =
            regex_captures!(r"^([A-Za-z]{1,3})([0-9]{1,7})$", s)
                .ok_or_else(invalid)?;
        let column = column_index(letters).ok_or_else(invalid)?;
        let row = digits.parse().map_err(|_| invalid())?;

        Self::new(row, column).check()
    }
}

/// Converts a 1-based column `index` into its letters (`1` is `A`, `27` is
/// `AA`).
///
/// Returns an empty [`String`] for `0`.
#[must_use]
pub fn column_name(mut index: u32) -> String {
    let mut letters = Vec::new();
    while index > 0 {
        let rem = (index - 1) % 26;
        letters.extend(char::from_u32(u32::from('A') + rem));
        index = (index - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Converts column `letters` (case-insensitive) into a 1-based column index.
#[must_use]
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    letters.bytes().try_fold(0_u32, |acc, b| {
        let digit = match b {
            b'A'..=b'Z' => b - b'A' + 1,
            b'a'..=b'z' => b - b'a' + 1,
            _ => return None,
        };
        acc.checked_mul(26)?.checked_add(u32::from(digit))
    })
}
