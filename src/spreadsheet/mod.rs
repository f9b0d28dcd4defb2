// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Spreadsheet output.
//!
//! Formatters write cell values into a [`Worksheet`] and thread a row cursor:
//! each `format()` takes the first free row and returns the first free row
//! after everything it has written. Formatters keep no state between calls,
//! so chaining scenarios on one sheet is just feeding the returned cursor
//! back in.
//!
//! ```rust
//! # use cucumber_doc::{
//! #     model::Scenario,
//! #     spreadsheet::{Columns, ScenarioFormatter, Sheet},
//! #     Labels,
//! # };
//! let formatter = ScenarioFormatter::new(Columns::default(), Labels::default());
//! let mut sheet = Sheet::new("Features");
//!
//! let mut row = 1;
//! for name in ["first", "second"] {
//!     let scenario = Scenario { name: name.into(), ..Scenario::default() };
//!     row = formatter.format(&mut sheet, &scenario, row)?;
//! }
//!
//! assert_eq!(sheet.value("B1")?, Some("first"));
//! assert_eq!(sheet.value("B3")?, Some("second"));
//! assert_eq!(row, 5);
//! # Ok::<_, cucumber_doc::Error>(())
//! ```

pub mod feature;
pub mod reference;
pub mod scenario;
pub mod sheet;
pub mod step;
pub mod table;

#[cfg(feature = "serde")]
use serde::Deserialize;
use smart_default::SmartDefault;

use crate::error::SheetError;

#[doc(inline)]
pub use self::{
    feature::FeatureFormatter,
    reference::CellRef,
    scenario::ScenarioFormatter,
    sheet::{Sheet, Worksheet},
    step::StepFormatter,
    table::TableFormatter,
};

/// Column placement of spreadsheet output, as 1-based column indices.
///
/// Defaults keep column `A` for feature names only, so scenarios are indented
/// by one column and their details by two.
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "PascalCase"))]
pub struct Columns {
    /// Feature name (`A`).
    #[default = 1]
    pub feature: u32,

    /// Scenario name and section headings (`B`).
    #[default = 2]
    pub heading: u32,

    /// Descriptions, tags and step keywords (`C`).
    #[default = 3]
    pub detail: u32,

    /// First column of tables and step text (`D`).
    #[default = 4]
    pub table: u32,

    /// Whether tables get a trailing result column.
    pub include_results: bool,
}

/// Moves the row cursor one row down from `row`.
///
/// # Errors
///
/// [`SheetError::OutOfBounds`] for the cell at `column` of `row`, if no row
/// can follow it.
fn next_row(row: u32, column: u32) -> Result<u32, SheetError> {
    row.checked_add(1).ok_or(SheetError::OutOfBounds { row, column })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stops_at_last_representable_row() {
        assert_eq!(next_row(1, 2), Ok(2));
        assert_eq!(
            next_row(u32::MAX, 2),
            Err(SheetError::OutOfBounds { row: u32::MAX, column: 2 }),
        );
    }
}
