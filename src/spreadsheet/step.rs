// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Placement of [`Step`]s into worksheet cells.

use crate::{
    error::SheetError,
    localization::Labels,
    model::Step,
    spreadsheet::{next_row, CellRef, Columns, TableFormatter, Worksheet},
};

/// Writes a [`Step`] as one row: keyword at [`Columns::detail`], text at
/// [`Columns::table`], followed by its arguments.
#[derive(Clone, Debug)]
pub struct StepFormatter {
    tables: TableFormatter,
}

impl StepFormatter {
    /// Creates a new [`StepFormatter`].
    #[must_use]
    pub fn new(columns: Columns, labels: Labels) -> Self {
        Self { tables: TableFormatter::new(columns, labels) }
    }

    /// Writes the given `step` starting at `row`, returning the first row
    /// after it and its arguments.
    ///
    /// # Errors
    ///
    /// Propagates any [`Worksheet::set_value()`] failure unchanged.
    pub fn format<W: Worksheet + ?Sized>(
        &self,
        sheet: &mut W,
        step: &Step,
        mut row: u32,
    ) -> Result<u32, SheetError> {
        let columns = self.tables.columns();

        sheet.set_value(
            CellRef::new(row, columns.detail),
            step.native_keyword.trim_end(),
        )?;
        sheet.set_value(CellRef::new(row, columns.table), &step.name)?;
        row = next_row(row, columns.table)?;

        if let Some(table) = &step.table {
            row = self.tables.format(sheet, table, row)?;
        }
        if let Some(doc) = &step.doc_string {
            sheet.set_value(CellRef::new(row, columns.table), doc)?;
            row = next_row(row, columns.table)?;
        }
        Ok(row)
    }
}
