// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Placement of [`Table`]s into worksheet cells.

use crate::{
    error::SheetError,
    escape::Escaping,
    layout::{ResultMarkers, TableLayout},
    localization::Labels,
    model::Table,
    spreadsheet::{next_row, CellRef, Columns, Worksheet},
};

/// Writes a [`Table`] header and rows starting at [`Columns::table`].
#[derive(Clone, Debug)]
pub struct TableFormatter {
    columns: Columns,
    labels: Labels,
    markers: ResultMarkers,
}

impl TableFormatter {
    /// Creates a new [`TableFormatter`] annotating results with localized
    /// [`Labels`].
    #[must_use]
    pub fn new(columns: Columns, labels: Labels) -> Self {
        Self { columns, markers: ResultMarkers::from_labels(&labels), labels }
    }

    /// Returns the [`Columns`] of this [`TableFormatter`].
    #[must_use]
    pub const fn columns(&self) -> Columns {
        self.columns
    }

    /// Returns the [`Labels`] of this [`TableFormatter`].
    #[must_use]
    pub const fn labels(&self) -> Labels {
        self.labels
    }

    /// Writes the given `table` starting at `row`, returning the row right
    /// below its last data row.
    ///
    /// Consumes `1 + table.len()` rows. Blank cells are left unwritten.
    ///
    /// # Errors
    ///
    /// Propagates any [`Worksheet::set_value()`] failure unchanged.
    pub fn format<W: Worksheet + ?Sized>(
        &self,
        sheet: &mut W,
        table: &Table,
        mut row: u32,
    ) -> Result<u32, SheetError> {
        let layout =
            TableLayout::new(Escaping::Verbatim, &self.labels, &self.markers);
        let grid = layout.layout(table, self.columns.include_results);

        for cells in grid.rows() {
            for (column, value) in (self.columns.table..).zip(cells) {
                if !value.is_empty() {
                    sheet.set_value(CellRef::new(row, column), value)?;
                }
            }
            row = next_row(row, self.columns.table)?;
        }
        Ok(row)
    }
}
