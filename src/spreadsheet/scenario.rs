// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Placement of [`Scenario`]s into worksheet cells.

use itertools::Itertools as _;

use crate::{
    error::SheetError,
    localization::{Label, Labels},
    model::{Example, Scenario},
    spreadsheet::{
        next_row, CellRef, Columns, StepFormatter, TableFormatter, Worksheet,
    },
};

/// Writes a [`Scenario`] region of a worksheet.
///
/// With default [`Columns`], a scenario starting at row `r` lays out as:
///
/// | Row | Cells |
/// |---|---|
/// | `r` | `B` name |
/// | next, if tagged | `B` "Tags:", `C` tags joined by `", "` |
/// | next, if described | `C` description |
/// | one per step | `C` keyword, `D` text, then step arguments |
/// | next | blank |
/// | per example | `B` localized "Examples", `C` example name |
/// | next, if the example is described | `C` example description |
/// | then | the example table at `D` |
#[derive(Clone, Debug)]
pub struct ScenarioFormatter {
    columns: Columns,
    labels: Labels,
    steps: StepFormatter,
    tables: TableFormatter,
}

impl ScenarioFormatter {
    /// Creates a new [`ScenarioFormatter`] using the given resolved `labels`.
    #[must_use]
    pub fn new(columns: Columns, labels: Labels) -> Self {
        Self {
            columns,
            labels,
            steps: StepFormatter::new(columns, labels),
            tables: TableFormatter::new(columns, labels),
        }
    }

    /// Writes the given `scenario` starting at `row`, returning the first row
    /// left unused.
    ///
    /// # Errors
    ///
    /// Propagates any [`Worksheet::set_value()`] failure unchanged.
    pub fn format<W: Worksheet + ?Sized>(
        &self,
        sheet: &mut W,
        scenario: &Scenario,
        mut row: u32,
    ) -> Result<u32, SheetError> {
        let start = row;
        let Columns { heading, detail, .. } = self.columns;

        sheet.set_value(CellRef::new(row, heading), &scenario.name)?;
        row = next_row(row, heading)?;

        if !scenario.tags.is_empty() {
            let caption = format!("{}:", self.labels.get(Label::Tags));
            sheet.set_value(CellRef::new(row, heading), &caption)?;
            sheet.set_value(
                CellRef::new(row, detail),
                &scenario.tags.iter().join(", "),
            )?;
            row = next_row(row, detail)?;
        }

        if !scenario.description.is_empty() {
            sheet.set_value(CellRef::new(row, detail), &scenario.description)?;
            row = next_row(row, detail)?;
        }

        for step in &scenario.steps {
            row = self.steps.format(sheet, step, row)?;
        }

        // Blank row separating the header block from the examples.
        row = next_row(row, heading)?;

        for example in &scenario.examples {
            row = self.format_example(sheet, example, row)?;
        }

        tracing::trace!(
            scenario = %scenario.name,
            start,
            next = row,
            "scenario written to worksheet",
        );
        Ok(row)
    }

    /// Writes the heading row of the given `example`, its description if any,
    /// followed by its table.
    fn format_example<W: Worksheet + ?Sized>(
        &self,
        sheet: &mut W,
        example: &Example,
        mut row: u32,
    ) -> Result<u32, SheetError> {
        let Columns { heading, detail, .. } = self.columns;

        sheet.set_value(
            CellRef::new(row, heading),
            self.labels.get(Label::Examples),
        )?;
        if !example.name.is_empty() {
            sheet.set_value(CellRef::new(row, detail), &example.name)?;
        }
        row = next_row(row, heading)?;

        if !example.description.is_empty() {
            sheet.set_value(CellRef::new(row, detail), &example.description)?;
            row = next_row(row, detail)?;
        }
        self.tables.format(sheet, &example.table, row)
    }
}
