// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tables attached to steps and scenario examples.

use crate::{error::TableError, model::TestResult};

/// Single data row of a [`Table`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TableRow {
    /// Row without any outcome attached.
    Plain(Vec<String>),

    /// Row of an example table which has been executed.
    WithResult {
        /// Cell values in column order.
        cells: Vec<String>,

        /// Outcome of running the scenario with this row.
        result: TestResult,
    },
}

impl TableRow {
    /// Creates a [`TableRow::Plain`] out of the given `cells`.
    #[must_use]
    pub fn plain<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Plain(cells.into_iter().map(Into::into).collect())
    }

    /// Creates a [`TableRow::WithResult`] out of the given `cells`.
    #[must_use]
    pub fn with_result<I, S>(cells: I, result: TestResult) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::WithResult {
            cells: cells.into_iter().map(Into::into).collect(),
            result,
        }
    }

    /// Returns the cell values of this [`TableRow`].
    #[must_use]
    pub fn cells(&self) -> &[String] {
        match self {
            Self::Plain(cells) | Self::WithResult { cells, .. } => cells,
        }
    }

    /// Returns the outcome attached to this [`TableRow`], if any.
    #[must_use]
    pub const fn result(&self) -> Option<TestResult> {
        match self {
            Self::Plain(_) => None,
            Self::WithResult { result, .. } => Some(*result),
        }
    }
}

/// Header row plus data rows of equal width.
///
/// Width is fixed at construction, so every consumer may rely on each row
/// having exactly [`Table::width()`] cells.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<TableRow>,
}

/// [`Table`] of a scenario's `Examples` section.
pub type ExampleTable = Table;

impl Table {
    /// Creates a new [`Table`] out of the given `header` and data `rows`.
    ///
    /// # Errors
    ///
    /// If any of `rows` has a different number of cells than `header`.
    pub fn new<I, S>(
        header: I,
        rows: impl IntoIterator<Item = TableRow>,
    ) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header: Vec<String> = header.into_iter().map(Into::into).collect();
        let rows: Vec<TableRow> = rows.into_iter().collect();

        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.cells().len())
            .enumerate()
            .find(|(_, len)| *len != header.len())
        {
            return Err(TableError::column_mismatch(row, header.len(), found));
        }

        Ok(Self { header, rows })
    }

    /// Creates a new [`Table`] out of raw rows, treating the first one as the
    /// header and the rest as [`TableRow::Plain`] data rows.
    ///
    /// This is the shape [`gherkin::Table`] and [`gherkin::Examples`] use.
    ///
    /// # Errors
    ///
    /// - If `rows` is empty.
    /// - If rows are of different widths.
    pub fn from_rows<R, S>(
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self, TableError>
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rows = rows.into_iter();
        let header = rows.next().ok_or(TableError::MissingHeader)?;

        Self::new(header, rows.map(TableRow::plain))
    }

    /// Returns the header row of this [`Table`].
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns the data rows of this [`Table`].
    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Returns the number of columns of this [`Table`].
    #[must_use]
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Returns the number of data rows of this [`Table`] (header excluded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks whether this [`Table`] has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
