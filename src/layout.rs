// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Layout of [`Table`]s into format-agnostic cell [`Grid`]s.
//!
//! Both the Markdown and the spreadsheet output place tables through this
//! module, so they agree on column order, escaping and result annotation.

use crate::{
    escape::Escaping,
    localization::{Label, Labels},
    model::{Table, TableRow, TestResult},
};

/// Per-status text placed where a result gets annotated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResultMarkers {
    /// Marker of [`TestResult::Passed`].
    pub passed: String,

    /// Marker of [`TestResult::Failed`].
    pub failed: String,

    /// Marker of [`TestResult::Inconclusive`].
    pub inconclusive: String,
}

impl Default for ResultMarkers {
    fn default() -> Self {
        Self::markdown()
    }
}

impl ResultMarkers {
    /// Image markers used in Markdown documents.
    #[must_use]
    pub fn markdown() -> Self {
        Self {
            passed: "![Passed](pass.png)".into(),
            failed: "![Failed](fail.png)".into(),
            inconclusive: "![Inconclusive](inconclusive.png)".into(),
        }
    }

    /// Plain-text markers out of localized [`Labels`].
    #[must_use]
    pub fn from_labels(labels: &Labels) -> Self {
        Self {
            passed: labels.get(Label::Passed).into(),
            failed: labels.get(Label::Failed).into(),
            inconclusive: labels.get(Label::Inconclusive).into(),
        }
    }

    /// Returns the marker of the given `result`.
    ///
    /// Both [`TestResult::NotProvided`] and a missing result have no marker.
    #[must_use]
    pub fn marker(&self, result: Option<TestResult>) -> Option<&str> {
        match result? {
            TestResult::Passed => Some(self.passed.as_str()),
            TestResult::Failed => Some(self.failed.as_str()),
            TestResult::Inconclusive => Some(self.inconclusive.as_str()),
            TestResult::NotProvided => None,
        }
    }
}

/// Rectangular cells of a laid out [`Table`].
///
/// The first row is always the header.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    width: usize,
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Returns the number of columns of this [`Grid`].
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows of this [`Grid`], header included.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the header row of this [`Grid`].
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// Returns the rows below the header.
    #[must_use]
    pub fn body(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    /// Returns all the rows of this [`Grid`], header first.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Table layout engine.
#[derive(Clone, Copy, Debug)]
pub struct TableLayout<'a> {
    escaping: Escaping,
    result_heading: &'a str,
    markers: &'a ResultMarkers,
}

impl<'a> TableLayout<'a> {
    /// Creates a new [`TableLayout`].
    ///
    /// The result column, when requested, is headed by the localized
    /// [`Label::Result`] and filled with the given `markers`.
    #[must_use]
    pub fn new(
        escaping: Escaping,
        labels: &Labels,
        markers: &'a ResultMarkers,
    ) -> Self {
        Self { escaping, result_heading: labels.get(Label::Result), markers }
    }

    /// Lays out the given `table` into a [`Grid`], optionally appending a
    /// trailing result column.
    #[must_use]
    pub fn layout(&self, table: &Table, include_result_column: bool) -> Grid {
        let width = table.width() + usize::from(include_result_column);

        let result_heading =
            include_result_column.then(|| self.result_heading.to_owned());
        let header: Vec<String> =
            self.escape_all(table.header()).chain(result_heading).collect();
        let body = table.rows().iter().map(|row| {
            self.escape_all(row.cells())
                .chain(include_result_column.then(|| self.result_cell(row)))
                .collect::<Vec<_>>()
        });

        Grid { width, rows: std::iter::once(header).chain(body).collect() }
    }

    /// Renders the trailing result cell of the given `row`.
    fn result_cell(&self, row: &TableRow) -> String {
        self.markers.marker(row.result()).unwrap_or_default().to_owned()
    }

    fn escape_all<'c>(
        &self,
        cells: &'c [String],
    ) -> impl Iterator<Item = String> + 'c {
        let escaping = self.escaping;
        cells.iter().map(move |c| escaping.apply(c).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(
            ["Col1", "<Col2>"],
            [
                TableRow::with_result(["a", "b"], TestResult::Passed),
                TableRow::with_result(["c", "d"], TestResult::Failed),
                TableRow::with_result(["e", "f"], TestResult::Inconclusive),
                TableRow::with_result(["g", "h"], TestResult::NotProvided),
                TableRow::plain(["<i>", "j"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn width_matches_header_without_result_column() {
        let markers = ResultMarkers::markdown();
        let layout =
            TableLayout::new(Escaping::Markdown, &Labels::default(), &markers);

        let grid = layout.layout(&table(), false);

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 6);
        assert!(grid.rows().iter().all(|r| r.len() == 2));
        assert_eq!(grid.header(), ["Col1", r"\<Col2\>"]);
        assert_eq!(grid.body()[4], [r"\<i\>", "j"]);
    }

    #[test]
    fn result_column_is_appended() {
        let markers = ResultMarkers::markdown();
        let layout =
            TableLayout::new(Escaping::Markdown, &Labels::default(), &markers);

        let grid = layout.layout(&table(), true);

        assert_eq!(grid.width(), 3);
        assert!(grid.rows().iter().all(|r| r.len() == 3));
        assert_eq!(grid.header()[2], "Result");
        let results: Vec<_> =
            grid.body().iter().map(|r| r[2].as_str()).collect();
        assert_eq!(
            results,
            [
                "![Passed](pass.png)",
                "![Failed](fail.png)",
                "![Inconclusive](inconclusive.png)",
                "",
                "",
            ],
        );
    }

    #[test]
    fn result_heading_and_markers_are_localized() {
        let labels = Labels::for_language("nl");
        let markers = ResultMarkers::from_labels(&labels);
        let layout = TableLayout::new(Escaping::Verbatim, &labels, &markers);

        let grid = layout.layout(&table(), true);

        assert_eq!(grid.header(), ["Col1", "<Col2>", "Resultaat"]);
        assert_eq!(grid.body()[0][2], "Geslaagd");
        assert_eq!(grid.body()[4][0], "<i>");
    }

    #[test]
    fn layout_is_deterministic() {
        let markers = ResultMarkers::markdown();
        let layout =
            TableLayout::new(Escaping::Markdown, &Labels::default(), &markers);
        let table = table();

        assert_eq!(layout.layout(&table, true), layout.layout(&table, true));
    }

    #[test]
    fn empty_table_has_only_header() {
        let markers = ResultMarkers::markdown();
        let layout =
            TableLayout::new(Escaping::Markdown, &Labels::default(), &markers);

        let grid = layout.layout(&Table::default(), false);

        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 1);
        assert!(grid.body().is_empty());
    }
}
