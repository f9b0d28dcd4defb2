// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Block-quoted Markdown [`Table`] rendering.

use std::fmt;

use itertools::Itertools as _;

use crate::{
    escape::Escaping,
    layout::TableLayout,
    localization::Labels,
    model::Table,
    style::Style,
};

/// Prefix of every table line, quoting the table under its step or heading.
const QUOTE: &str = "> ";

/// Markdown rendering of a single [`Table`].
///
/// Renders as:
/// ```markdown
/// > | Col1 | Col2 |
/// > | --- | --- |
/// > | Col1Row1 | Col2Row1 |
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableBlock {
    lines: Vec<String>,
}

impl TableBlock {
    /// Lays out the given `table`, optionally with a trailing result column.
    #[must_use]
    pub fn new(
        table: &Table,
        style: &Style,
        labels: &Labels,
        include_result_column: bool,
    ) -> Self {
        let grid = TableLayout::new(Escaping::Markdown, labels, style.markers())
            .layout(table, include_result_column);

        let separator = format!(
            "{QUOTE}| {} |",
            std::iter::repeat("---").take(grid.width()).join(" | "),
        );
        let mut rows = grid.rows().iter().map(|row| {
            // Blank cells keep both padding spaces: `|  |`.
            format!("{QUOTE}| {} |", row.iter().join(" | "))
        });

        let lines = rows
            .next()
            .into_iter()
            .chain(std::iter::once(separator))
            .chain(rows)
            .collect();

        Self { lines }
    }

    /// Returns the rendered lines of this [`TableBlock`], without line breaks.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes this [`TableBlock`] returning its rendered lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for TableBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
