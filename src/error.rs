// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Consolidated error types of documentation rendering.
//!
//! Each concern owns a narrow error type, and [`Error`] unifies them, so the
//! `?` operator works across Markdown, spreadsheet and mapping code.

use derive_more::{Display, Error, From};

use crate::style::TemplateKind;

/// Top-level error type for all documentation rendering operations.
#[derive(Clone, Debug, Display, Error, From, PartialEq)]
pub enum Error {
    /// Structurally invalid [`Table`].
    ///
    /// [`Table`]: crate::model::Table
    #[display("Invalid table: {_0}")]
    Table(#[error(source)] TableError),

    /// Invalid [`Style`] template.
    ///
    /// [`Style`]: crate::Style
    #[display("Invalid style: {_0}")]
    Style(#[error(source)] StyleError),

    /// Missing label mapping.
    #[display("Localization error: {_0}")]
    Localization(#[error(source)] LocalizationError),

    /// Failed write into a [`Worksheet`].
    ///
    /// [`Worksheet`]: crate::spreadsheet::Worksheet
    #[display("Worksheet error: {_0}")]
    Sheet(#[error(source)] SheetError),
}

/// Errors of constructing a [`Table`].
///
/// [`Table`]: crate::model::Table
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum TableError {
    /// Data row width differs from the header width.
    #[display(
        "row {row} has {found} cells, while the header has {expected} columns"
    )]
    ColumnMismatch {
        /// Zero-based index of the offending data row.
        row: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of cells in the offending row.
        found: usize,
    },

    /// Table has no header row at all.
    #[display("table has no header row")]
    MissingHeader,
}

/// Errors of validating a [`StyleConfig`].
///
/// [`StyleConfig`]: crate::style::StyleConfig
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum StyleError {
    /// Template doesn't reference exactly the slots its kind requires.
    #[display(
        "`{template}` must use {expected} slot(s) `{{0}}`..`{{{}}}`, \
         but uses {found}",
        expected.saturating_sub(1),
    )]
    SlotMismatch {
        /// Which template is malformed.
        #[error(not(source))]
        template: TemplateKind,
        /// Number of slots the template must use.
        expected: usize,
        /// Number of distinct slots the template uses.
        found: usize,
    },

    /// Template references a slot index beyond the ones available.
    #[display("`{template}` references unknown slot `{{{index}}}`")]
    UnknownSlot {
        /// Which template is malformed.
        #[error(not(source))]
        template: TemplateKind,
        /// Referenced slot index.
        index: usize,
    },
}

/// Errors of resolving localized labels.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum LocalizationError {
    /// Label key with no mapping in any language.
    #[display("Unknown label key: {key}")]
    UnknownLabel {
        /// The requested key.
        #[error(not(source))]
        key: String,
    },
}

/// Errors of writing into a [`Worksheet`].
///
/// [`Worksheet`]: crate::spreadsheet::Worksheet
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum SheetError {
    /// Coordinate outside of the worksheet bounds.
    #[display("cell (row {row}, column {column}) is out of worksheet bounds")]
    OutOfBounds {
        /// 1-based row.
        row: u32,
        /// 1-based column.
        column: u32,
    },

    /// Malformed `A1`-style cell reference.
    #[display("invalid cell reference: `{reference}`")]
    InvalidReference {
        /// The unparsable reference.
        #[error(not(source))]
        reference: String,
    },
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl TableError {
    /// Creates a new [`TableError::ColumnMismatch`].
    #[must_use]
    pub const fn column_mismatch(
        row: usize,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::ColumnMismatch { row, expected, found }
    }
}

impl LocalizationError {
    /// Creates a new [`LocalizationError::UnknownLabel`].
    #[must_use]
    pub fn unknown_label(key: impl Into<String>) -> Self {
        Self::UnknownLabel { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_mismatch_names_row_and_widths() {
        let err = TableError::column_mismatch(1, 4, 3);

        assert_eq!(
            err.to_string(),
            "row 1 has 3 cells, while the header has 4 columns",
        );
    }

    #[test]
    fn slot_mismatch_names_template() {
        let err = StyleError::SlotMismatch {
            template: TemplateKind::Step,
            expected: 2,
            found: 1,
        };

        assert_eq!(
            err.to_string(),
            "`StepFormat` must use 2 slot(s) `{0}`..`{1}`, but uses 1",
        );
    }

    #[test]
    fn converts_into_top_level_error() {
        let err: Error = SheetError::OutOfBounds { row: 0, column: 2 }.into();

        assert!(matches!(err, Error::Sheet(SheetError::OutOfBounds { .. })));
        assert_eq!(
            err.to_string(),
            "Worksheet error: cell (row 0, column 2) is out of worksheet \
             bounds",
        );
    }

    #[test]
    fn top_level_error_exposes_its_cause() {
        use std::error::Error as _;

        let err = Error::from(TableError::MissingHeader);

        assert_eq!(err.to_string(), "Invalid table: table has no header row");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("table has no header row"),
        );

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_some());
    }

    #[test]
    fn plain_data_errors_are_copy() {
        let table = TableError::column_mismatch(0, 2, 1);
        let style = StyleError::UnknownSlot {
            template: TemplateKind::Tag,
            index: 3,
        };

        let (table_copy, style_copy) = (table, style);

        assert_eq!(table, table_copy);
        assert_eq!(style, style_copy);
    }

    #[test]
    fn unknown_label_is_reported() {
        assert_eq!(
            LocalizationError::unknown_label("Nope").to_string(),
            "Unknown label key: Nope",
        );
    }
}
