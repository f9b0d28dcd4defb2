// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Worksheet abstraction and its in-memory implementation.

use std::collections::BTreeMap;

use crate::{error::SheetError, spreadsheet::CellRef};

/// Destination of cell writes.
///
/// Implemented by adapters over real spreadsheet libraries. Formatters only
/// ever write cell values, they never read back.
pub trait Worksheet {
    /// Writes `value` into the given `cell`.
    ///
    /// # Errors
    ///
    /// If `cell` can't be written (out of bounds, backend failure, etc).
    fn set_value(&mut self, cell: CellRef, value: &str) -> Result<(), SheetError>;
}

impl<W: Worksheet + ?Sized> Worksheet for &mut W {
    fn set_value(&mut self, cell: CellRef, value: &str) -> Result<(), SheetError> {
        (**self).set_value(cell, value)
    }
}

/// In-memory [`Worksheet`] keeping cell values in row-major order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sheet {
    name: String,
    cells: BTreeMap<CellRef, String>,
}

impl Sheet {
    /// Creates a new empty [`Sheet`] with the given `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), cells: BTreeMap::new() }
    }

    /// Returns the name of this [`Sheet`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of the given `cell`, if it was written.
    #[must_use]
    pub fn get(&self, cell: CellRef) -> Option<&str> {
        self.cells.get(&cell).map(String::as_str)
    }

    /// Returns the value at the given `A1`-style `reference`, if it was
    /// written.
    ///
    /// # Errors
    ///
    /// If `reference` is malformed or out of bounds.
    pub fn value(&self, reference: &str) -> Result<Option<&str>, SheetError> {
        Ok(self.get(reference.parse()?))
    }

    /// Iterates over all the written cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &str)> {
        self.cells.iter().map(|(c, v)| (*c, v.as_str()))
    }

    /// Returns the number of written cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Checks whether nothing has been written into this [`Sheet`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the last row having any written cell.
    #[must_use]
    pub fn last_row(&self) -> Option<u32> {
        self.cells.keys().next_back().map(|c| c.row)
    }
}

impl Worksheet for Sheet {
    fn set_value(&mut self, cell: CellRef, value: &str) -> Result<(), SheetError> {
        _ = self.cells.insert(cell.check()?, value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_reads_back_values() {
        let mut sheet = Sheet::new("SHEET1");

        sheet.set_value(CellRef::new(3, 2), "Name").unwrap();

        assert_eq!(sheet.name(), "SHEET1");
        assert_eq!(sheet.value("B3"), Ok(Some("Name")));
        assert_eq!(sheet.value("B4"), Ok(None));
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.last_row(), Some(3));
    }

    #[test]
    fn rejects_out_of_bounds_writes() {
        let mut sheet = Sheet::default();

        let err = sheet.set_value(CellRef::new(0, 1), "x").unwrap_err();

        assert_eq!(err, SheetError::OutOfBounds { row: 0, column: 1 });
        assert!(sheet.is_empty());
    }

    #[test]
    fn overwrites_cells() {
        let mut sheet = Sheet::default();

        sheet.set_value(CellRef::new(1, 1), "a").unwrap();
        sheet.set_value(CellRef::new(1, 1), "b").unwrap();

        assert_eq!(sheet.get(CellRef::new(1, 1)), Some("b"));
    }

    #[test]
    fn iterates_row_major() {
        let mut sheet = Sheet::default();
        for r in ["B2", "A2", "C1"] {
            sheet.set_value(r.parse().unwrap(), r).unwrap();
        }

        let order: Vec<_> = sheet.cells().map(|(_, v)| v).collect();
        assert_eq!(order, ["C1", "A2", "B2"]);
    }

    #[test]
    fn writes_through_mutable_reference() {
        fn write(mut sheet: impl Worksheet) {
            sheet.set_value(CellRef::new(1, 1), "via ref").unwrap();
        }
        let mut sheet = Sheet::default();

        write(&mut sheet);

        assert_eq!(sheet.value("A1"), Ok(Some("via ref")));
    }
}
