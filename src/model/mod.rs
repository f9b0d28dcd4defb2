// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Object model of documented Gherkin features.
//!
//! Values are built once (usually by a [`Mapper`]) and only read by the
//! formatters afterwards.
//!
//! [`Mapper`]: crate::Mapper

mod result;
mod table;

use smart_default::SmartDefault;

pub use self::{
    result::TestResult,
    table::{ExampleTable, Table, TableRow},
};

/// Language code used when a [`Feature`] doesn't declare one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Top-level unit of documentation, one per `.feature` file.
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Feature {
    /// Name of this [`Feature`].
    pub name: String,

    /// Free-form multi-line description. Empty if absent.
    pub description: String,

    /// Language code selecting localized labels.
    #[default(DEFAULT_LANGUAGE.to_owned())]
    pub language: String,

    /// Tags in declaration order.
    pub tags: Vec<String>,

    /// Steps shared by every [`Scenario`] of this [`Feature`].
    pub background: Option<Scenario>,

    /// [`Scenario`]s in declaration order.
    pub scenarios: Vec<Scenario>,

    /// Aggregated outcome, if computed.
    pub result: Option<TestResult>,
}

/// Single behavior-test case.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Scenario {
    /// Name of this [`Scenario`].
    pub name: String,

    /// Free-form multi-line description. Empty if absent.
    pub description: String,

    /// Tags in declaration order.
    pub tags: Vec<String>,

    /// [`Step`]s in declaration order.
    pub steps: Vec<Step>,

    /// Data-driven [`Example`]s of a scenario outline.
    pub examples: Vec<Example>,

    /// Outcome of this [`Scenario`], if computed.
    pub result: Option<TestResult>,
}

/// Single step of a [`Scenario`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Step {
    /// Keyword as written in the source language (`Given `, `Stel `, ...).
    pub native_keyword: String,

    /// Step text, possibly containing `<placeholder>`s.
    pub name: String,

    /// Data table argument.
    pub table: Option<Table>,

    /// Doc string argument.
    pub doc_string: Option<String>,

    /// Outcome of this [`Step`], if computed.
    pub result: Option<TestResult>,
}

/// Named data table of a scenario outline.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Example {
    /// Name of this [`Example`] block.
    pub name: String,

    /// Free-form description. Empty if absent.
    pub description: String,

    /// Data of this [`Example`] block.
    pub table: ExampleTable,
}

impl Feature {
    /// Iterates over the background (if any) followed by all [`Scenario`]s.
    pub fn elements(&self) -> impl Iterator<Item = &Scenario> {
        self.background.iter().chain(&self.scenarios)
    }
}

impl Scenario {
    /// Returns the outcome worth annotating, skipping
    /// [`TestResult::NotProvided`].
    #[must_use]
    pub fn reportable_result(&self) -> Option<TestResult> {
        self.result.filter(|r| r.is_reportable())
    }
}

impl Step {
    /// Creates a new [`Step`] without arguments.
    #[must_use]
    pub fn new(
        native_keyword: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            native_keyword: native_keyword.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}
