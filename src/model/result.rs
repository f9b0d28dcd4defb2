// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Outcome of a documented scenario, step or example row.

use derive_more::with_trait::Display;

/// Possible outcomes of an already executed test.
///
/// Absence of any computed outcome is modelled as `Option::<TestResult>::None`,
/// which is distinct from [`TestResult::NotProvided`].
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum TestResult {
    /// Test passed.
    Passed,

    /// Test failed.
    Failed,

    /// Test ran, but its outcome is undecided (skipped, pending, etc).
    Inconclusive,

    /// Results were collected, but none was provided for this item.
    #[default]
    #[display("Not provided")]
    NotProvided,
}

impl TestResult {
    /// Returns the lowercase status token of this [`TestResult`].
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Inconclusive => "inconclusive",
            Self::NotProvided => "not-provided",
        }
    }

    /// Indicates whether this [`TestResult`] is worth annotating in output.
    ///
    /// [`TestResult::NotProvided`] renders exactly like a missing result.
    #[must_use]
    pub const fn is_reportable(self) -> bool {
        !matches!(self, Self::NotProvided)
    }
}
