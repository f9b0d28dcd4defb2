// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Markdown output.
//!
//! Every block renders into ordered lines and implements [`Display`] writing
//! each line followed by a line break. Step text and table cells are escaped,
//! while headings and keywords produced by templates are emitted as is.
//!
//! [`Display`]: std::fmt::Display

pub mod document;
pub mod feature;
pub mod scenario;
pub mod table;

#[doc(inline)]
pub use self::{
    document::Document, feature::FeatureBlock, scenario::ScenarioBlock,
    table::TableBlock,
};
