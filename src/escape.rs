// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Escaping of user-authored text for output formats with markup.
//!
//! Only raw model text is escaped, and only once, right before it's placed
//! into output. Labels, keywords of templates and already rendered output are
//! never passed through here.

use std::borrow::Cow;

/// Characters having structural meaning in Markdown output.
///
/// `<` and `>` delimit scenario outline placeholders, which Markdown renderers
/// would otherwise swallow as HTML tags.
const MARKDOWN_SPECIAL: [char; 2] = ['<', '>'];

/// Escape marker prepended to every [`MARKDOWN_SPECIAL`] character.
const MARKER: char = '\\';

/// Escapes the given `text` for Markdown output.
///
/// Borrows the input if it contains nothing to escape.
#[must_use]
pub fn markdown(text: &str) -> Cow<'_, str> {
    let count = text.chars().filter(|c| MARKDOWN_SPECIAL.contains(c)).count();
    if count == 0 {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + count);
    for c in text.chars() {
        if MARKDOWN_SPECIAL.contains(&c) {
            escaped.push(MARKER);
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Escaping policy of an output format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Escaping {
    /// Escape as [`markdown()`] does.
    #[default]
    Markdown,

    /// Emit text as is, for formats without markup (spreadsheet cells).
    Verbatim,
}

impl Escaping {
    /// Applies this [`Escaping`] policy to the given raw `text`.
    #[must_use]
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Markdown => markdown(text),
            Self::Verbatim => Cow::Borrowed(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{markdown, Escaping};

    #[test]
    fn escapes_placeholder_brackets() {
        assert_eq!(
            markdown("I am a <placeholder> step"),
            r"I am a \<placeholder\> step",
        );
    }

    #[test]
    fn borrows_plain_text() {
        assert!(matches!(markdown("no brackets here"), Cow::Borrowed(_)));
        assert!(matches!(markdown(""), Cow::Borrowed("")));
    }

    #[test]
    fn escapes_every_occurrence() {
        assert_eq!(markdown("<<a>> < b"), r"\<\<a\>\> \< b");
    }

    #[test]
    fn escaping_twice_doubles_markers() {
        let once = markdown("<x>").into_owned();
        let twice = markdown(&once).into_owned();

        assert_eq!(once, r"\<x\>");
        assert_eq!(twice, r"\\<x\\>");
        assert_ne!(once, twice);
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(markdown("ünïcode <ß>"), r"ünïcode \<ß\>");
    }

    #[test]
    fn verbatim_keeps_text() {
        assert_eq!(Escaping::Verbatim.apply("<x>"), "<x>");
        assert_eq!(Escaping::Markdown.apply("<x>"), r"\<x\>");
    }
}
