//! Rendering of the generated data file payload.
//!
//! The payload is a comment line followed by one assignment to the
//! well-known global. The literal body is serde_json's 2-space pretty form
//! with one extra rule: U+2028 LINE SEPARATOR and U+2029 PARAGRAPH SEPARATOR
//! are escaped inside strings. Both are legal raw in JSON strings but not in
//! pre-ES2019 JavaScript string literals, and the output is evaluated as
//! JavaScript source, so the renderer targets that grammar rather than plain
//! JSON. Everything else round-trips verbatim: Unicode is never numerically
//! escaped.

use crate::error::{Result, StackgenError};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io;

/// Comment line at the top of the generated file, naming the file to edit.
pub const GENERATED_HEADER: &str =
    "// AUTO-GENERATED. Edit lib/tech_stack.yaml, not this file.\n";

/// Global the extension reads after the generated file is evaluated.
pub const GLOBAL_NAME: &str = "window.TECH_STACK_DATA";

/// Render the full generated-file payload for a config tree.
pub fn render(tree: &Value) -> Result<String> {
    let mut payload = Vec::with_capacity(256);
    payload.extend_from_slice(GENERATED_HEADER.as_bytes());
    payload.extend_from_slice(GLOBAL_NAME.as_bytes());
    payload.extend_from_slice(b" = ");

    {
        let mut serializer = Serializer::with_formatter(&mut payload, JsLiteralFormatter::new());
        tree.serialize(&mut serializer).map_err(|e| {
            StackgenError::WriteFailure(format!("failed to render data literal: {}", e))
        })?;
    }

    payload.extend_from_slice(b";\n");

    String::from_utf8(payload).map_err(|e| {
        StackgenError::WriteFailure(format!("rendered payload is not valid UTF-8: {}", e))
    })
}

/// serde_json's pretty formatter, retargeted at JavaScript string literals.
///
/// The stock formatter leaves U+2028/U+2029 raw inside string fragments;
/// this one splits fragments around them and emits `\u2028`/`\u2029`
/// instead. All other behavior (2-space indentation, `": "` separators,
/// escape table) is delegated unchanged.
struct JsLiteralFormatter {
    pretty: PrettyFormatter<'static>,
}

impl JsLiteralFormatter {
    fn new() -> Self {
        JsLiteralFormatter {
            pretty: PrettyFormatter::new(),
        }
    }
}

impl Formatter for JsLiteralFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut rest = fragment;
        while let Some(found) = rest.find(['\u{2028}', '\u{2029}']) {
            self.pretty.write_string_fragment(writer, &rest[..found])?;
            let escape: &[u8] = if rest[found..].starts_with('\u{2028}') {
                b"\\u2028"
            } else {
                b"\\u2029"
            };
            writer.write_all(escape)?;
            // Both separators are three bytes in UTF-8.
            rest = &rest[found + 3..];
        }
        self.pretty.write_string_fragment(writer, rest)
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object_value(writer)
    }
}
