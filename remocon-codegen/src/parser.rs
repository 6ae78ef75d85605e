// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::ast;
use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files;
use quick_xml::events::Event;
use quick_xml::Reader;

// The export documents place device declarations under fixed paths:
//
//   <remocon>
//     <header><remoconname>..</remoconname></header>
//     <signal>
//       <button><buttonname>..</buttonname><code>..</code></button>
//     </signal>
//   </remocon>
//
// Any element not on these paths is skipped wholesale. The name of the
// document root is not significant.

struct Context<'a> {
    name: &'a str,
    file: ast::FileId,
    line_starts: &'a [usize],
}

impl Context<'_> {
    fn loc(&self, start: usize, end: usize) -> ast::SourceRange {
        ast::SourceRange {
            file: self.file,
            start: ast::SourceLocation::new(start, self.line_starts),
            end: ast::SourceLocation::new(end, self.line_starts),
        }
    }

    fn err_syntax(&self, pos: u64, err: impl std::fmt::Display) -> Diagnostic<ast::FileId> {
        let pos = pos as usize;
        Diagnostic::error()
            .with_message(format!("failed to parse input file '{}': {}", self.name, err))
            .with_labels(vec![self.loc(pos, pos).primary()])
    }

    fn err_eof(&self, pos: u64) -> Diagnostic<ast::FileId> {
        self.err_syntax(pos, "unexpected end of file")
    }
}

type XmlReader<'i> = Reader<&'i [u8]>;

fn skip_element(
    reader: &mut XmlReader<'_>,
    context: &Context<'_>,
    start: &quick_xml::events::BytesStart<'_>,
) -> Result<(), Diagnostic<ast::FileId>> {
    reader
        .read_to_end(start.name())
        .map(|_| ())
        .map_err(|err| context.err_syntax(reader.buffer_position(), err))
}

/// Read the text content of a leaf element, consuming events up to and
/// including the matching end tag. Nested markup is skipped.
fn parse_text(
    reader: &mut XmlReader<'_>,
    context: &Context<'_>,
    tag: &[u8],
) -> Result<String, Diagnostic<ast::FileId>> {
    let mut text = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => match t.unescape() {
                Ok(s) => text.push_str(&s),
                Err(err) => return Err(context.err_syntax(reader.buffer_position(), err)),
            },
            Ok(Event::Start(e)) => skip_element(reader, context, &e)?,
            Ok(Event::End(e)) if e.name().as_ref() == tag => return Ok(text),
            Ok(Event::Eof) => return Err(context.err_eof(reader.buffer_position())),
            Ok(_) => (),
            Err(err) => return Err(context.err_syntax(reader.buffer_position(), err)),
        }
    }
}

fn parse_header(
    reader: &mut XmlReader<'_>,
    context: &Context<'_>,
) -> Result<Option<String>, Diagnostic<ast::FileId>> {
    let mut name: Option<String> = None;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"remoconname" => {
                    let text = parse_text(reader, context, b"remoconname")?;
                    name.get_or_insert(text);
                }
                _ => skip_element(reader, context, &e)?,
            },
            Ok(Event::End(e)) if e.name().as_ref() == b"header" => return Ok(name),
            Ok(Event::Eof) => return Err(context.err_eof(reader.buffer_position())),
            Ok(_) => (),
            Err(err) => return Err(context.err_syntax(reader.buffer_position(), err)),
        }
    }
}

fn parse_button(
    reader: &mut XmlReader<'_>,
    context: &Context<'_>,
    start: usize,
) -> Result<ast::Button, Diagnostic<ast::FileId>> {
    let mut name: Option<String> = None;
    let mut code: Option<String> = None;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"buttonname" => {
                    let text = parse_text(reader, context, b"buttonname")?;
                    name.get_or_insert(text);
                }
                b"code" => {
                    let text = parse_text(reader, context, b"code")?;
                    code.get_or_insert(text);
                }
                _ => skip_element(reader, context, &e)?,
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"buttonname" => {
                    name.get_or_insert(String::new());
                }
                b"code" => {
                    code.get_or_insert(String::new());
                }
                _ => (),
            },
            Ok(Event::End(e)) if e.name().as_ref() == b"button" => break,
            Ok(Event::Eof) => return Err(context.err_eof(reader.buffer_position())),
            Ok(_) => (),
            Err(err) => return Err(context.err_syntax(reader.buffer_position(), err)),
        }
    }
    let loc = context.loc(start, reader.buffer_position() as usize);
    match (name, code) {
        (Some(name), Some(code)) => Ok(ast::Button { loc, name, code }),
        (None, _) => Err(Diagnostic::error()
            .with_message("button is missing a <buttonname> element")
            .with_labels(vec![loc.primary()])),
        (Some(name), None) => Err(Diagnostic::error()
            .with_message(format!("button `{}` is missing a <code> element", name))
            .with_labels(vec![loc.primary()])),
    }
}

fn parse_signal(
    reader: &mut XmlReader<'_>,
    context: &Context<'_>,
    buttons: &mut Vec<ast::Button>,
) -> Result<(), Diagnostic<ast::FileId>> {
    loop {
        let pos = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"button" => buttons.push(parse_button(reader, context, pos)?),
                _ => skip_element(reader, context, &e)?,
            },
            Ok(Event::End(e)) if e.name().as_ref() == b"signal" => return Ok(()),
            Ok(Event::Eof) => return Err(context.err_eof(reader.buffer_position())),
            Ok(_) => (),
            Err(err) => return Err(context.err_syntax(reader.buffer_position(), err)),
        }
    }
}

fn parse_device(
    reader: &mut XmlReader<'_>,
    context: &Context<'_>,
    start: usize,
) -> Result<ast::Device, Diagnostic<ast::FileId>> {
    let mut name: Option<String> = None;
    let mut buttons = vec![];
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"header" => {
                    if let Some(text) = parse_header(reader, context)? {
                        name.get_or_insert(text);
                    }
                }
                b"signal" => parse_signal(reader, context, &mut buttons)?,
                _ => skip_element(reader, context, &e)?,
            },
            Ok(Event::End(e)) if e.name().as_ref() == b"remocon" => break,
            Ok(Event::Eof) => return Err(context.err_eof(reader.buffer_position())),
            Ok(_) => (),
            Err(err) => return Err(context.err_syntax(reader.buffer_position(), err)),
        }
    }
    let loc = context.loc(start, reader.buffer_position() as usize);
    match name {
        Some(name) => Ok(ast::Device { loc, name, buttons }),
        None => Err(Diagnostic::error()
            .with_message("device is missing a header <remoconname> element")
            .with_labels(vec![loc.primary()])),
    }
}

fn parse_toplevel(
    reader: &mut XmlReader<'_>,
    context: &Context<'_>,
) -> Result<Vec<ast::Device>, Diagnostic<ast::FileId>> {
    // Advance to the document root. Declarations, processing
    // instructions, and comments may precede it.
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => break,
            Ok(Event::Empty(_)) => return Ok(vec![]),
            Ok(Event::Eof) => {
                return Err(context.err_syntax(reader.buffer_position(), "no element found"))
            }
            Ok(_) => (),
            Err(err) => return Err(context.err_syntax(reader.buffer_position(), err)),
        }
    }
    let mut devices = vec![];
    loop {
        let pos = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"remocon" => devices.push(parse_device(reader, context, pos)?),
                _ => skip_element(reader, context, &e)?,
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"remocon" => {
                let end = reader.buffer_position() as usize;
                return Err(Diagnostic::error()
                    .with_message("device is missing a header <remoconname> element")
                    .with_labels(vec![context.loc(pos, end).primary()]));
            }
            Ok(Event::End(_)) => return Ok(devices),
            Ok(Event::Eof) => return Err(context.err_eof(reader.buffer_position())),
            Ok(_) => (),
            Err(err) => return Err(context.err_syntax(reader.buffer_position(), err)),
        }
    }
}

/// Parse a source string directly. The database stores the source
/// under the provided name.
pub fn parse_inline(
    sources: &mut ast::SourceDatabase,
    name: &str,
    source: String,
) -> Result<ast::File, Diagnostic<ast::FileId>> {
    let line_starts: Vec<_> = files::line_starts(&source).collect();
    let file = sources.add(name.to_owned(), source.clone());
    let context = Context { name, file, line_starts: &line_starts };
    let mut reader = Reader::from_str(&source);
    let devices = parse_toplevel(&mut reader, &context)?;
    Ok(ast::File { file, devices })
}

/// Parse a new source file.
///
/// The source file is fully read and added to the compilation
/// database. Returns the constructed AST, or a descriptive error
/// message in case of syntax error.
pub fn parse_file(
    sources: &mut ast::SourceDatabase,
    name: &str,
) -> Result<ast::File, Diagnostic<ast::FileId>> {
    let source = std::fs::read_to_string(name).map_err(|e| {
        Diagnostic::error().with_message(format!("failed to read input file '{}': {}", name, e))
    })?;
    parse_inline(sources, name, source)
}
