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

use codespan_reporting::diagnostic::{Diagnostic, Severity};
use codespan_reporting::files;
use codespan_reporting::term;
use codespan_reporting::term::termcolor;
use std::collections::HashMap;
use std::fmt;

use crate::ast::*;

/// List of unique errors reported as analyzer diagnostics.
#[repr(u16)]
#[derive(Copy, Clone)]
pub enum ErrorCode {
    DuplicateDeviceIdentifier = 1,
    DuplicateButtonIdentifier = 2,
    EmptyButtonCode = 3,
    InvalidHexDigit = 4,
    OddCodeLength = 5,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "E{}", *self as u16)
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        format!("{}", code)
    }
}

/// Aggregate analyzer diagnostics.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub diagnostics: Vec<Diagnostic<FileId>>,
}

impl Diagnostics {
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    fn push(&mut self, diagnostic: Diagnostic<FileId>) {
        self.diagnostics.push(diagnostic)
    }

    pub fn emit(
        &self,
        sources: &SourceDatabase,
        writer: &mut dyn termcolor::WriteColor,
    ) -> Result<(), files::Error> {
        let config = term::Config::default();
        for d in self.diagnostics.iter() {
            term::emit(writer, &config, sources, d)?;
        }
        Ok(())
    }
}

/// Check that device table keys are unique across all input files.
/// Keys are compared after the `/` substitution, since that is the
/// form that collides in the emitted table.
fn check_device_identifiers(files: &[File], diagnostics: &mut Diagnostics) {
    let mut devices: HashMap<String, SourceRange> = HashMap::new();
    for file in files {
        for device in &file.devices {
            let key = device.key();
            if let Some(prev) = devices.get(&key) {
                diagnostics.push(
                    Diagnostic::error()
                        .with_code(ErrorCode::DuplicateDeviceIdentifier)
                        .with_message(format!("redeclaration of device `{}`", key))
                        .with_labels(vec![
                            device.loc.primary(),
                            prev.secondary()
                                .with_message(format!("`{}` is first declared here", key)),
                        ]),
                )
            } else {
                devices.insert(key, device.loc);
            }
        }
    }
}

/// Check that button table keys are unique within each device.
fn check_button_identifiers(files: &[File], diagnostics: &mut Diagnostics) {
    for file in files {
        for device in &file.devices {
            let mut buttons: HashMap<String, SourceRange> = HashMap::new();
            for button in &device.buttons {
                let key = button.key();
                if let Some(prev) = buttons.get(&key) {
                    diagnostics.push(
                        Diagnostic::error()
                            .with_code(ErrorCode::DuplicateButtonIdentifier)
                            .with_message(format!(
                                "redeclaration of button `{}` in device `{}`",
                                key,
                                device.key()
                            ))
                            .with_labels(vec![
                                button.loc.primary(),
                                prev.secondary()
                                    .with_message(format!("`{}` is first declared here", key)),
                            ]),
                    )
                } else {
                    buttons.insert(key, button.loc);
                }
            }
        }
    }
}

/// Check that button codes are well formed byte strings.
/// An odd digit count is accepted with a warning: the table emits the
/// trailing nibble zero-padded, which changes its value.
fn check_button_codes(files: &[File], diagnostics: &mut Diagnostics) {
    for file in files {
        for device in &file.devices {
            for button in &device.buttons {
                if button.code.is_empty() {
                    diagnostics.push(
                        Diagnostic::error()
                            .with_code(ErrorCode::EmptyButtonCode)
                            .with_message(format!(
                                "button `{}` in device `{}` has an empty code",
                                button.key(),
                                device.key()
                            ))
                            .with_labels(vec![button.loc.primary()]),
                    );
                    continue;
                }
                if let Some(c) = button.code.chars().find(|c| !c.is_ascii_hexdigit()) {
                    diagnostics.push(
                        Diagnostic::error()
                            .with_code(ErrorCode::InvalidHexDigit)
                            .with_message(format!(
                                "invalid character `{}` in code of button `{}` in device `{}`",
                                c,
                                button.key(),
                                device.key()
                            ))
                            .with_labels(vec![button.loc.primary()]),
                    );
                    continue;
                }
                if button.code.len() % 2 != 0 {
                    diagnostics.push(
                        Diagnostic::warning()
                            .with_code(ErrorCode::OddCodeLength)
                            .with_message(format!(
                                "code of button `{}` in device `{}` has an odd number of \
                                 digits; the trailing digit is emitted zero-padded (`5` \
                                 becomes `0x50`)",
                                button.key(),
                                device.key()
                            ))
                            .with_labels(vec![button.loc.primary()]),
                    )
                }
            }
        }
    }
}

/// Check the parsed input files and gather diagnostics.
/// Generation must not proceed when an error diagnostic is present;
/// warnings do not block generation.
pub fn analyze(files: &[File]) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();
    check_device_identifiers(files, &mut diagnostics);
    check_button_identifiers(files, &mut diagnostics);
    check_button_codes(files, &mut diagnostics);
    diagnostics
}
