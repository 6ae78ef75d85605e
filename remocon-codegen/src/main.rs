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

//! Remote control export analyzer and table generator.

use argh::FromArgs;
use codespan_reporting::term::{self, termcolor};

use remocon_codegen::{analyzer, ast, backends, parser};

#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    JSON,
    Rust,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "json" => Ok(Self::JSON),
            "rust" => Ok(Self::Rust),
            _ => Err(format!("could not parse {input:?}, valid options are 'rust', 'json'.")),
        }
    }
}

#[derive(FromArgs, Debug)]
/// Remote control export analyzer and table generator.
struct Opt {
    #[argh(switch)]
    /// print tool version and exit.
    version: bool,

    #[argh(option, default = "OutputFormat::Rust")]
    /// generate output in this format ("rust", "json").
    /// The output will be printed on stdout in all cases.
    /// The input files are XML export files.
    output_format: OutputFormat,

    #[argh(option)]
    /// exclude devices from the generated output.
    exclude_device: Vec<String>,

    #[argh(positional)]
    /// input files.
    input_files: Vec<String>,
}

/// Remove devices listed in the input filter.
/// Devices are matched by their display name, before substitution.
fn filter_devices(file: ast::File, exclude_devices: &[String]) -> ast::File {
    ast::File {
        devices: file
            .devices
            .into_iter()
            .filter(|device| !exclude_devices.contains(&device.name))
            .collect(),
        ..file
    }
}

fn generate_output(opt: &Opt) -> Result<(), String> {
    let mut sources = ast::SourceDatabase::new();
    let mut files = vec![];
    for input_file in &opt.input_files {
        match parser::parse_file(&mut sources, input_file) {
            Ok(file) => files.push(filter_devices(file, &opt.exclude_device)),
            Err(err) => {
                let writer = termcolor::StandardStream::stderr(termcolor::ColorChoice::Always);
                let config = term::Config::default();
                term::emit(&mut writer.lock(), &config, &sources, &err)
                    .expect("Could not print error");
                return Err(String::from("Error while parsing input"));
            }
        }
    }

    let diagnostics = analyzer::analyze(&files);
    if !diagnostics.is_empty() {
        diagnostics
            .emit(
                &sources,
                &mut termcolor::StandardStream::stderr(termcolor::ColorChoice::Always).lock(),
            )
            .expect("Could not print analyzer diagnostics");
    }
    if diagnostics.has_errors() {
        return Err(String::from("Analysis failed"));
    }

    match opt.output_format {
        OutputFormat::JSON => {
            println!("{}", backends::json::generate(&files)?);
            Ok(())
        }
        OutputFormat::Rust => {
            print!("{}", backends::rust::generate(&files));
            Ok(())
        }
    }
}

fn main() -> Result<(), String> {
    let opt: Opt = argh::from_env();

    if opt.version {
        println!("remoconc {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if opt.input_files.is_empty() {
        println!("Usage: remoconc <xml_file1> [<xml_file2> ...]");
        std::process::exit(1);
    }

    generate_output(&opt)
}
