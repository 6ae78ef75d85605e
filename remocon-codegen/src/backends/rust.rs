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

//! Rust table backend.
//!
//! Emits the static `phf` device table consumed by the API service.
//! The output format is fixed: tab indentation, trailing commas, one
//! entry per line. Consumers diff regenerated tables against checked
//! in copies, so the text must stay byte stable.

use crate::ast;

/// Render a hex digit string as a borrowed byte array literal,
/// e.g. `"1A2B"` becomes `&[0x1A, 0x2B]`.
///
/// The string is split into 2-character chunks, left to right. A
/// trailing lone digit is right-padded with `0`: `"5"` renders as
/// `0x50`, not `0x05`. Chunks are emitted textually, preserving the
/// letter case of the input digits.
///
/// An empty input renders as `&[]`; the analyzer rejects empty codes
/// before generation reaches them.
pub fn format_byte_string(code: &str) -> String {
    let bytes = code
        .as_bytes()
        .chunks(2)
        .map(|chunk| {
            let chunk = std::str::from_utf8(chunk).unwrap();
            if chunk.len() == 1 {
                format!("0x{chunk}0")
            } else {
                format!("0x{chunk}")
            }
        })
        .collect::<Vec<String>>()
        .join(", ");
    format!("&[{bytes}]")
}

fn generate_device(device: &ast::Device) -> String {
    let mut output = format!("\t\"{}\" => phf_map! {{\n", device.key());
    for button in &device.buttons {
        output.push_str(&format!(
            "\t\t\"{}\" => {},\n",
            button.key(),
            format_byte_string(&button.code)
        ));
    }
    output.push_str("\t},\n");
    output
}

/// Generate the device table for the parsed input files.
///
/// Devices are emitted in file-then-document order, one nested map
/// per device. The table is rendered in full before anything is
/// written out, so a failing run never leaves a truncated table on
/// stdout.
pub fn generate(files: &[ast::File]) -> String {
    let mut output = String::new();
    output.push_str("// auto generated file from export xml\n");
    output.push_str("use phf::phf_map;\n");
    output.push('\n');
    output.push_str(
        "pub static DEVICES: phf::Map<&'static str, phf::Map<&'static str, &'static [u8]>> = phf_map! {\n",
    );
    for file in files {
        for device in &file.devices {
            output.push_str(&generate_device(device));
        }
    }
    output.push_str("};\n");
    output
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser;

    fn parse(sources: &mut ast::SourceDatabase, name: &str, source: &str) -> ast::File {
        parser::parse_inline(sources, name, source.to_owned()).unwrap()
    }

    #[test]
    fn test_format_even_length() {
        assert_eq!(format_byte_string("1A"), "&[0x1A]");
        assert_eq!(format_byte_string("1A2B"), "&[0x1A, 0x2B]");
        assert_eq!(format_byte_string("aa015500"), "&[0xaa, 0x01, 0x55, 0x00]");
    }

    #[test]
    fn test_format_odd_length_pads_trailing_zero() {
        assert_eq!(format_byte_string("5"), "&[0x50]");
        assert_eq!(format_byte_string("1A2B3"), "&[0x1A, 0x2B, 0x30]");
    }

    #[test]
    fn test_format_preserves_digit_case() {
        assert_eq!(format_byte_string("aA0Bcd"), "&[0xaA, 0x0B, 0xcd]");
    }

    #[test]
    fn test_separator_is_substituted_in_keys() {
        let mut db = ast::SourceDatabase::new();
        let file = parse(
            &mut db,
            "test",
            r#"<remoconlist>
                <remocon>
                    <header><remoconname>TV/A</remoconname></header>
                    <signal><button><buttonname>VOL/UP</buttonname><code>1A</code></button></signal>
                </remocon>
            </remoconlist>"#,
        );
        let output = generate(&[file]);
        assert!(output.contains("\t\"TV|A\" => phf_map! {\n"));
        assert!(output.contains("\t\t\"VOL|UP\" => &[0x1A],\n"));
        assert!(!output.contains("TV/A"));
    }

    #[test]
    fn test_device_block_is_emitted_verbatim() {
        let mut db = ast::SourceDatabase::new();
        let file = parse(
            &mut db,
            "test",
            "<remoconlist><remocon>\
                <header><remoconname>TV/A</remoconname></header>\
                <signal><button><buttonname>POWER</buttonname><code>1A2B</code></button></signal>\
            </remocon></remoconlist>",
        );
        assert_eq!(
            generate_device(&file.devices[0]),
            "\t\"TV|A\" => phf_map! {\n\t\t\"POWER\" => &[0x1A, 0x2B],\n\t},\n"
        );
    }

    #[test]
    fn test_preamble_and_footer() {
        let output = generate(&[]);
        assert_eq!(
            output,
            "// auto generated file from export xml\n\
             use phf::phf_map;\n\
             \n\
             pub static DEVICES: phf::Map<&'static str, phf::Map<&'static str, &'static [u8]>> = phf_map! {\n\
             };\n"
        );
    }

    #[test]
    fn test_devices_are_emitted_in_file_order() {
        let mut db = ast::SourceDatabase::new();
        let file1 = parse(
            &mut db,
            "first",
            "<remoconlist><remocon><header><remoconname>B</remoconname></header></remocon></remoconlist>",
        );
        let file2 = parse(
            &mut db,
            "second",
            "<remoconlist><remocon><header><remoconname>A</remoconname></header></remocon></remoconlist>",
        );
        let output = generate(&[file1, file2]);
        let b = output.find("\"B\"").unwrap();
        let a = output.find("\"A\"").unwrap();
        assert!(b < a);
    }
}
