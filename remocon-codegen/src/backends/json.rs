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

//! JSON backend.

use crate::ast;

/// Turn the parsed device records into a JSON representation.
pub fn generate(files: &[ast::File]) -> Result<String, String> {
    serde_json::to_string_pretty(&files)
        .map_err(|err| format!("could not JSON serialize device records: {err}"))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser;

    #[test]
    fn test_device_records_are_serialized() {
        let mut db = ast::SourceDatabase::new();
        let file = parser::parse_inline(
            &mut db,
            "test",
            r#"<remoconlist>
                <remocon>
                    <header><remoconname>TV</remoconname></header>
                    <signal><button><buttonname>POWER</buttonname><code>1A2B</code></button></signal>
                </remocon>
            </remoconlist>"#
                .to_owned(),
        )
        .unwrap();
        let output = generate(&[file]).unwrap();
        assert!(output.contains("\"TV\""));
        assert!(output.contains("\"POWER\""));
        assert!(output.contains("\"1A2B\""));
    }
}
