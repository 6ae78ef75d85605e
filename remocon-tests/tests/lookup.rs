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

use remocon_tests::devices::DEVICES;

#[test]
fn test_device_lookup() {
    let tv = DEVICES.get("TV|A").unwrap();
    assert_eq!(tv.get("POWER").copied(), Some(&[0x1Au8, 0x2B][..]));
    assert_eq!(tv.get("VOL|UP").copied(), Some(&[0xAAu8, 0x01, 0x55, 0x00][..]));
}

#[test]
fn test_substituted_keys_are_the_lookup_keys() {
    // The exporter writes `TV/A`; the table key is the substituted
    // form used in lookup routes.
    assert!(DEVICES.get("TV/A").is_none());
    assert!(DEVICES.get("TV|A").is_some());
}

#[test]
fn test_unknown_device_and_button() {
    assert!(DEVICES.get("STEREO").is_none());
    assert!(DEVICES.get("LIGHT").unwrap().get("DIM").is_none());
}

#[test]
fn test_every_device_has_its_buttons() {
    assert_eq!(DEVICES.len(), 2);
    assert_eq!(DEVICES.get("TV|A").unwrap().len(), 3);
    assert_eq!(DEVICES.get("LIGHT").unwrap().len(), 2);
}
