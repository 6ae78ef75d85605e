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

//! Compiled copy of a generated device table.
//!
//! `devices.rs` is the output of `remoconc tests/input/export.xml`
//! from the remocon-codegen crate, checked in verbatim. Keeping a
//! generated table in the build proves that the emitted text compiles
//! against `phf` and serves the lookup pattern of the API service.

pub mod devices;
