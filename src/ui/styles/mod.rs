// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every UI component.

pub mod button;
pub mod container;
pub mod input;
pub mod text;
