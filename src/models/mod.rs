// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: field identities and the transient form state shared between UI and logic.

pub mod field;
pub mod form;
