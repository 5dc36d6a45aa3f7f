// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Pure form logic: input masks and field validation. Nothing here touches egui.

pub mod mask;
pub mod validation;

pub use mask::apply_mask;
pub use validation::{ValidationContext, validate, validate_all};
