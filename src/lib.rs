// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! erd-canvas: the interaction core of an entity-relationship diagram editor.
//!
//! State lives in a [`store::Store`] and changes only through [`command::Command`]s dispatched
//! into it. The [`focus`] model tracks keyboard focus and column selection inside the focused
//! table; [`layout`] places new shapes and measures text.

pub mod command;
pub mod focus;
pub mod layout;
pub mod model;
pub mod store;

pub use command::Command;
pub use store::{Store, StoreSnapshot};
