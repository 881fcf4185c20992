// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod error;
pub mod journal;
pub mod models;
pub mod partners;
pub mod resources;
pub mod session;
pub mod streak;
pub mod utils;

pub use error::{Error, Result};
