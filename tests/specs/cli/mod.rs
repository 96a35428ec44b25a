// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod collections;
mod config;
mod help;
mod mapping;
mod watch;
