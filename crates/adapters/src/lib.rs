// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jsneck-adapters: seams between the switcher and the outside world.
//!
//! Every adapter is a trait with one real implementation and, behind the
//! `test-support` feature, a fake that records calls.

pub mod fs;
pub mod ipc;
pub mod player;
pub mod scheduler;
pub mod sink;

pub use fs::{FileSystem, FsError, OsFileSystem};
pub use ipc::{DisconnectedBridge, IpcError, LiveQueryBridge};
#[cfg(unix)]
pub use ipc::socket::SocketBridge;
pub use player::{FilePlayerState, PlayerState, StateReadError};
pub use scheduler::{Scheduler, Subscription, TickCallback, TickScheduler};
pub use sink::{LoggingSink, MappingSink, SinkError};

#[cfg(any(test, feature = "test-support"))]
pub use fs::FakeFileSystem;
#[cfg(any(test, feature = "test-support"))]
pub use ipc::FakeBridge;
#[cfg(any(test, feature = "test-support"))]
pub use player::FakePlayerState;
#[cfg(any(test, feature = "test-support"))]
pub use sink::{ApplyCall, FakeSink};
