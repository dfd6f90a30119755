//! Controller module orchestrator.
//!
//! `LayoutDemoController` owns the showcase state and exposes the callbacks a
//! grid engine and width measurer drive. State is published as immutable
//! `Arc<DemoState>` snapshots; hosts diff and render them.

mod demo;
mod observer;
mod state;

pub use demo::LayoutDemoController;
pub use observer::{DropReport, LayoutObserver};
pub use state::DemoState;
