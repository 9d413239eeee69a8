//! Shopping-cart view-model.
//!
//! A [`CartViewModel`](viewmodel::CartViewModel) receives
//! [`CartIntent`](viewmodel::CartIntent)s, applies them through a pure
//! reducer over [`cart`] transforms, and publishes immutable
//! [`CartState`](viewmodel::CartState) snapshots to any number of observers.

pub mod cart;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod viewmodel;
