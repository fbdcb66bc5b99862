//! # memolink-dispatch
//!
//! Turns a button click into a popup on the quality server:
//!
//! - [`WidgetConfig`]: the options a host panel stores for one button
//! - [`VariableSource`], [`PopupOpener`], [`Notifier`]: host collaborators
//! - [`Dispatcher`]: fetch, validate, override, encrypt, build URL, open
//! - [`render`]: button markup and scoped styles as plain strings
//!
//! Validation rules live in `memolink-schema` and the codec in
//! `memolink-cipher`; this crate wires them to the host.

pub mod config;
pub mod host;
pub mod pipeline;
pub mod render;
pub mod url;

pub use config::{ConfigError, WidgetConfig};
pub use host::{
    HostMode, HostWindow, Notifier, PopupOpener, PopupRequest, StaticVariables, VariableError,
    VariableSource,
};
pub use pipeline::{DispatchError, Dispatcher};
pub use render::{Rendered, render};
pub use url::{DispatchUrl, build_url, endpoint};
