//! Platform-channel plugin answering host platform queries.
//!
//! The crate models the host side of a named method-call channel: a
//! [`ChannelRegistrar`] routes each [`MethodCall`] to the handler bound to
//! that channel. It ships the one plugin the product registers,
//! [`PoseDetectionPlugin`], which answers `getPlatformVersion` with the host
//! OS name and version and everything else with the not-implemented signal.
//!
//! ```
//! use pose_detection_plugin::{
//!     ChannelRegistrar, MethodCall, PoseDetectionPlugin, CHANNEL_NAME,
//! };
//!
//! # async fn run() -> Result<(), pose_detection_plugin::RegistrarError> {
//! let registrar = ChannelRegistrar::new();
//! PoseDetectionPlugin::register(&registrar).await?;
//!
//! let response = registrar
//!     .dispatch(CHANNEL_NAME, MethodCall::new("getPlatformVersion"))
//!     .await?;
//! assert!(response.is_success());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod models;
pub mod platform;

pub use crate::core::codec::{decode_method_call, encode_response, CodecError};
pub use crate::core::plugin::{PoseDetectionPlugin, CHANNEL_NAME, METHOD_GET_PLATFORM_VERSION};
pub use crate::core::registrar::{ChannelRegistrar, MethodCallHandler, RegistrarError};
pub use crate::models::invocation::{MethodCall, MethodResponse};
pub use crate::platform::Platform;
