use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::core::registrar::{ChannelRegistrar, MethodCallHandler, RegistrarError};
use crate::models::invocation::{MethodCall, MethodResponse};
use crate::platform::{self, Platform};

/// Channel identifier the plugin binds to.
pub const CHANNEL_NAME: &str = "pose_detection_tflite";

/// The single method the plugin recognizes, matched case-sensitively.
pub const METHOD_GET_PLATFORM_VERSION: &str = "getPlatformVersion";

/// Plugin answering host platform queries on the `pose_detection_tflite`
/// channel.
///
/// Stateless: each invocation is handled independently from a read-only OS
/// query, so concurrent calls need no coordination. Every method other than
/// [`METHOD_GET_PLATFORM_VERSION`] gets the not-implemented signal; the
/// argument payload is ignored either way.
pub struct PoseDetectionPlugin {
    platform: Box<dyn Platform>,
}

impl Default for PoseDetectionPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl PoseDetectionPlugin {
    /// Create a plugin backed by the current host platform.
    pub fn new() -> Self {
        Self {
            platform: platform::current(),
        }
    }

    /// Create a plugin backed by a specific platform source.
    pub fn with_platform(platform: Box<dyn Platform>) -> Self {
        Self { platform }
    }

    /// Bind a fresh plugin instance to its channel on the given registrar.
    pub async fn register(registrar: &ChannelRegistrar) -> Result<(), RegistrarError> {
        registrar
            .register(CHANNEL_NAME, Arc::new(Self::new()))
            .await
    }

    /// The host-OS-name-and-version string reported for the recognized query.
    pub fn platform_version(&self) -> String {
        format!("{} {}", self.platform.os_name(), self.platform.os_version())
    }
}

#[async_trait]
impl MethodCallHandler for PoseDetectionPlugin {
    async fn on_method_call(&self, call: MethodCall) -> MethodResponse {
        match call.method.as_str() {
            METHOD_GET_PLATFORM_VERSION => {
                MethodResponse::success(Value::String(self.platform_version()))
            }
            other => {
                debug!(method = %other, "method not implemented");
                MethodResponse::NotImplemented
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Fixed platform source so tests see a deterministic version string.
    struct FakePlatform;

    impl Platform for FakePlatform {
        fn os_name(&self) -> String {
            "iOS".to_string()
        }

        fn os_version(&self) -> String {
            "17.0".to_string()
        }
    }

    fn fake_plugin() -> PoseDetectionPlugin {
        PoseDetectionPlugin::with_platform(Box::new(FakePlatform))
    }

    #[tokio::test]
    async fn test_get_platform_version_succeeds() {
        let plugin = fake_plugin();
        let response = plugin
            .on_method_call(MethodCall::new(METHOD_GET_PLATFORM_VERSION))
            .await;

        assert_eq!(response, MethodResponse::success("iOS 17.0"));
    }

    #[tokio::test]
    async fn test_version_string_is_non_empty_on_host() {
        let plugin = PoseDetectionPlugin::new();
        let response = plugin
            .on_method_call(MethodCall::new(METHOD_GET_PLATFORM_VERSION))
            .await;

        let value = response.value().expect("should be a success response");
        let version = value.as_str().expect("version should be a string");
        assert!(!version.is_empty(), "Version string should not be empty");
    }

    #[tokio::test]
    async fn test_unknown_method_not_implemented() {
        let plugin = fake_plugin();
        let response = plugin.on_method_call(MethodCall::new("unknownMethod")).await;

        assert_eq!(response, MethodResponse::NotImplemented);
    }

    #[tokio::test]
    async fn test_empty_method_not_implemented() {
        let plugin = fake_plugin();
        let response = plugin.on_method_call(MethodCall::new("")).await;

        assert_eq!(response, MethodResponse::NotImplemented);
    }

    #[tokio::test]
    async fn test_method_match_is_case_sensitive() {
        let plugin = fake_plugin();

        for variant in ["getplatformversion", "GETPLATFORMVERSION", "GetPlatformVersion"] {
            let response = plugin.on_method_call(MethodCall::new(variant)).await;
            assert_eq!(
                response,
                MethodResponse::NotImplemented,
                "case variant {} should not be recognized",
                variant
            );
        }
    }

    #[tokio::test]
    async fn test_arguments_are_ignored() {
        let plugin = fake_plugin();

        let with_null = plugin
            .on_method_call(MethodCall::with_arguments(
                METHOD_GET_PLATFORM_VERSION,
                Value::Null,
            ))
            .await;
        assert_eq!(with_null, MethodResponse::success("iOS 17.0"));

        let with_payload = plugin
            .on_method_call(MethodCall::with_arguments(
                METHOD_GET_PLATFORM_VERSION,
                json!({"anything": [1, 2, 3]}),
            ))
            .await;
        assert_eq!(with_payload, MethodResponse::success("iOS 17.0"));
    }

    #[tokio::test]
    async fn test_registration_binds_fixed_channel() {
        let registrar = ChannelRegistrar::new();
        PoseDetectionPlugin::register(&registrar).await.unwrap();

        assert_eq!(registrar.channels().await, vec![CHANNEL_NAME]);

        let response = registrar
            .dispatch(CHANNEL_NAME, MethodCall::new(METHOD_GET_PLATFORM_VERSION))
            .await
            .unwrap();
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_double_registration_refused() {
        let registrar = ChannelRegistrar::new();
        PoseDetectionPlugin::register(&registrar).await.unwrap();

        let err = PoseDetectionPlugin::register(&registrar).await.unwrap_err();
        assert!(matches!(err, RegistrarError::ChannelTaken(_)));
    }

    #[tokio::test]
    async fn test_concurrent_invocations_agree() {
        let registrar = Arc::new(ChannelRegistrar::new());
        registrar
            .register(CHANNEL_NAME, Arc::new(fake_plugin()))
            .await
            .unwrap();

        let first = {
            let registrar = Arc::clone(&registrar);
            tokio::spawn(async move {
                registrar
                    .dispatch(CHANNEL_NAME, MethodCall::new(METHOD_GET_PLATFORM_VERSION))
                    .await
                    .unwrap()
            })
        };
        let second = {
            let registrar = Arc::clone(&registrar);
            tokio::spawn(async move {
                registrar
                    .dispatch(CHANNEL_NAME, MethodCall::new(METHOD_GET_PLATFORM_VERSION))
                    .await
                    .unwrap()
            })
        };

        let first = first.await.unwrap();
        let second = second.await.unwrap();

        assert!(first.is_success());
        assert_eq!(first, second, "concurrent invocations should agree");
    }
}
