use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::invocation::{MethodCall, MethodResponse};

/// Errors raised by registrar operations.
///
/// These cover the registration contract only. Handler outcomes are never
/// errors: an unrecognized method is the in-band
/// [`MethodResponse::NotImplemented`] value.
#[derive(Debug, thiserror::Error)]
pub enum RegistrarError {
    #[error("channel already registered: {0}")]
    ChannelTaken(String),

    #[error("channel not found: {0}")]
    ChannelNotFound(String),
}

/// Handler bound to a single named channel.
///
/// One method suffices: the handler receives the invocation and produces the
/// response. Implementations must be re-entrant; the registrar dispatches
/// concurrent invocations without any ordering guarantees.
#[async_trait]
pub trait MethodCallHandler: Send + Sync {
    /// Handle a single method invocation on this handler's channel.
    async fn on_method_call(&self, call: MethodCall) -> MethodResponse;
}

/// Dispatch table mapping channel names to their registered handlers.
///
/// Stands in for the host framework's plugin registrar: plugins bind an
/// instance to a fixed string identifier, and the host routes each incoming
/// invocation to the handler owning that channel. Uses [`RwLock`] so
/// concurrent dispatches never block each other.
pub struct ChannelRegistrar {
    channels: RwLock<HashMap<String, Arc<dyn MethodCallHandler>>>,
}

impl Default for ChannelRegistrar {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelRegistrar {
    /// Create a registrar with no channels bound.
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
        }
    }

    /// Bind a handler to a named channel.
    ///
    /// Channel names are fixed string identifiers; binding a name that is
    /// already taken is refused rather than silently replaced.
    pub async fn register(
        &self,
        channel: impl Into<String>,
        handler: Arc<dyn MethodCallHandler>,
    ) -> Result<(), RegistrarError> {
        let channel = channel.into();
        let mut channels = self.channels.write().await;
        if channels.contains_key(&channel) {
            return Err(RegistrarError::ChannelTaken(channel));
        }
        channels.insert(channel.clone(), handler);
        info!(channel = %channel, "registered method channel");
        Ok(())
    }

    /// Remove the handler bound to a channel.
    pub async fn unregister(&self, channel: &str) -> Result<(), RegistrarError> {
        match self.channels.write().await.remove(channel) {
            Some(_) => {
                info!(channel = %channel, "unregistered method channel");
                Ok(())
            }
            None => Err(RegistrarError::ChannelNotFound(channel.to_string())),
        }
    }

    /// Route an invocation to the handler owning the named channel.
    ///
    /// The registrar never interprets the method name; routing is by channel
    /// only. Whether the method is recognized is the handler's decision.
    pub async fn dispatch(
        &self,
        channel: &str,
        call: MethodCall,
    ) -> Result<MethodResponse, RegistrarError> {
        let handler = {
            let channels = self.channels.read().await;
            channels
                .get(channel)
                .cloned()
                .ok_or_else(|| RegistrarError::ChannelNotFound(channel.to_string()))?
        };

        debug!(channel = %channel, method = %call.method, "dispatching method call");
        Ok(handler.on_method_call(call).await)
    }

    /// Names of all currently registered channels.
    pub async fn channels(&self) -> Vec<String> {
        self.channels.read().await.keys().cloned().collect()
    }
}
