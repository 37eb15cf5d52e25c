use textsum_common::Result;
use crate::types::{GatewayOptions, InferenceRequest, InferenceResponse};
use async_trait::async_trait;

/// Hosted inference backend
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Run `model` once through the gateway described by `gateway`
    async fn run(
        &self,
        model: &str,
        request: &InferenceRequest,
        gateway: &GatewayOptions,
    ) -> Result<InferenceResponse>;
}
