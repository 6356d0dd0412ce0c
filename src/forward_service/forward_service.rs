use async_trait::async_trait;

use crate::forward_service::error::ForwardServiceError;
use crate::forward_service::request::ForwardRequest;
use crate::forward_service::response::ForwardResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ForwardService: Send + Sync {
    async fn execute(
        &self,
        request: ForwardRequest,
    ) -> Result<ForwardResult, ForwardServiceError>;
}
