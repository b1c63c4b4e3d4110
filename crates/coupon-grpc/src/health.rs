//! Standard `grpc.health.v1` health service.
//!
//! The server is only mounted after the coupon table is loaded, so by
//! the time a probe reaches it the process is ready. Table contents do
//! not matter: an empty table is a healthy, empty service.

use std::pin::Pin;

use tokio_stream::Stream;
use tonic::{Request, Response, Status};
use tracing::debug;

use crate::health_proto::health_check_response::ServingStatus;
use crate::health_proto::health_server::{Health, HealthServer};
use crate::health_proto::{HealthCheckRequest, HealthCheckResponse};

/// Response stream type for `Watch`. Never produced.
pub type WatchStream =
    Pin<Box<dyn Stream<Item = Result<HealthCheckResponse, Status>> + Send + 'static>>;

/// gRPC implementation of the health service.
#[derive(Debug, Default, Clone, Copy)]
pub struct HealthGrpcServer;

impl HealthGrpcServer {
    pub fn new() -> Self {
        Self
    }

    /// Get the tonic service for mounting on a gRPC server.
    pub fn into_service(self) -> HealthServer<Self> {
        HealthServer::new(self)
    }
}

#[tonic::async_trait]
impl Health for HealthGrpcServer {
    type WatchStream = WatchStream;

    async fn check(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        debug!(service = %request.get_ref().service, "health check");
        Ok(Response::new(HealthCheckResponse {
            status: ServingStatus::Serving.into(),
        }))
    }

    async fn watch(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        Err(Status::unimplemented(
            "health check via Watch not implemented",
        ))
    }
}
