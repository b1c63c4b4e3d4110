//! Coupon gRPC server.
//!
//! Implements the `CouponService` gRPC interface on top of a shared,
//! read-only [`CouponTable`].

use std::sync::Arc;

use coupon_core::{CouponTable, Redemption};
use tonic::{Request, Response, Status};

use crate::proto;
use crate::proto::coupon_service_server::CouponService;

/// gRPC implementation of the coupon service.
pub struct CouponGrpcServer {
    table: Arc<CouponTable>,
}

impl CouponGrpcServer {
    /// Create a new coupon server answering from `table`.
    pub fn new(table: Arc<CouponTable>) -> Self {
        Self { table }
    }

    /// Get the tonic service for mounting on a gRPC server.
    pub fn into_service(self) -> proto::coupon_service_server::CouponServiceServer<Self> {
        proto::coupon_service_server::CouponServiceServer::new(self)
    }
}

impl From<Redemption> for proto::CouponResponse {
    fn from(r: Redemption) -> Self {
        Self {
            validity: r.valid,
            discount_percentage: r.discount_percentage,
        }
    }
}

#[tonic::async_trait]
impl CouponService for CouponGrpcServer {
    // Unknown codes are a normal answer, never an error status.
    async fn redeem_coupon(
        &self,
        request: Request<proto::CouponRequest>,
    ) -> Result<Response<proto::CouponResponse>, Status> {
        let req = request.into_inner();
        let redemption = self.table.redeem(&req.coupon_code);
        Ok(Response::new(redemption.into()))
    }
}
