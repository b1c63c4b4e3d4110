//! coupon-grpc — the remote surface of the coupon service.
//!
//! Serves two gRPC services from one listener:
//!
//! ```text
//! tonic Server
//!   ├── CouponService (CouponGrpcServer)
//!   │   └── RedeemCoupon() → table lookup, (validity, discount)
//!   └── grpc.health.v1.Health (HealthGrpcServer)
//!       ├── Check() → always SERVING
//!       └── Watch() → UNIMPLEMENTED
//! ```
//!
//! Both services are stateless; the coupon table is shared read-only.

pub mod coupon;
pub mod health;
pub mod server;

/// Generated protobuf types and gRPC stubs for the coupon service.
pub mod proto {
    tonic::include_proto!("couponservice");
}

/// Generated protobuf types and gRPC stubs for `grpc.health.v1`.
pub mod health_proto {
    tonic::include_proto!("grpc.health.v1");
}

pub use coupon::CouponGrpcServer;
pub use health::HealthGrpcServer;
pub use server::serve;
