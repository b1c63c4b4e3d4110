//! gRPC server assembly.

use std::future::Future;
use std::sync::Arc;

use coupon_core::CouponTable;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::info;

use crate::coupon::CouponGrpcServer;
use crate::health::HealthGrpcServer;

/// Serve the coupon and health services on an already-bound listener
/// until `shutdown` resolves.
///
/// In-flight calls are allowed to finish once `shutdown` fires.
pub async fn serve<F>(
    listener: TcpListener,
    table: Arc<CouponTable>,
    shutdown: F,
) -> Result<(), tonic::transport::Error>
where
    F: Future<Output = ()> + Send,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, codes = table.len(), "gRPC server listening");
    }

    let incoming = TcpListenerStream::new(listener);
    Server::builder()
        .add_service(CouponGrpcServer::new(table).into_service())
        .add_service(HealthGrpcServer::new().into_service())
        .serve_with_incoming_shutdown(incoming, shutdown)
        .await
}
