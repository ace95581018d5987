//! Static response-header policy.
//!
//! Every response carries a permissions policy. The fixed logo asset and
//! SVG files never change without a filename change, so they get
//! long-lived immutable caching.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{CACHE_CONTROL, HeaderValue};
use actix_web::middleware::Next;

/// Applied to every path.
pub const PERMISSIONS_POLICY: &str =
    "camera=(), microphone=(), geolocation=(), interest-cohort=()";

/// One year, immutable.
pub const IMMUTABLE_CACHE_CONTROL: &str =
    "public, max-age=31536000, immutable";

/// The fixed logo asset plus anything matching the SVG extension pattern.
pub fn is_immutable_asset(path: &str) -> bool {
    path == "/logo.png" || path.ends_with(".svg")
}

/// Middleware attaching immutable cache headers to matching asset paths.
pub async fn asset_cache_headers(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let immutable = is_immutable_asset(req.path());
    let mut res = next.call(req).await?;
    if immutable {
        res.headers_mut().insert(
            CACHE_CONTROL,
            HeaderValue::from_static(IMMUTABLE_CACHE_CONTROL),
        );
    }
    Ok(res)
}
