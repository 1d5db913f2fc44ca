//! Per-IP rate limiting built on `tower_governor`.
//!
//! The governor layer type is generic over the key extractor and the
//! middleware, so routes build it through [`make_rate_limit_layer!`] rather
//! than naming it.

/// Login attempts: 5 requests per second with a burst of 10
pub const AUTH_RATE_PER_SECOND: u64 = 5;
pub const AUTH_BURST_SIZE: u32 = 10;

/// Build a `GovernorLayer` keyed on the peer address of the connection.
///
/// Forwarding headers are ignored: the server is not deployed behind a
/// trusted proxy, so any client could forge them. The server must be
/// started with `into_make_service_with_connect_info`.
#[macro_export]
macro_rules! make_rate_limit_layer {
    ($per_second:expr, $burst:expr) => {{
        let config = ::tower_governor::governor::GovernorConfigBuilder::default()
            .per_second($per_second)
            .burst_size($burst)
            .key_extractor(::tower_governor::key_extractor::PeerIpKeyExtractor)
            .use_headers()
            .finish()
            .expect("rate limit period and burst size must be non-zero");

        ::tower_governor::GovernorLayer::new(config)
    }};
}
