//! Log output for the service.
//!
//! One subscriber, two renderings: pretty multi-line events for local work
//! and one flattened JSON object per event in production. Events emitted
//! while handling a request carry the `request` span opened by the request
//! ID middleware (`request_id`, `method`, `uri`). `RUST_LOG` replaces the
//! default directives.

use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Default filter when `RUST_LOG` is unset
fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Development => "debug,nb_api=debug,nb_db=debug,tower_http=debug,sqlx=warn",
        // Governor logs every rejected login attempt at debug
        Environment::Production => "info,tower_http=info,tower_governor=warn,sqlx=warn",
    }
}

fn format_layer(env: &Environment) -> BoxedLayer {
    let layer = tracing_subscriber::fmt::layer().with_target(true);

    match env {
        Environment::Development => layer
            .pretty()
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        // Only the innermost span: the request span already holds the id
        Environment::Production => layer
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
    }
}

/// Install the global subscriber for `env`
pub fn init_tracing(env: &Environment) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    tracing_subscriber::registry()
        .with(format_layer(env).with_filter(env_filter))
        .init();

    tracing::info!(environment = ?env, "Tracing initialized");
}
