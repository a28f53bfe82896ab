use std::time::Duration;
use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::HttpMakeClassifier;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Boundary middleware: request tracing, permissive CORS, a body limit
/// sized for uploaded subject lists, and the overall request timeout the
/// engine itself does not implement.
pub fn stack() -> ServiceBuilder<
    Stack<
        TimeoutLayer,
        Stack<RequestBodyLimitLayer, Stack<CorsLayer, Stack<TraceLayer<HttpMakeClassifier>, Identity>>>,
    >,
> {
    let trace = TraceLayer::new_for_http();
    let cors = CorsLayer::permissive();
    let limit = RequestBodyLimitLayer::new(1024 * 1024);
    let timeout = TimeoutLayer::new(Duration::from_secs(10));

    ServiceBuilder::new()
        .layer(trace)
        .layer(cors)
        .layer(limit)
        .layer(timeout)
}
