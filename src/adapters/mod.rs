// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod notifier;

pub use http::HttpFetcher;
pub use notifier::ConsoleNotifier;
