//! Web shell for the Vasari creator toolkit.
//!
//! Serves a single-page creator hub backed by the four toolkit operations.
//! Each tool posts its form fields to a JSON endpoint; replies come back as
//! rendered HTML for the page to swap in, or as a banner message when
//! generation fails.

mod config;
mod markdown;
mod routes;
mod server;
mod state;

pub use config::ServerConfig;
pub use markdown::render_markdown;
pub use routes::{
    CaptionsRequest, OutlineRequest, ThumbnailsRequest, TitlesRequest, create_router,
};
pub use server::CreatorServer;
pub use state::AppState;
