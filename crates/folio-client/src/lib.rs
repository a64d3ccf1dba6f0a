//! # folio-client
//!
//! Client side of the portfolio: talks to the content API and turns what it
//! gets (or fails to get) into views.
//!
//! - [`home`] loads the four startup resources concurrently and falls back
//!   per resource to built-in content
//! - [`contact`] drives the contact form through `idle → sending → idle`
//! - [`project`] resolves a project detail page from navigation state or by
//!   id, attaching [`curated`] content where a record is known

pub mod api;
pub mod config;
pub mod contact;
pub mod curated;
pub mod defaults;
pub mod error;
pub mod fallback;
pub mod home;
pub mod project;

use tracing_subscriber::{fmt, EnvFilter};

/// Install the tracing subscriber used by the `folio` binary.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("folio_client=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
