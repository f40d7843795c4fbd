//! docker-banner-gen - bash.bashrc generator for docker images
//!
//! Renders a figlet banner, substitutes it into a bash.bashrc template
//! together with a prompt prefix and an optional subtitle, and writes the
//! result to stdout or a file.

pub mod cli;
pub mod error;
pub mod generate;
pub mod renderer;
pub mod templates;

pub use error::{BannerGenError, Result};
