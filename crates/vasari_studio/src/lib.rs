//! Prompt assembly and dispatch for the Vasari creator toolkit.
//!
//! Four drafting operations share one shape: format a fixed template with
//! the user's form fields, dispatch it at a fixed temperature, and hand the
//! markdown reply back untouched.

mod prompt;
mod toolkit;

pub use prompt::{
    CAPTIONS_TEMPERATURE, DEFAULT_MODEL, OUTLINE_TEMPERATURE, Platform, THUMBNAILS_TEMPERATURE,
    TITLES_TEMPERATURE, Tone, captions_prompt, outline_prompt, thumbnails_prompt, titles_prompt,
};
pub use toolkit::CreatorToolkit;
