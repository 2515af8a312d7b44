//! Math typesetting.
//!
//! A [`Typesetter`] is the engine: it is configured once with the math
//! delimiters to recognise and then turns text containing delimited TeX into
//! formatted notation. [`TypesetService`] owns an engine on behalf of the
//! application and gives it an explicit mount/teardown lifecycle.

mod service;
mod tex;
mod unicode;

pub use service::{EngineState, TypesetService};
pub use tex::tex_to_unicode;
pub use unicode::UnicodeTypesetter;

use crate::error::typeset::TypesetError;

use models::TypesetConfig;

pub trait Typesetter: Send {
    /// Register delimiters and flags. Must succeed before [`Typesetter::typeset`].
    fn configure(&mut self, config: &TypesetConfig) -> Result<(), TypesetError>;

    /// Replace every delimited math segment of `text` with formatted notation.
    fn typeset(&self, text: &str) -> Result<String, TypesetError>;
}
