//! Code point sources and Unicode classification for the TSBL lexer.
//!
//! This crate is standalone: it has no `tsbl_*` dependencies, so tools that
//! only need decoding or identifier classification can use it without
//! pulling in the tokenizer.
//!
//! # Layers
//!
//! - [`utf8`]: strict single-step UTF-8 decoding
//! - [`CodePointSource`]: the pull interface, with two implementations:
//!   [`BufferSource`] over a terminated [`SourceBuffer`], and
//!   [`StreamSource`] over any [`std::io::Read`]
//! - [`category`]: general categories and identifier tables

mod buffer_source;
pub mod category;
mod code_point;
mod source;
mod source_buffer;
mod stream_source;
pub mod utf8;

pub use buffer_source::{BufferSource, MissingTerminator};
pub use category::{category, is_identifier_continue, is_identifier_start, is_space_separator, Category};
pub use code_point::CodePoint;
pub use source::CodePointSource;
pub use source_buffer::SourceBuffer;
pub use stream_source::{StreamConfig, StreamSource};
