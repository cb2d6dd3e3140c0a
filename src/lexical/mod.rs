//! The lexical module is responsible for converting raw equation text into a stream of tokens
//! that the syntax checker can understand.

pub mod token_stream;

pub mod token;
