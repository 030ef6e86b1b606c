//! Filter-and-merge pipeline turning a newline-delimited JSON synonym corpus
//! into pipe-delimited puzzle data.

pub mod anagram;
pub mod config;
pub mod filter;
pub mod merge;
pub mod pipeline;
pub mod record;
pub mod wordlist;
