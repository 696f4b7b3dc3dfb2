//! Main module for the textindex library functionality

pub mod ast;
pub mod index;
pub mod lexer;
pub mod parser;
pub mod pipeline;
