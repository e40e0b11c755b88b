//! An interpreter for the 8 instruction tape language (`><+-,.[]`).
//!
//! Source goes through `lexer` -> `optimizer` (clear idiom rewrite, run-length fusing)
//! -> `parser` (nested blocks) -> `interpreter` (tree walking over a growable tape).

extern crate thiserror;

pub mod interpreter;
pub mod lexer;
pub mod optimizer;
pub mod parser;

use thiserror::Error;

use crate::{
    interpreter::{ast_interpreter::AstInterpreter, Runtime, RuntimeError},
    lexer::{lexer::Lexer, LexerError},
    optimizer::optimize,
    parser::{parser::Parser, ParserError, Program},
};

pub use crate::optimizer::Passes;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Lex, optimize and structure `source` without running it
pub fn compile(source: &str, passes: Passes) -> Result<Program, Error> {
    let tokens = Lexer::new(source).collect_results()?;
    let ops = optimize(&tokens, passes);
    Ok(Parser::new(&ops).parse_program()?)
}

/// Runs `source` against `input` and returns everything it wrote.
///
/// On any error no output is returned, even if some was produced before the failure.
pub fn interpret(source: &str, input: &[u8]) -> Result<Vec<u8>, Error> {
    interpret_with(source, input, Passes::all())
}

pub fn interpret_with(source: &str, input: &[u8], passes: Passes) -> Result<Vec<u8>, Error> {
    let program = compile(source, passes)?;
    let mut runtime = Runtime::new(input.to_vec());
    AstInterpreter::new().interpret(&mut runtime, &program)?;
    Ok(runtime.into_output())
}
