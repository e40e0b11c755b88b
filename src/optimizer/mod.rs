use bitflags::bitflags;

use crate::lexer::{Instruction, Position, Token};

use self::{clear_idiom::clear_idiom, fusing::fuse};

pub mod clear_idiom;
pub mod fusing;

bitflags! {
    /// Optimization passes run between lexing and structuring
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Passes: u8 {
        /// Rewrite `[-]` and `[+]` into a single clear
        const CLEAR_IDIOM = 0b01;
        /// Collapse runs of the same instruction into one counted op
        const FUSE = 0b10;
    }
}

impl Default for Passes {
    fn default() -> Self {
        Passes::all()
    }
}

/// `count` consecutive applications of `instruction`.
/// Loop delimiters only ever have a count of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FusedOp {
    pub instruction: Instruction,
    pub count: usize,
    /// Where the first instruction of the run was in the source
    pub position: Position,
}

impl From<&Token> for FusedOp {
    fn from(token: &Token) -> Self {
        FusedOp {
            instruction: token.instruction,
            count: 1,
            position: token.position,
        }
    }
}

pub fn optimize(tokens: &[Token], passes: Passes) -> Vec<FusedOp> {
    let rewritten;
    let tokens = if passes.contains(Passes::CLEAR_IDIOM) {
        rewritten = clear_idiom(tokens);
        &rewritten[..]
    } else {
        tokens
    };

    if passes.contains(Passes::FUSE) {
        fuse(tokens)
    } else {
        tokens.iter().map(FusedOp::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lexer::Lexer;

    fn ops(source: &str, passes: Passes) -> Vec<(Instruction, usize)> {
        let tokens = Lexer::new(source).collect_results().unwrap();
        optimize(&tokens, passes)
            .into_iter()
            .map(|op| (op.instruction, op.count))
            .collect()
    }

    #[test]
    fn no_passes_keeps_every_instruction() {
        assert_eq!(
            ops("++[-]", Passes::empty()),
            vec![
                (Instruction::Increase, 1),
                (Instruction::Increase, 1),
                (Instruction::LoopStart, 1),
                (Instruction::Decrease, 1),
                (Instruction::LoopEnd, 1),
            ]
        );
    }

    #[test]
    fn all_passes_rewrite_then_fuse() {
        // both clears become one run once rewritten
        assert_eq!(
            ops("++[-][+]", Passes::all()),
            vec![(Instruction::Increase, 2), (Instruction::ClearCell, 2)]
        );
    }

    #[test]
    fn default_is_all() {
        assert_eq!(Passes::default(), Passes::CLEAR_IDIOM | Passes::FUSE);
    }
}
