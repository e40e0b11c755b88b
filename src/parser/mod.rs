use thiserror::Error;

use crate::lexer::{Instruction, Position};

pub mod parser;

/// Everything but the loop delimiters, those only exist as `Node::Loop` once parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    MoveForward,
    MoveBackward,
    Increase,
    Decrease,
    Read,
    Write,
    ClearCell,
}

impl OpKind {
    pub fn instruction(&self) -> Instruction {
        match self {
            OpKind::MoveForward => Instruction::MoveForward,
            OpKind::MoveBackward => Instruction::MoveBackward,
            OpKind::Increase => Instruction::Increase,
            OpKind::Decrease => Instruction::Decrease,
            OpKind::Read => Instruction::Read,
            OpKind::Write => Instruction::Write,
            OpKind::ClearCell => Instruction::ClearCell,
        }
    }
}

/// `count` consecutive applications of `kind`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Op {
    pub kind: OpKind,
    pub count: usize,
    pub position: Position,
}

/// Index of a block inside its `Program`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Op(Op),

    /// Runs the body while the current cell is non-zero
    Loop(BlockId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasicBlock {
    pub instructions: Vec<Node>,
}

/// Every block of a program, loop bodies refer to each other by `BlockId`.
///
/// Kept flat so that nesting depth never turns into recursion depth,
/// dropping or cloning a program is a loop over `blocks` however deep the loops go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    blocks: Vec<BasicBlock>,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            blocks: vec![BasicBlock::default()],
        }
    }
}

impl Program {
    /// The top level scope, it runs once and never loops
    pub const ROOT: BlockId = BlockId(0);

    pub fn root(&self) -> &BasicBlock {
        self.block(Self::ROOT)
    }

    pub fn block(&self, id: BlockId) -> &BasicBlock {
        &self.blocks[id.0]
    }

    pub(crate) fn block_mut(&mut self, id: BlockId) -> &mut BasicBlock {
        &mut self.blocks[id.0]
    }

    /// Adds an empty block, it's reachable once a `Node::Loop` points at it
    pub(crate) fn new_block(&mut self) -> BlockId {
        self.blocks.push(BasicBlock::default());
        BlockId(self.blocks.len() - 1)
    }

    /// Root included
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Can't find the `[` for the `]` at {position:}")]
    UnmatchedLoopEnd { position: Position },

    #[error("Can't find the `]` for the `[` at {position:}")]
    UnclosedLoopStart { position: Position },
}
