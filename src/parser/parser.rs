use crate::{
    lexer::{Instruction, Position},
    optimizer::FusedOp,
};

use super::{BlockId, Node, Op, OpKind, ParserError, Program};

/// Turns the flat op stream into nested blocks.
///
/// The program scope sits at the bottom of `open` and is never popped,
/// every `[` opens a block (remembering where it was opened) and every `]` closes one.
pub struct Parser<'a> {
    ops: std::slice::Iter<'a, FusedOp>,
    program: Program,
    open: Vec<(BlockId, Position)>,
}

impl<'a> Parser<'a> {
    pub fn new(ops: &'a [FusedOp]) -> Parser<'a> {
        Parser {
            ops: ops.iter(),
            program: Program::default(),
            open: vec![(Program::ROOT, Position::default())],
        }
    }

    fn current_block(&self) -> BlockId {
        // there is always at least the program scope
        self.open.last().map_or(Program::ROOT, |(id, _)| *id)
    }

    fn push(&mut self, node: Node) {
        let current = self.current_block();
        self.program.block_mut(current).instructions.push(node);
    }

    fn close_block(&mut self, position: Position) -> Result<(), ParserError> {
        if self.open.len() <= 1 {
            return Err(ParserError::UnmatchedLoopEnd { position });
        }

        if let Some((body, _)) = self.open.pop() {
            self.push(Node::Loop(body));
        }
        Ok(())
    }

    pub fn parse_program(mut self) -> Result<Program, ParserError> {
        while let Some(op) = self.ops.next() {
            let kind = match op.instruction {
                Instruction::LoopStart => {
                    let body = self.program.new_block();
                    self.open.push((body, op.position));
                    continue;
                }
                Instruction::LoopEnd => {
                    self.close_block(op.position)?;
                    continue;
                }
                Instruction::MoveForward => OpKind::MoveForward,
                Instruction::MoveBackward => OpKind::MoveBackward,
                Instruction::Increase => OpKind::Increase,
                Instruction::Decrease => OpKind::Decrease,
                Instruction::Read => OpKind::Read,
                Instruction::Write => OpKind::Write,
                Instruction::ClearCell => OpKind::ClearCell,
            };

            self.push(Node::Op(Op {
                kind,
                count: op.count,
                position: op.position,
            }));
        }

        if self.open.len() > 1 {
            if let Some(&(_, position)) = self.open.last() {
                // report the innermost `[` that never got closed
                return Err(ParserError::UnclosedLoopStart { position });
            }
        }

        Ok(self.program)
    }
}
