use crate::parser::{BlockId, Node, Op, OpKind, Program};

use super::{Runtime, RuntimeError};

#[derive(Default)]
pub struct AstInterpreter {}

impl AstInterpreter {
    pub fn new() -> Self {
        Self {}
    }

    /// Walks the program with an explicit stack of `(block, next node)` frames,
    /// so nesting depth is bounded by memory rather than the call stack.
    pub fn interpret(
        &mut self,
        runtime: &mut Runtime,
        program: &Program,
    ) -> Result<(), RuntimeError> {
        let mut frames: Vec<(BlockId, usize)> = vec![(Program::ROOT, 0)];

        loop {
            let depth = frames.len();
            let Some(frame) = frames.last_mut() else {
                break;
            };

            match program.block(frame.0).instructions.get(frame.1) {
                Some(node) => {
                    frame.1 += 1;
                    match node {
                        Node::Op(op) => self.interpret_op(runtime, op)?,
                        Node::Loop(body) => {
                            if !runtime.value_is_zero() {
                                frames.push((*body, 0));
                            }
                        }
                    }
                }
                // end of a loop body, go round again while the cell is non-zero
                None if depth > 1 && !runtime.value_is_zero() => frame.1 = 0,
                // the upper-most block (program) doesn't repeat
                None => {
                    frames.pop();
                }
            }
        }

        Ok(())
    }

    fn interpret_op(&mut self, runtime: &mut Runtime, op: &Op) -> Result<(), RuntimeError> {
        match op.kind {
            OpKind::MoveForward => runtime.shift_data_pointer(op.count as isize),
            OpKind::MoveBackward => runtime.shift_data_pointer(-(op.count as isize)),
            OpKind::Increase => runtime.deref_and_add_value(op.count),
            OpKind::Decrease => runtime.deref_and_sub_value(op.count),
            OpKind::ClearCell => runtime.clear_value(),
            OpKind::Read => runtime.read(op.count)?,
            OpKind::Write => runtime.write(op.count),
        }
        Ok(())
    }
}
