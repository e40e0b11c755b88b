use crate::lexer::{Instruction, Token};

fn is_clear_loop(window: &[Token]) -> bool {
    matches!(
        window,
        [
            Token {
                instruction: Instruction::LoopStart,
                ..
            },
            Token {
                instruction: Instruction::Increase | Instruction::Decrease,
                ..
            },
            Token {
                instruction: Instruction::LoopEnd,
                ..
            },
        ]
    )
}

/// Replaces every `[-]` and `[+]` with a single `ClearCell`.
///
/// Either loop always ends with the cell at zero (at most 256 iterations) and the
/// pointer where it started, so the rewrite never changes what a program does.
/// Matches are found left to right and don't overlap, `[[-]]` becomes `[` clear `]`
/// and is left at that.
pub fn clear_idiom(tokens: &[Token]) -> Vec<Token> {
    let mut instructions = Vec::with_capacity(tokens.len());
    let mut pc = 0;

    while pc < tokens.len() {
        if pc + 3 <= tokens.len() && is_clear_loop(&tokens[pc..pc + 3]) {
            // the clear takes over the position of the `[`
            instructions.push(Token {
                instruction: Instruction::ClearCell,
                position: tokens[pc].position,
            });
            pc += 3;
        } else {
            instructions.push(tokens[pc]);
            pc += 1;
        }
    }

    instructions
}
