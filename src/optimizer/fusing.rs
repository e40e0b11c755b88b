use crate::lexer::Token;

use super::FusedOp;

/// Folds every run of the same instruction into one `FusedOp`.
///
/// A run ends as soon as the instruction changes. `[` and `]` never join a run,
/// `[[` stays as two separate ops.
pub fn fuse(tokens: &[Token]) -> Vec<FusedOp> {
    let mut fused: Vec<FusedOp> = Vec::with_capacity(tokens.len());

    for token in tokens.iter() {
        match fused.last_mut() {
            Some(run)
                if run.instruction == token.instruction
                    && !token.instruction.is_loop_delimiter() =>
            {
                run.count += 1;
            }
            // either the first instruction or the previous run has ended
            _ => fused.push(FusedOp::from(token)),
        }
    }

    fused
}
