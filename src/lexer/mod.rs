use std::fmt;

use thiserror::Error;

pub mod lexer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    // `>`: Move the `data pointer` forward by one
    MoveForward,
    // `<`: Move the `data pointer` backward by one
    MoveBackward,

    // `+`: Increase the byte at the `data pointer` by one
    Increase,
    // `-`: Decrease the byte at the `data pointer` by one
    Decrease,

    // `,`: Read the next byte from the input and store it at the `data pointer`
    Read,
    // `.`: Write the byte at the `data pointer` to the output
    Write,

    // `[`: Run the enclosed block while the byte at the `data pointer` is non-zero
    LoopStart,
    // `]`: Closes the block opened by the matching `[`
    LoopEnd,

    // `[-]` / `[+]`: Set the byte at the `data pointer` to zero
    // never produced by the lexer, only by the clear idiom rewrite
    ClearCell,
}

impl Instruction {
    pub fn from_char(c: char) -> Option<Instruction> {
        match c {
            '>' => Some(Instruction::MoveForward),
            '<' => Some(Instruction::MoveBackward),
            '+' => Some(Instruction::Increase),
            '-' => Some(Instruction::Decrease),
            ',' => Some(Instruction::Read),
            '.' => Some(Instruction::Write),
            '[' => Some(Instruction::LoopStart),
            ']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Instruction::MoveForward => ">",
            Instruction::MoveBackward => "<",
            Instruction::Increase => "+",
            Instruction::Decrease => "-",
            Instruction::Read => ",",
            Instruction::Write => ".",
            Instruction::LoopStart => "[",
            Instruction::LoopEnd => "]",
            Instruction::ClearCell => "[-]",
        }
    }

    /// Loop delimiters are never fused, the parser turns each pair into a `Node::Loop`
    pub fn is_loop_delimiter(&self) -> bool {
        matches!(self, Instruction::LoopStart | Instruction::LoopEnd)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /** Human Readable position in the source (1-based) */
    pub line: usize,
    pub col: usize,

    /** 'raw' offset within the source (in terms of 'codepoints', 0-based) */
    pub offset: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub instruction: Instruction,
    pub position: Position,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Unknown instruction {character:?} at {position:}")]
    UnknownInstruction { character: char, position: Position },
}
