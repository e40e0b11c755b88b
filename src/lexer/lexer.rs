use super::{Instruction, LexerError, Position, Token};

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /** Human Readable positions in file */
    pub cur_line: usize,
    pub cur_col: usize,

    /** 'raw' format / offset within the file (in terms of 'codepoints') */
    pub codepoint_offset: usize,

    chars: std::str::Chars<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(chars: &'a str) -> Lexer<'a> {
        Lexer {
            cur_col: 1,
            cur_line: 1,

            codepoint_offset: 0,

            chars: chars.chars(),
        }
    }

    fn position(&self) -> Position {
        Position {
            line: self.cur_line,
            col: self.cur_col,
            offset: self.codepoint_offset,
        }
    }

    fn consume_char(&mut self) -> Option<char> {
        match self.chars.next() {
            Some(c) => {
                self.cur_col += 1;
                if c == '\n' {
                    self.cur_line += 1;
                    self.cur_col = 1;
                }
                self.codepoint_offset += 1;
                Some(c)
            }
            None => None,
        }
    }

    /// `Ok(None)` once the source is exhausted.
    /// Whitespace is not part of the language so it's rejected like any other character.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        let position = self.position();

        match self.consume_char() {
            Some(c) => match Instruction::from_char(c) {
                Some(instruction) => Ok(Some(Token {
                    instruction,
                    position,
                })),
                None => Err(LexerError::UnknownInstruction {
                    character: c,
                    position,
                }),
            },
            None => Ok(None),
        }
    }

    pub fn collect_results(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut v = vec![];
        while let Some(tok) = self.next_token()? {
            v.push(tok);
        }
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instructions(source: &str) -> Vec<Instruction> {
        Lexer::new(source)
            .collect_results()
            .unwrap()
            .into_iter()
            .map(|t| t.instruction)
            .collect()
    }

    #[test]
    fn lexes_every_symbol() {
        assert_eq!(
            instructions("><+-,.[]"),
            vec![
                Instruction::MoveForward,
                Instruction::MoveBackward,
                Instruction::Increase,
                Instruction::Decrease,
                Instruction::Read,
                Instruction::Write,
                Instruction::LoopStart,
                Instruction::LoopEnd,
            ]
        );
    }

    #[test]
    fn empty_source_is_empty_stream() {
        assert!(instructions("").is_empty());
    }

    #[test]
    fn tracks_positions() {
        let tokens = Lexer::new("+-.").collect_results().unwrap();
        assert_eq!(
            tokens[2].position,
            Position {
                line: 1,
                col: 3,
                offset: 2
            }
        );
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = Lexer::new("++a").collect_results().unwrap_err();
        assert_eq!(
            err,
            LexerError::UnknownInstruction {
                character: 'a',
                position: Position {
                    line: 1,
                    col: 3,
                    offset: 2
                }
            }
        );
    }

    #[test]
    fn rejects_whitespace() {
        let err = Lexer::new("+\n+").collect_results().unwrap_err();
        assert!(matches!(
            err,
            LexerError::UnknownInstruction { character: '\n', .. }
        ));
    }

    #[test]
    fn the_clear_symbol_is_not_source() {
        // `n` stands for clear-cell in some dialects, it's not an instruction here
        assert!(Lexer::new("n").collect_results().is_err());
    }
}
