pub mod ast_interpreter;
pub mod tape;

use thiserror::Error;

use self::tape::Tape;

/// Cells allocated before the program starts, the tape still grows past this
pub const DEFAULT_TAPE_SIZE: usize = 30_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("Tried to read past the end of the input ({consumed:} bytes were consumed)")]
    InputExhausted { consumed: usize },
}

/// Everything a single run of a program owns, built fresh per run and dropped after it
pub struct Runtime {
    /// Pointer into the tape
    data_pointer: isize,

    tape: Tape,

    input: Vec<u8>,
    /// Next unread byte of `input`
    input_cursor: usize,
    output: Vec<u8>,
}

impl Runtime {
    pub fn new(input: Vec<u8>) -> Self {
        Self::with_tape(Tape::default(), input)
    }

    pub fn with_tape_capacity(capacity: usize, input: Vec<u8>) -> Self {
        Self::with_tape(Tape::new(capacity), input)
    }

    fn with_tape(tape: Tape, input: Vec<u8>) -> Self {
        Self {
            data_pointer: 0,
            tape,
            input,
            input_cursor: 0,
            output: vec![],
        }
    }

    /// Read `len` bytes from the input, one at a time, into the cell at the data pointer
    pub fn read(&mut self, len: usize) -> Result<(), RuntimeError> {
        for _ in 0..len {
            let byte = *self
                .input
                .get(self.input_cursor)
                .ok_or(RuntimeError::InputExhausted {
                    consumed: self.input_cursor,
                })?;
            self.input_cursor += 1;
            self.tape.set(self.data_pointer, byte);
        }
        Ok(())
    }

    /// Write the cell at the data pointer to the output `len` times
    pub fn write(&mut self, len: usize) {
        for _ in 0..len {
            let value = self.tape.get(self.data_pointer);
            self.output.push(value);
        }
    }

    /// Adds `count` (mod 256) in one step
    pub fn deref_and_add_value(&mut self, count: usize) {
        self.tape.add(self.data_pointer, count as u8);
    }

    pub fn deref_and_sub_value(&mut self, count: usize) {
        self.tape.sub(self.data_pointer, count as u8);
    }

    pub fn clear_value(&mut self) {
        self.tape.set(self.data_pointer, 0);
    }

    pub fn shift_data_pointer(&mut self, by: isize) {
        self.data_pointer = Tape::advance(self.data_pointer, by);
        // moving never touches the tape, cells are only materialized once written to
    }

    /// is the value at the data pointer zero?
    pub fn value_is_zero(&self) -> bool {
        self.tape.get(self.data_pointer) == 0
    }

    pub fn data_pointer(&self) -> isize {
        self.data_pointer
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn into_output(self) -> Vec<u8> {
        self.output
    }
}
