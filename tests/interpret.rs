use brainluck::{
    compile, interpret, interpret_with,
    interpreter::{ast_interpreter::AstInterpreter, Runtime, RuntimeError},
    lexer::{LexerError, Position},
    parser::ParserError,
    Error, Passes,
};

const HELLO_WORLD: &str = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.";
const ADD_TWO_CELLS: &str = ",>,<[>[->+>+<<]>>[-<<+>>]<<<-]>>.";

fn with_byte(text: &str, byte: u8) -> Vec<u8> {
    let mut input = text.as_bytes().to_vec();
    input.push(byte);
    input
}

#[test]
fn echo_until_255() {
    assert_eq!(
        interpret(",+[-.,+]", &with_byte("Codewars", 255)).unwrap(),
        b"Codewars"
    );
}

#[test]
fn echo_until_zero() {
    assert_eq!(
        interpret(",[.[-],]", &with_byte("Codewars", 0)).unwrap(),
        b"Codewars"
    );
}

#[test]
fn multiplies_two_inputs() {
    assert_eq!(interpret(ADD_TWO_CELLS, &[8, 9]).unwrap(), vec![72]);
}

#[test]
fn eight_times_eight() {
    assert_eq!(
        interpret("++++++++[>++++++++<-]>.", b"").unwrap(),
        vec![64]
    );
}

#[test]
fn hello_world() {
    assert_eq!(interpret(HELLO_WORLD, b"").unwrap(), b"Hello World!");
}

#[test]
fn empty_program_has_no_output() {
    assert_eq!(interpret("", b"unused").unwrap(), b"");
}

#[test]
fn output_bytes_are_not_reencoded() {
    // 200 isn't ascii, it comes back as the single byte 200
    let source = format!("{}.-.", "+".repeat(200));
    assert_eq!(interpret(&source, b"").unwrap(), vec![200, 199]);
    assert_eq!(interpret("-.", b"").unwrap(), vec![255]);
}

#[test]
fn fused_writes_emit_every_copy() {
    assert_eq!(interpret(",....", b"x").unwrap(), b"xxxx");
}

#[test]
fn fusing_does_not_change_behaviour() {
    let programs: &[(&str, &[u8])] = &[
        (HELLO_WORLD, b""),
        (ADD_TWO_CELLS, &[8, 9]),
        (ADD_TWO_CELLS, &[255, 3]),
        (",+[-.,+]", b"Codewars\xff"),
        (",[.[-],]", b"Codewars\x00"),
        ("++++++++[>++++++++<-]>.", b""),
        ("<<<+++[>>>++<<<-]>>>.<<<<<<<<---.", b""),
        ("+++[->+++[->+++<]<]>>.", b""),
        (",,,..>,,.<.", b"abcdefg"),
        ("++++[-]+.>--[+]-.", b""),
    ];

    for (source, input) in programs {
        let fused = interpret_with(source, input, Passes::all()).unwrap();
        let unfused = interpret_with(source, input, Passes::empty()).unwrap();
        let fuse_only = interpret_with(source, input, Passes::FUSE).unwrap();
        let idiom_only = interpret_with(source, input, Passes::CLEAR_IDIOM).unwrap();
        assert_eq!(fused, unfused, "{source}");
        assert_eq!(fuse_only, unfused, "{source}");
        assert_eq!(idiom_only, unfused, "{source}");
    }
}

#[test]
fn increase_then_decrease_round_trips() {
    for v in (0..256).step_by(17) {
        for k in 0..256 {
            let source = format!("{}{}{}.", "+".repeat(v), "+".repeat(k), "-".repeat(k));
            for passes in [Passes::all(), Passes::empty()] {
                assert_eq!(
                    interpret_with(&source, b"", passes).unwrap(),
                    vec![v as u8],
                    "v = {v}, k = {k}"
                );
            }
        }
    }
}

#[test]
fn clear_idiom_matches_the_loop() {
    for v in 0..256 {
        let prefix = "+".repeat(v);
        for body in ["[-]", "[+]"] {
            let source = format!("{prefix}{body}.>+.");
            let rewritten = interpret_with(&source, b"", Passes::all()).unwrap();
            let looped = interpret_with(&source, b"", Passes::FUSE).unwrap();
            // cell cleared, pointer still on it, next cell untouched
            assert_eq!(rewritten, vec![0, 1]);
            assert_eq!(rewritten, looped);
        }
    }
}

#[test]
fn unbalanced_brackets_never_run() {
    assert!(matches!(
        interpret("[", b""),
        Err(Error::Parser(ParserError::UnclosedLoopStart { .. }))
    ));
    assert!(matches!(
        interpret("]", b""),
        Err(Error::Parser(ParserError::UnmatchedLoopEnd { .. }))
    ));
    // the write before the bad bracket is never executed
    assert!(interpret("+.]", b"").is_err());
    assert!(interpret("+.[", b"").is_err());
}

#[test]
fn unknown_characters_are_rejected() {
    assert_eq!(
        interpret("+ +", b""),
        Err(Error::Lexer(LexerError::UnknownInstruction {
            character: ' ',
            position: Position {
                line: 1,
                col: 2,
                offset: 1
            }
        }))
    );
    assert!(interpret("+n", b"").is_err());
}

#[test]
fn reading_past_the_input_fails() {
    assert_eq!(
        interpret(",", b""),
        Err(Error::Runtime(RuntimeError::InputExhausted { consumed: 0 }))
    );
    // partial output is dropped
    assert_eq!(
        interpret(",.,.", b"a"),
        Err(Error::Runtime(RuntimeError::InputExhausted { consumed: 1 }))
    );
}

#[test]
fn runs_are_independent() {
    let program = compile("+.>,.", Passes::all()).unwrap();

    for input in [b"a", b"b"] {
        let mut runtime = Runtime::new(input.to_vec());
        AstInterpreter::new()
            .interpret(&mut runtime, &program)
            .unwrap();
        assert_eq!(runtime.output(), &[1, input[0]]);
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        interpret("]", b"").unwrap_err().to_string(),
        "Can't find the `[` for the `]` at 1:1"
    );
    assert_eq!(
        interpret("a", b"").unwrap_err().to_string(),
        "Unknown instruction 'a' at 1:1"
    );
}

#[test]
fn deeply_nested_program_compiles_and_drops() {
    let depth = 200_000;
    let source = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let program = compile(&source, Passes::all()).unwrap();
    assert_eq!(program.block_count(), depth + 1);
    drop(program);
}

#[test]
fn deeply_nested_program_runs() {
    let depth = 200_000;
    let source = format!("+{}.-{}.", "[".repeat(depth), "]".repeat(depth));
    assert_eq!(interpret(&source, b"").unwrap(), vec![1, 0]);
    assert_eq!(
        interpret_with(&source, b"", Passes::empty()).unwrap(),
        vec![1, 0]
    );
}
