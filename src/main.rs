extern crate clap;
extern crate thiserror;

use std::{
    collections::HashSet,
    io::{self, Read, Write},
    process::ExitCode,
    time::Instant,
};

use brainluck::{
    interpreter::{ast_interpreter::AstInterpreter, Runtime, DEFAULT_TAPE_SIZE},
    lexer::lexer::Lexer,
    optimizer::optimize,
    parser::parser::Parser as ProgramParser,
    Passes,
};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use thiserror::Error;

/// Interpreter for the 8 instruction tape language
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to run, a single trailing line break is ignored
    #[arg(required_unless_present = "code", conflicts_with = "code")]
    file: Option<String>,

    /// Run this source instead of a file
    #[arg(short, long)]
    code: Option<String>,

    /// Input bytes for the program, stdin is read to the end when missing
    #[arg(short, long)]
    input: Option<String>,

    /// What to do with the program, defaults to `run`
    #[arg(long, value_enum)]
    commands: Vec<Commands>,

    #[arg(short, long, value_enum)]
    optimizations: Vec<Optimizations>,

    #[arg(short, long)]
    all_optimizations: bool,

    /// Run exactly what was written, one op per instruction
    #[arg(short, long, conflicts_with_all = ["optimizations", "all_optimizations"])]
    no_optimizations: bool,

    #[arg(short, long, default_value_t = DEFAULT_TAPE_SIZE)]
    tape_size: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, Hash, PartialEq, Eq)]
enum Optimizations {
    /// Replace `[-]` and `[+]` with a single clear
    ClearIdiom,
    /// Fold runs of the same instruction into one op
    Fuse,
}

impl From<Optimizations> for Passes {
    fn from(optimization: Optimizations) -> Self {
        match optimization {
            Optimizations::ClearIdiom => Passes::CLEAR_IDIOM,
            Optimizations::Fuse => Passes::FUSE,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Hash, PartialEq, Eq)]
enum Commands {
    /// Output the lexer
    Tokens,
    /// Output the ast
    Ast,
    /// Run the program
    Run,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("IO Error: {0}")]
    FileIO(#[from] io::Error),

    #[error(transparent)]
    Interpreter(#[from] brainluck::Error),
}

impl Args {
    fn passes(&self) -> Passes {
        if self.no_optimizations {
            Passes::empty()
        } else if self.all_optimizations || self.optimizations.is_empty() {
            Passes::all()
        } else {
            self.optimizations
                .iter()
                .fold(Passes::empty(), |passes, o| passes | Passes::from(*o))
        }
    }

    fn source(&self) -> Result<String, CliError> {
        match (&self.code, &self.file) {
            (Some(code), _) => Ok(code.clone()),
            (None, Some(file)) => {
                let mut text = std::fs::read_to_string(file)?;
                if text.ends_with('\n') {
                    text.pop();
                    if text.ends_with('\r') {
                        text.pop();
                    }
                }
                Ok(text)
            }
            // clap makes sure one of them is there
            (None, None) => Ok(String::new()),
        }
    }

    fn input(&self) -> Result<Vec<u8>, CliError> {
        match &self.input {
            Some(input) => Ok(input.clone().into_bytes()),
            None => {
                let mut input = vec![];
                io::stdin().read_to_end(&mut input)?;
                Ok(input)
            }
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut commands: HashSet<Commands> = HashSet::from_iter(args.commands.iter().cloned());
    if commands.is_empty() {
        commands.insert(Commands::Run);
    }
    let passes = args.passes();

    let text = args.source()?;

    eprintln!("{}", "Starting lexing".blue());
    let mut now = Instant::now();
    let tokens = Lexer::new(&text)
        .collect_results()
        .map_err(brainluck::Error::from)?;
    eprintln!("{} {:.2?}", "Finished lexing in".green(), now.elapsed());

    if commands.contains(&Commands::Tokens) {
        for token in tokens.iter() {
            print!("{}", token.instruction);
        }
        println!();
    }

    eprintln!("{} {:?}", "Starting optimizations".blue(), passes);
    now = Instant::now();
    let ops = optimize(&tokens, passes);
    eprintln!(
        "{} {} ops in {:.2?}",
        "Finished optimizations with".green(),
        ops.len(),
        now.elapsed()
    );

    eprintln!("{}", "Starting parsing".blue());
    now = Instant::now();
    let program = ProgramParser::new(&ops)
        .parse_program()
        .map_err(brainluck::Error::from)?;
    eprintln!("{} {:.2?}", "Finished parsing in".green(), now.elapsed());

    if commands.contains(&Commands::Ast) {
        println!("{:#?}", program);
    }

    if commands.contains(&Commands::Run) {
        let input = args.input()?;
        let mut runtime = Runtime::with_tape_capacity(args.tape_size, input);

        eprintln!("{}", "Starting ast-interpreter".blue());
        now = Instant::now();
        AstInterpreter::new()
            .interpret(&mut runtime, &program)
            .map_err(brainluck::Error::from)?;

        let mut stdout = io::stdout();
        stdout.write_all(runtime.output())?;
        stdout.flush()?;
        eprintln!();
        eprintln!(
            "{} {:.2?} ({} tape cells allocated)",
            "Finished ast-interpreter in".green(),
            now.elapsed(),
            runtime.tape().capacity()
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{0:}: {1:}", "Error".red(), e);
            ExitCode::FAILURE
        }
    }
}
