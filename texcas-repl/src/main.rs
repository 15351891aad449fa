use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}};
use texcas_compute::{evaluate_with, EvalOptions, EvalOptionsBuilder, Step, TrigMode};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Evaluates the given expression, printing its trace and solution, or reporting its errors.
fn eval_line(input: &str, options: EvalOptions) {
    match evaluate_with(input, options) {
        Ok(evaluation) => {
            for step in &evaluation.trace.steps {
                match step {
                    Step::Expression(_) | Step::Solved { .. } => println!("  {}", step),
                    Step::Debug(_) => (),
                }
            }
            println!("{}", evaluation.solution);
        },
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr("input", input) {
                eprintln!("{}", io_err);
            }
        },
    }
}

/// Evaluates every non-empty line of the input.
fn eval_lines(input: &str, options: EvalOptions) {
    input.lines()
        .filter(|line| !line.trim().is_empty())
        .for_each(|line| eval_line(line, options));
}

fn main() -> io::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("could not install logger: {}", err);
    }

    let mut builder = EvalOptionsBuilder::new();
    let mut filename = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--radians" => builder = builder.trig_mode(TrigMode::Radians),
            _ => filename = Some(arg),
        }
    }
    let options = builder.build();

    if let Some(filename) = filename {
        // evaluate each line of the file
        let mut file = BufReader::new(File::open(filename)?);
        let mut input = String::new();
        file.read_to_string(&mut input)?;

        eval_lines(&input, options);
    } else if !io::stdin().is_terminal() {
        // evaluate each line of stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;

        eval_lines(&input, options);
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new().map_err(io::Error::other)?;

        fn process_line(rl: &mut DefaultEditor, options: EvalOptions) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            eval_line(&input, options);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, options) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }

    Ok(())
}
