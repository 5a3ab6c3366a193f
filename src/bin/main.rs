use clap::Parser;
use frac_repl::prelude::*;
use log::info;
use rustyline::DefaultEditor;

#[derive(Parser, Debug)]
struct Args {
    /// Prompt printed before every line
    #[arg(long, default_value = ">> ")]
    prompt: String,
}

fn main() -> rustyline::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();
    let mut dispatcher = Dispatcher::new();

    let mut rl = DefaultEditor::new()?;
    loop {
        let command = rl.readline(&args.prompt);

        match command {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;

                match dispatcher.dispatch(&line) {
                    DispatchResult::Success(Some(message)) => println!("{}", message),
                    DispatchResult::Success(None) => {}
                    DispatchResult::Failure(message) => eprintln!("error: {}", message),
                }
            }
            Err(_) => break,
        };
    }

    info!("leaving with {}", dispatcher.current());
    Ok(())
}
