use std::{env, process};

use velox_lang::Velox;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut velox = Velox::new();

    match args.len() {
        n if n > 2 => {
            println!("Usage: velox [script]");
            process::exit(64);
        },
        2 => velox.run_file(&args[1]),
        _ => velox.run_prompt(),
    };
}
