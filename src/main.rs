use std::{env, fs, process};

use lexline::report::report::{payload, render_table, TokenCounts};
use lexline::{segment, ScanMode};
use rustyline::{error::ReadlineError, Editor};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {} <file>", args[0]);
        process::exit(1);
    }

    let contents = match fs::read_to_string(&args[1]) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("failed to read {}: {}", args[1], err);
            process::exit(1);
        }
    };

    let lines: Vec<&str> = contents.lines().collect();
    println!("{} lines loaded from {}", lines.len(), args[1]);

    let mut rl = match Editor::<()>::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("failed to open terminal: {:?}", err);
            process::exit(1);
        }
    };

    loop {
        println!();
        println!("1) first 10 lines");
        println!("2) last 10 lines");
        println!("3) all lines");
        println!("q) quit");

        let choice = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        };
        rl.add_history_entry(choice.as_str());

        let selected: &[&str] = match choice.trim() {
            "1" => &lines[..lines.len().min(10)],
            "2" => &lines[lines.len().saturating_sub(10)..],
            "3" => &lines[..],
            "q" | "Q" => break,
            other => {
                println!("unrecognized option: {:?}", other);
                continue;
            }
        };

        let mode = match read_mode(&mut rl) {
            Some(mode) => mode,
            None => break,
        };

        report_batch(selected, mode);
    }
}

fn read_mode(rl: &mut Editor<()>) -> Option<ScanMode> {
    loop {
        let line = match rl.readline("mode [s]treaming / [w]hole-fragment (default s)> ") {
            Ok(line) => line,
            Err(_) => return None,
        };

        match line.trim() {
            "" | "s" | "S" => return Some(ScanMode::Streaming),
            "w" | "W" => return Some(ScanMode::WholeFragment),
            other => println!("unrecognized mode: {:?}", other),
        }
    }
}

fn report_batch(lines: &[&str], mode: ScanMode) {
    let mut counts = TokenCounts::new();

    for line in lines.iter() {
        let tokens = segment(payload(line), mode);

        println!();
        println!("{}", line);
        print!("{}", render_table(&tokens));

        counts.observe_all(&tokens);
    }

    println!();
    print!("{}", counts.summary());
}
