//! typestr CLI
//!
//! Parses type descriptor strings and prints their canonical form.

use std::io::{self, BufRead};

use typestr::{init_tracing, parse_args, run, USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, mut sources) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    if options.help {
        println!("{USAGE}");
        return;
    }

    if sources.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => sources.push(line),
                Err(err) => {
                    eprintln!("error: failed to read stdin: {err}");
                    std::process::exit(2);
                }
            }
        }
    }
    if sources.is_empty() {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let report = run(&options, &sources);
    for result in &report.results {
        match result {
            Ok(canonical) => println!("{canonical}"),
            Err(rendered) => eprintln!("{rendered}"),
        }
    }
    if let Some(names) = &report.contained {
        for name in names {
            println!("{name}");
        }
    }
    if !report.success() {
        std::process::exit(1);
    }
}
