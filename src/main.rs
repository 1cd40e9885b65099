use std::io::{self, BufRead};

use tokparsec::calc::{Calculator, Evaluator, Printer};

enum Mode {
    Evaluate(Calculator<Evaluator>),
    Print(Calculator<Printer>),
}

impl Mode {
    fn eval_line(&self, line: &str) -> anyhow::Result<()> {
        match self {
            Mode::Evaluate(calc) => println!("{}", calc.run(line)?),
            Mode::Print(calc) => println!("{}", calc.run(line)?),
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut print = false;
    let mut exprs = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--print" | "-p" => print = true,
            _ => exprs.push(arg),
        }
    }

    let mode = if print {
        Mode::Print(Calculator::new(Printer))
    } else {
        Mode::Evaluate(Calculator::new(Evaluator))
    };

    if !exprs.is_empty() {
        for expr in &exprs {
            mode.eval_line(expr)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = mode.eval_line(&line) {
            eprintln!("{e}");
        }
    }

    Ok(())
}
