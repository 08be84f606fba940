// src/cli.rs
use std::env;
use std::error::Error;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: league_scrape <input_file> <output_file>";

pub struct Params {
    pub input: PathBuf,
    pub out: PathBuf,
}

/// Two positional arguments, nothing else. `-h` prints usage and exits 0.
pub fn parse_args() -> Result<Params, Box<dyn Error>> {
    parse_from(env::args().skip(1))
}

pub fn parse_from<I: Iterator<Item = String>>(args: I) -> Result<Params, Box<dyn Error>> {
    let mut input = None;
    let mut out = None;

    for a in args {
        if a == "-h" || a == "--help" {
            eprintln!("{}", USAGE);
            std::process::exit(0);
        } else if input.is_none() {
            input = Some(PathBuf::from(a));
        } else if out.is_none() {
            out = Some(PathBuf::from(a));
        } else {
            return Err(format!("Unexpected argument: {}", a).into());
        }
    }

    let input = input.ok_or("Missing input file")?;
    let out = out.ok_or("Missing output file")?;
    Ok(Params { input, out })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings<'a>(args: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
        args.iter().map(|a| s!(*a))
    }

    #[test]
    fn two_positionals_parse() {
        let p = parse_from(strings(&["in.html", "out/table.csv"])).unwrap();
        assert_eq!(p.input, PathBuf::from("in.html"));
        assert_eq!(p.out, PathBuf::from("out/table.csv"));
    }

    #[test]
    fn missing_arguments_are_errors() {
        assert!(parse_from(strings(&[])).is_err());
        assert!(parse_from(strings(&["in.html"])).is_err());
    }

    #[test]
    fn extra_arguments_are_errors() {
        assert!(parse_from(strings(&["a", "b", "c"])).is_err());
    }
}
