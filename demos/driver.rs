//! Polynomial Driver
//!
//! Reads one line holding a polynomial in the text encoding, from the file
//! named by the first argument or from stdin when no argument is given. It
//! combines that polynomial with a couple of fixed ones and prints each result
//! in the text encoding.
//!
//! Run with: echo "6+5x3" | cargo run --example driver
//!       or: cargo run --example driver -- poly.txt

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use sparsepoly::Poly;

/// Read the first line from `reader`, without its line terminator.
fn read_expression<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}

fn main() -> Result<(), Box<dyn Error>> {
    let line = match std::env::args().nth(1) {
        Some(path) => read_expression(BufReader::new(File::open(path)?))?,
        None => read_expression(io::stdin().lock())?,
    };
    let input: Poly = line.parse()?;

    println!("=== Sparse Polynomials ===\n");
    println!("input = {}", input);
    println!("zero(3) = {}", Poly::zero().eval(3.0));

    let p1 = Poly::new(vec![6.0, 0.0, 0.0, 5.0]);
    let p2 = Poly::new(vec![0.0, -2.0, 0.0, 0.0, -9.0]);
    println!("p1 = {}", p1);
    println!("p2 = {}", p2);

    let s = &p1 + &p2;
    println!("s = p1 + p2 = {}", s);
    println!("s(0.1) = {}", s.eval(0.1));
    if s.has_root(1.0) {
        println!("1 is a root of s");
    } else {
        println!("1 is not a root of s");
    }

    println!("input + s = {}", &input + &s);
    println!("input * p1 = {}", &input * &p1);
    println!("input(1) = {}", input.eval(1.0));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_line_only() {
        let line = read_expression("6+5x3\n-2x\n".as_bytes()).unwrap();
        assert_eq!(line, "6+5x3");
    }

    #[test]
    fn strips_crlf() {
        let line = read_expression("x-1\r\n".as_bytes()).unwrap();
        assert_eq!(line, "x-1");
    }

    #[test]
    fn empty_input_parses_as_zero() {
        let line = read_expression(io::empty()).unwrap();
        assert!(line.parse::<Poly>().unwrap().is_zero());
    }

    #[test]
    fn line_without_terminator() {
        let line = read_expression("-9x4".as_bytes()).unwrap();
        assert_eq!(line.parse::<Poly>().unwrap(), Poly::monomial(-9.0, 4));
    }
}
