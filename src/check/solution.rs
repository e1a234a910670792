//! Solution text parsing.
//!
//! Accepted layouts, detected from the characters present:
//!
//! | Layout | Example | Meaning |
//! |--------|---------|---------|
//! | 0-1 vector | `0110`, `0 1 1 0`, `0,1,1,0` | One digit per variable, exactly `n` digits |
//! | Index list | `2 3` or one index per line | 1-based indices of variables set to 1 |
//! | Assignments | `x#2 1` per line | Lines starting with `x#`; others ignored |
//!
//! Variables not mentioned are 0.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Detected solution layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionFormat {
    /// Only whitespace.
    Empty,
    /// Digits `0`/`1` separated by optional whitespace or punctuation.
    ZeroOneVector,
    /// Decimal indices separated by whitespace or punctuation.
    IndexList,
    /// `x#<index> <0|1>` lines.
    Assignments,
}

fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c.is_ascii_punctuation()
}

/// Classifies `text`. Each layout is a superset of the previous one, so
/// the first character outside a layout's alphabet moves on to the next.
pub fn detect_format(text: &str) -> SolutionFormat {
    let mut format = SolutionFormat::Empty;
    for c in text.chars() {
        if format == SolutionFormat::Empty && !c.is_ascii_whitespace() {
            format = SolutionFormat::ZeroOneVector;
        }
        if format == SolutionFormat::ZeroOneVector && !is_separator(c) && c != '0' && c != '1' {
            format = SolutionFormat::IndexList;
        }
        if format == SolutionFormat::IndexList && !is_separator(c) && !c.is_ascii_digit() {
            return SolutionFormat::Assignments;
        }
    }
    format
}

/// Parses a solution for `num_vars` variables.
pub fn parse_solution(text: &str, num_vars: usize) -> Result<Vec<bool>> {
    match detect_format(text) {
        SolutionFormat::Empty => Err(Error::Solution("empty solution".into())),
        SolutionFormat::ZeroOneVector => parse_zero_one(text, num_vars),
        SolutionFormat::IndexList => parse_index_list(text, num_vars),
        SolutionFormat::Assignments => parse_assignments(text, num_vars),
    }
}

/// Whether a command-line argument is itself a 0-1 solution string.
pub fn is_inline_solution(arg: &str) -> bool {
    !arg.is_empty() && arg.chars().all(|c| c == '0' || c == '1')
}

fn parse_zero_one(text: &str, num_vars: usize) -> Result<Vec<bool>> {
    let mut solution = Vec::with_capacity(num_vars);
    for c in text.chars() {
        match c {
            '0' => solution.push(false),
            '1' => solution.push(true),
            c if is_separator(c) => {}
            c => {
                return Err(Error::Solution(format!("expected 0/1, found `{c}`")));
            }
        }
    }
    if solution.len() != num_vars {
        return Err(Error::Solution(format!(
            "expected {num_vars} values, found {}",
            solution.len()
        )));
    }
    Ok(solution)
}

fn parse_index_list(text: &str, num_vars: usize) -> Result<Vec<bool>> {
    let mut solution = vec![false; num_vars];
    for (lineno, line) in text.lines().enumerate() {
        for token in line.split(is_separator).filter(|t| !t.is_empty()) {
            let index: usize = token.parse().map_err(|_| {
                Error::Solution(format!("line {}: invalid index `{token}`", lineno + 1))
            })?;
            set_index(&mut solution, index, lineno + 1)?;
        }
    }
    Ok(solution)
}

fn assignment_pattern() -> Result<&'static Regex> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    if let Some(re) = PATTERN.get() {
        return Ok(re);
    }
    let re = Regex::new(r"(?m)^\s*x#(\d+)\s+([01])")
        .map_err(|e| Error::Solution(format!("assignment pattern: {e}")))?;
    Ok(PATTERN.get_or_init(|| re))
}

fn parse_assignments(text: &str, num_vars: usize) -> Result<Vec<bool>> {
    let mut solution = vec![false; num_vars];
    for (lineno, line) in text.lines().enumerate() {
        let Some(cap) = assignment_pattern()?.captures(line) else {
            continue;
        };
        let index: usize = cap[1].parse().map_err(|_| {
            Error::Solution(format!("line {}: invalid index `{}`", lineno + 1, &cap[1]))
        })?;
        if &cap[2] == "1" {
            set_index(&mut solution, index, lineno + 1)?;
        } else {
            check_index(index, num_vars, lineno + 1)?;
        }
    }
    Ok(solution)
}

fn check_index(index: usize, num_vars: usize, lineno: usize) -> Result<()> {
    if index == 0 || index > num_vars {
        return Err(Error::Solution(format!(
            "line {lineno}: variable index {index} outside 1..={num_vars}"
        )));
    }
    Ok(())
}

fn set_index(solution: &mut [bool], index: usize, lineno: usize) -> Result<()> {
    check_index(index, solution.len(), lineno)?;
    solution[index - 1] = true;
    Ok(())
}
