//! Interactive acquisition of IVP parameters.
//!
//! [`collect_parameters`] asks for `a`, `b`, `y0` and `n` in that order and
//! keeps asking until all of them are valid:
//!
//! - a value that does not parse as a number restarts the attempt from `a`
//! - `a >= b` (or a non-finite bound) is reported right after `b` is entered
//!   and restarts from `a` before `y0` and `n` are requested
//! - an `n` that is not a positive integer is reported and restarts from `a`
//!
//! Every attempt starts over from the first field; values entered in a
//! rejected attempt are discarded. There is no retry limit. Only the end of
//! the input or an I/O failure ends the loop without parameters.

use std::{
    io::{self, BufRead, Write},
    num::IntErrorKind,
};

use ivp_core::ivp::{Grid, IvpParams, ParamsError};
use thiserror::Error;
use tracing::debug;

const PROMPT_A: &str = "Enter the lower bound a: ";
const PROMPT_B: &str = "Enter the upper bound b: ";
const PROMPT_Y0: &str = "Enter the initial value y0: ";
const PROMPT_N: &str = "Enter the number of steps n (positive integer): ";

/// Errors that end the acquisition loop without parameters.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before valid parameters were entered")]
    Closed,

    #[error("failed to read or write the prompt")]
    Io(#[from] io::Error),
}

/// Why an attempt was rejected. The display text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Rejection {
    #[error("invalid input: please enter numeric values")]
    NotANumber,

    #[error("n must be an integer")]
    NotInteger,

    #[error("n is too large")]
    TooManySteps,

    #[error(transparent)]
    Params(#[from] ParamsError),
}

enum Attempt {
    Rejected(Rejection),
    Failed(PromptError),
}

impl From<Rejection> for Attempt {
    fn from(rejection: Rejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl From<ParamsError> for Attempt {
    fn from(err: ParamsError) -> Self {
        Self::Rejected(Rejection::Params(err))
    }
}

impl From<PromptError> for Attempt {
    fn from(err: PromptError) -> Self {
        Self::Failed(err)
    }
}

impl From<io::Error> for Attempt {
    fn from(err: io::Error) -> Self {
        Self::Failed(PromptError::Io(err))
    }
}

/// Reads validated IVP parameters from `input`, writing prompts and
/// diagnostics to `output`.
///
/// Blocks until a full set of valid parameters has been entered.
///
/// # Errors
///
/// Returns [`PromptError::Closed`] if `input` ends first, or
/// [`PromptError::Io`] if reading or writing fails. Invalid values are never
/// returned as errors; they are reported on `output` and asked for again.
pub fn collect_parameters<R, W>(mut input: R, mut output: W) -> Result<IvpParams, PromptError>
where
    R: BufRead,
    W: Write,
{
    let mut attempts = 0_usize;
    loop {
        attempts += 1;
        match attempt(&mut input, &mut output) {
            Ok(params) => {
                debug!(attempts, "parameters accepted");
                return Ok(params);
            }
            Err(Attempt::Rejected(rejection)) => {
                debug!(attempts, %rejection, "parameters rejected");
                writeln!(output, "{rejection}")?;
            }
            Err(Attempt::Failed(err)) => return Err(err),
        }
    }
}

fn attempt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<IvpParams, Attempt> {
    let a = parse_real(&read_field(input, output, PROMPT_A)?)?;
    let b = parse_real(&read_field(input, output, PROMPT_B)?)?;
    Grid::check_bounds(a, b)?;

    let y0 = parse_real(&read_field(input, output, PROMPT_Y0)?)?;
    let n = parse_steps(&read_field(input, output, PROMPT_N)?)?;

    Ok(IvpParams::new(a, b, y0, n)?)
}

fn read_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, PromptError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Closed);
    }
    Ok(line.trim().to_owned())
}

fn parse_real(text: &str) -> Result<f64, Rejection> {
    text.parse().map_err(|_| Rejection::NotANumber)
}

fn parse_steps(text: &str) -> Result<usize, Rejection> {
    match text.parse::<i64>() {
        Ok(n) if n <= 0 => Err(ParamsError::ZeroSteps.into()),
        Ok(n) => usize::try_from(n).map_err(|_| Rejection::TooManySteps),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Err(Rejection::TooManySteps),
            IntErrorKind::NegOverflow => Err(ParamsError::ZeroSteps.into()),
            _ if text.parse::<f64>().is_ok() => Err(Rejection::NotInteger),
            _ => Err(Rejection::NotANumber),
        },
    }
}
