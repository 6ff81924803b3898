use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::constant::*;
use crate::environment::{slots, Environment};
use crate::input::{drain, LineSource};

/// A token that failed decimal integer parsing.
/// Renders the raw (untrimmed) value exactly as it was received.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Le nombre n'est pas valide: {0}")]
pub struct InvalidNumber(pub(crate) String);

/// The completion of a token scan.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Every token was consumed; the scan accumulated this total.
    Total(i64),
    /// A `--help` token was encountered; the remaining tokens were not examined.
    PrintHelp,
}

// The control flags and the fallthrough literal case.
// Anything that isn't a flag is a candidate number; there is no "unknown flag" class.
enum Token<'t> {
    Help,
    Env,
    Stdin,
    Literal(&'t str),
}

impl<'t> From<&'t str> for Token<'t> {
    fn from(token: &'t str) -> Self {
        match token {
            HELP_FLAG => Token::Help,
            ENV_FLAG => Token::Env,
            STDIN_FLAG => Token::Stdin,
            literal => Token::Literal(literal),
        }
    }
}

/// The token scan at the heart of `somme`.
///
/// Walks the tokens left to right, adding every parsed literal to a running total.
/// The scan has three early exits: `--help` completes immediately with
/// [`Action::PrintHelp`], and the first unparseable number (from the tokens or from an
/// environment slot) aborts with [`InvalidNumber`].
///
/// ### Example
/// ```
/// use somme::{Accumulator, Action, ProcessEnvironment, StdinLines};
///
/// let mut lines = StdinLines::default();
/// let environment = ProcessEnvironment::default();
/// let accumulator = Accumulator::new(&environment, &mut lines);
/// let action = accumulator.consume(vec!["1", "2", "3"].as_slice()).unwrap();
/// assert_eq!(action, Action::Total(6));
/// ```
pub struct Accumulator<'a> {
    environment: &'a dyn Environment,
    lines: &'a mut dyn LineSource,
}

impl<'a> Accumulator<'a> {
    /// Create an accumulator over the given environment and line source.
    ///
    /// The line source is only ever read when a `--stdin` token is consumed.
    pub fn new(environment: &'a dyn Environment, lines: &'a mut dyn LineSource) -> Self {
        Self { environment, lines }
    }

    /// Consume the tokens in order, producing the scan outcome.
    ///
    /// * `--help`: complete with [`Action::PrintHelp`] without examining the rest.
    /// * `--env`: fold the slots `NB0`..`NB9` into the total, in index order.
    /// Absent and blank slots are skipped; a non-blank slot that fails to parse aborts
    /// the scan.
    /// Every occurrence of the flag performs a full slot pass.
    /// * `--stdin`: drain the line source up to an empty line (or the end of the
    /// stream).
    /// The drained text does not contribute to the total.
    /// * anything else: parse as a decimal integer and add it to the total.
    pub fn consume(self, tokens: &[&str]) -> Result<Action, InvalidNumber> {
        let Accumulator { environment, lines } = self;
        let mut total: i64 = 0;

        for token in tokens {
            match Token::from(*token) {
                Token::Help => {
                    return Ok(Action::PrintHelp);
                }
                Token::Env => {
                    for slot in slots() {
                        match environment.get(&slot) {
                            Some(value) if !value.trim().is_empty() => {
                                let number = parse(&value)?;
                                #[cfg(feature = "tracing_debug")]
                                {
                                    debug!("Slot {slot} contributes {number}.");
                                }

                                total += number;
                            }
                            // Absent and blank slots are skipped, not errors.
                            _ => continue,
                        }
                    }
                }
                Token::Stdin => {
                    // The drained text is deliberately unused; `--stdin` only consumes
                    // the stream up to the first empty line.
                    drain(lines);
                }
                Token::Literal(literal) => {
                    let number = parse(literal)?;
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token '{literal}' contributes {number}.");
                    }

                    total += number;
                }
            }
        }

        Ok(Action::Total(total))
    }
}

// Surrounding whitespace is tolerated; the error carries the raw value.
fn parse(raw: &str) -> Result<i64, InvalidNumber> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InvalidNumber(raw.to_string()))
}
