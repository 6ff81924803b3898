//! `somme` is a command line summing utility.
//!
//! It reads signed decimal integers from its command line tokens, optionally from the
//! environment variables `NB0` through `NB9` (via `--env`), and reports their total.
//! The first token that does not parse as an integer aborts the run with an error.
//!
//! # Usage
//! ```console
//! $ somme 3 4 5
//! 12
//!
//! $ somme 3 abc
//! Le nombre n'est pas valide: abc
//!
//! $ NB0=10 NB2=20 somme --env
//! 30
//!
//! $ somme --help
//! USAGE: somme [--env] [--help] [--stdin] [nombres...]
//!  --env      Ajoute les variables d'environnement NB0 à NB9 à la somme.
//!  --help     Affiche ce message et quitte.
//!  --stdin    Consomme l'entrée standard jusqu'à une ligne vide.
//!  nombres    Entiers décimaux ajoutés à la somme.
//! ```
//!
//! # Structure
//! The binary is a thin shell over this library.
//! The scan itself lives in [`Accumulator`], which walks the tokens left to right and
//! produces an [`Action`]: either the completed total, or a request to print the help
//! message.
//! [`Dispatcher`] maps that outcome onto the console and an exit code.
//!
//! All side channels sit behind traits so the logic runs against in-memory stand-ins
//! under test:
//! * [`UserInterface`]: writes to standard output/error.
//! * [`Environment`]: reads the `NB0`..`NB9` slots.
//! * [`LineSource`]: reads lines for `--stdin`.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events from the scan loop.
#![deny(missing_docs)]
mod accumulator;
mod constant;
mod dispatcher;
mod environment;
mod input;
mod interface;
mod printer;

pub use accumulator::{Accumulator, Action, InvalidNumber};
pub use dispatcher::Dispatcher;
pub use environment::{Environment, ProcessEnvironment};
pub use input::{LineSource, StdinLines};
pub use interface::{ConsoleInterface, UserInterface};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
