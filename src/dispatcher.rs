use std::env;

use crate::accumulator::{Accumulator, Action};
use crate::environment::{Environment, ProcessEnvironment};
use crate::input::{LineSource, StdinLines};
use crate::interface::{ConsoleInterface, UserInterface};
use crate::printer::Printer;

/// The outer shell of `somme`: runs the token scan and turns its outcome into console
/// output and an exit code.
///
/// ### Example
/// ```no_run
/// use somme::Dispatcher;
///
/// Dispatcher::console("somme").dispatch();
/// ```
pub struct Dispatcher {
    program: String,
    printer: Printer,
    environment: Box<dyn Environment>,
    lines: Box<dyn LineSource>,
    user_interface: Box<dyn UserInterface>,
}

impl Dispatcher {
    /// Create a dispatcher wired to the real console, process environment, and standard
    /// input.
    pub fn console(program: impl Into<String>) -> Self {
        Self::new(
            program,
            Box::new(ProcessEnvironment::default()),
            Box::new(StdinLines::default()),
            Box::new(ConsoleInterface::default()),
        )
    }

    /// Create a dispatcher over explicit side channels.
    ///
    /// This is the seam for driving a complete run in memory: substitute stand-ins for
    /// any of the three channels and observe the output via your [`UserInterface`].
    pub fn new(
        program: impl Into<String>,
        environment: Box<dyn Environment>,
        lines: Box<dyn LineSource>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            printer: Printer::terminal(),
            environment,
            lines,
            user_interface,
        }
    }

    /// Run the dispatcher against the input tokens.
    ///
    /// * An empty token sequence prints the usage line to standard error and produces
    /// `Err(1)`.
    /// * A completed scan prints the total to standard output and produces `Ok(())`.
    /// * A `--help` token prints the help message to standard output and produces
    /// `Err(0)`.
    /// * The first invalid number prints `Le nombre n'est pas valide: ..` to standard
    /// error and produces `Err(1)`.
    pub fn dispatch_tokens(mut self, tokens: &[&str]) -> Result<(), i32> {
        if tokens.is_empty() {
            self.user_interface
                .print_error(self.printer.usage(&self.program));
            return Err(1);
        }

        let accumulator = Accumulator::new(&*self.environment, &mut *self.lines);

        match accumulator.consume(tokens) {
            Ok(Action::Total(total)) => {
                self.user_interface.print(total.to_string());
                Ok(())
            }
            Ok(Action::PrintHelp) => {
                self.printer
                    .print_help(&self.program, &*self.user_interface);
                Err(0)
            }
            Err(error) => {
                self.user_interface.print_error(error.to_string());
                Err(1)
            }
        }
    }

    /// Run the dispatcher against the Cli [`env::args`] and terminate the process.
    ///
    /// Exits with code `1` on a usage or invalid-number error, and with code `0` after
    /// printing the help message.
    /// A successful sum falls through after printing the total.
    pub fn dispatch(self) {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.dispatch_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(()) => {}
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::util::FakeEnvironment;
    use crate::input::util::{ClosedLines, FixedLines};
    use crate::interface::util::{channel_interface, ReceiverInterface};
    use crate::test::assert_contains;
    use rstest::rstest;

    fn dispatcher(
        environment: FakeEnvironment,
        lines: impl LineSource + 'static,
    ) -> (Dispatcher, ReceiverInterface) {
        let (sender, receiver) = channel_interface();
        let dispatcher =
            Dispatcher::new("somme", Box::new(environment), Box::new(lines), Box::new(sender));
        (dispatcher, receiver)
    }

    #[test]
    fn dispatch_tokens_empty() {
        // Setup
        let (dispatcher, receiver) =
            dispatcher(FakeEnvironment::default(), FixedLines::default());

        // Execute
        let error_code = dispatcher.dispatch_tokens(&[]).unwrap_err();

        // Verify
        assert_eq!(error_code, 1);

        let (message, error) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(
            error,
            Some("USAGE: somme [--env] [--help] [--stdin] [nombres...]".to_string())
        );
    }

    #[rstest]
    #[case(vec!["3", "4", "5"], "12")]
    #[case(vec!["0"], "0")]
    #[case(vec!["-3", "+4"], "1")]
    fn dispatch_tokens_total(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let (dispatcher, receiver) =
            dispatcher(FakeEnvironment::default(), FixedLines::default());

        // Execute
        dispatcher.dispatch_tokens(tokens.as_slice()).unwrap();

        // Verify
        let (message, error) = receiver.consume();
        assert_eq!(message, Some(expected.to_string()));
        assert_eq!(error, None);
    }

    #[rstest]
    #[case(vec!["--help"])]
    #[case(vec!["--help", "3", "abc"])]
    fn dispatch_tokens_help(#[case] tokens: Vec<&str>) {
        // Setup
        let (dispatcher, receiver) =
            dispatcher(FakeEnvironment::default(), FixedLines::default());

        // Execute
        let error_code = dispatcher.dispatch_tokens(tokens.as_slice()).unwrap_err();

        // Verify
        assert_eq!(error_code, 0);

        let (message, error) = receiver.consume();
        assert_eq!(error, None);
        let message = message.unwrap();
        assert_contains!(message, "USAGE: somme [--env] [--help] [--stdin] [nombres...]");
        assert_contains!(message, "--env");
        assert_contains!(message, "--stdin");
    }

    #[test]
    fn dispatch_tokens_invalid() {
        // Setup
        let (dispatcher, receiver) =
            dispatcher(FakeEnvironment::default(), FixedLines::default());

        // Execute
        let error_code = dispatcher
            .dispatch_tokens(vec!["3", "abc"].as_slice())
            .unwrap_err();

        // Verify
        assert_eq!(error_code, 1);

        let (message, error) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, Some("Le nombre n'est pas valide: abc".to_string()));
    }

    #[test]
    fn dispatch_tokens_env() {
        // Setup
        let (dispatcher, receiver) = dispatcher(
            FakeEnvironment::from([("NB0", "10"), ("NB1", ""), ("NB2", "20")]),
            FixedLines::default(),
        );

        // Execute
        dispatcher.dispatch_tokens(vec!["--env"].as_slice()).unwrap();

        // Verify
        let (message, error) = receiver.consume();
        assert_eq!(message, Some("30".to_string()));
        assert_eq!(error, None);
    }

    #[test]
    fn dispatch_tokens_env_invalid() {
        // Setup
        let (dispatcher, receiver) = dispatcher(
            FakeEnvironment::from([("NB3", "x")]),
            FixedLines::default(),
        );

        // Execute
        let error_code = dispatcher
            .dispatch_tokens(vec!["--env"].as_slice())
            .unwrap_err();

        // Verify
        assert_eq!(error_code, 1);

        let (message, error) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, Some("Le nombre n'est pas valide: x".to_string()));
    }

    #[rstest]
    #[case(vec!["3", "4", "5"])]
    #[case(vec!["--env"])]
    #[case(vec!["--help"])]
    fn dispatch_tokens_without_stdin_never_reads(#[case] tokens: Vec<&str>) {
        // Setup
        let (dispatcher, receiver) =
            dispatcher(FakeEnvironment::default(), ClosedLines::default());

        // Execute & verify (ClosedLines panics when read)
        let _ = dispatcher.dispatch_tokens(tokens.as_slice());
        receiver.consume();
    }

    #[test]
    fn dispatch_tokens_stdin_drained() {
        // Setup
        let (dispatcher, receiver) = dispatcher(
            FakeEnvironment::default(),
            FixedLines::from(vec!["90", "91", "", "92"]),
        );

        // Execute
        dispatcher
            .dispatch_tokens(vec!["--stdin", "8"].as_slice())
            .unwrap();

        // Verify
        let (message, error) = receiver.consume();
        assert_eq!(message, Some("8".to_string()));
        assert_eq!(error, None);
    }
}
