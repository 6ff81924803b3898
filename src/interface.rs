/// The output half of the program: one line at a time, to either stream.
///
/// [`Dispatcher`](crate::Dispatcher) writes every user-visible line through this trait,
/// which keeps the whole program observable in memory under test.
pub trait UserInterface {
    /// Write a line to standard output.
    fn print(&self, message: String);
    /// Write a line to standard error.
    fn print_error(&self, message: String);
}

/// The console: `println!` and `eprintln!`.
#[derive(Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}
