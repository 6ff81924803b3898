use std::io::BufRead;

/// A blocking source of text lines, consulted only under `--stdin`.
pub trait LineSource {
    /// Produce the next line, without its trailing newline.
    /// `None` marks the end of the stream.
    fn next_line(&mut self) -> Option<String>;
}

/// Lines read from the process's standard input.
#[derive(Default)]
pub struct StdinLines {}

impl LineSource for StdinLines {
    fn next_line(&mut self) -> Option<String> {
        let mut line = String::default();

        match std::io::stdin().lock().read_line(&mut line) {
            // A read failure cannot be retried meaningfully; it ends the stream.
            Ok(0) | Err(_) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();

                    if line.ends_with('\r') {
                        line.pop();
                    }
                }

                Some(line)
            }
        }
    }
}

// Read lines up to (but excluding) the first empty line, or to the end of the stream.
// The concatenation is returned for inspection; the caller decides what to do with it.
pub(crate) fn drain(source: &mut dyn LineSource) -> String {
    let mut buffer = String::default();

    while let Some(line) = source.next_line() {
        if line.is_empty() {
            break;
        }

        buffer.push_str(&line);
    }

    buffer
}
