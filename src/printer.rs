use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::interface::UserInterface;

const MAIN_INDENT: usize = 1;
const PADDING_WIDTH: usize = 4;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_DESCRIPTION_WIDTH: usize = 17;

// Applies when the terminal width cannot be detected (ex: output is piped).
const DEFAULT_DESCRIPTION_WIDTH: usize = 68;

pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    pub(crate) fn usage(&self, program: &str) -> String {
        format!("USAGE: {program} [{ENV_FLAG}] [{HELP_FLAG}] [{STDIN_FLAG}] [{NUMBERS_NAME}...]")
    }

    pub(crate) fn print_help(&self, program: &str, user_interface: &(dyn UserInterface)) {
        user_interface.print(self.usage(program));

        let rows = [
            (
                ENV_FLAG,
                "Ajoute les variables d'environnement NB0 à NB9 à la somme.",
            ),
            (HELP_FLAG, "Affiche ce message et quitte."),
            (STDIN_FLAG, "Consomme l'entrée standard jusqu'à une ligne vide."),
            (NUMBERS_NAME, "Entiers décimaux ajoutés à la somme."),
        ];
        let left_column_width = rows
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .expect("internal error - the parameter rows cannot be empty");
        let description_width = match self.terminal_width {
            Some(terminal_width) => std::cmp::max(
                MINIMUM_DESCRIPTION_WIDTH,
                terminal_width.saturating_sub(MAIN_INDENT + left_column_width + PADDING_WIDTH),
            ),
            None => DEFAULT_DESCRIPTION_WIDTH,
        };

        for (name, description) in rows {
            for (i, part) in chunk(description, description_width).iter().enumerate() {
                if i == 0 {
                    user_interface.print(format!(
                        "{:MAIN_INDENT$}{:left_column_width$}{:PADDING_WIDTH$}{}",
                        "", name, "", part
                    ));
                } else {
                    user_interface.print(format!(
                        "{:MAIN_INDENT$}{:left_column_width$}{:PADDING_WIDTH$}{}",
                        "", "", "", part
                    ));
                }
            }
        }
    }
}

// Wrap a paragraph into lines no wider than `width`, breaking on spaces.
// A single word wider than `width` overflows its line.
fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
