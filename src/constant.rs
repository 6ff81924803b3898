pub(crate) const HELP_FLAG: &str = "--help";
pub(crate) const ENV_FLAG: &str = "--env";
pub(crate) const STDIN_FLAG: &str = "--stdin";

pub(crate) const SLOT_PREFIX: &str = "NB";
pub(crate) const SLOT_COUNT: usize = 10;

pub(crate) const NUMBERS_NAME: &str = "nombres";
