use super::CommandError;
use super::loader::{InputArgs, load_clean_universe};

pub struct CheckArgs {
    pub input: InputArgs,
    pub color: bool,
}

/// Silent on success (like cargo check).
pub fn execute(args: &CheckArgs) -> Result<String, CommandError> {
    load_clean_universe(&args.input, args.color)?;
    Ok(String::new())
}

pub fn run(args: CheckArgs) {
    super::finish(execute(&args));
}
