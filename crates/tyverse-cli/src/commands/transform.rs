use tyverse_compiler::{DumpConfig, Transform, dump_transform};

use super::CommandError;
use super::loader::{InputArgs, load_clean_universe};

pub struct TransformArgs {
    pub input: InputArgs,
    pub name: Option<String>,
    pub json: bool,
    pub spans: bool,
    pub annotations: bool,
    pub color: bool,
}

pub fn execute(args: &TransformArgs) -> Result<String, CommandError> {
    let universe = load_clean_universe(&args.input, args.color)?;

    let selected: Vec<&Transform> = match &args.name {
        Some(name) => vec![
            universe
                .transform(name)
                .ok_or_else(|| CommandError::UnknownTransform(name.clone()))?,
        ],
        None => universe.transforms().iter().collect(),
    };

    if args.json {
        let json = match (&args.name, selected.as_slice()) {
            (Some(_), [transform]) => serde_json::to_string_pretty(transform)?,
            _ => serde_json::to_string_pretty(&selected)?,
        };
        return Ok(format!("{json}\n"));
    }

    let config = DumpConfig::new()
        .spans(args.spans)
        .annotations(args.annotations)
        .colored(args.color);
    Ok(selected
        .iter()
        .map(|t| dump_transform(t, &config))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn run(args: TransformArgs) {
    super::finish(execute(&args));
}
