use tyverse_compiler::{DumpConfig, dump_domain, dump_universe};

use super::CommandError;
use super::loader::{InputArgs, load_clean_universe};

pub struct DumpArgs {
    pub input: InputArgs,
    pub domain: Option<String>,
    pub json: bool,
    pub spans: bool,
    pub annotations: bool,
    pub color: bool,
}

pub fn execute(args: &DumpArgs) -> Result<String, CommandError> {
    let universe = load_clean_universe(&args.input, args.color)?;

    let selected = match &args.domain {
        Some(tag) => Some(
            universe
                .domain(tag)
                .ok_or_else(|| CommandError::UnknownDomain(tag.clone()))?,
        ),
        None => None,
    };

    if args.json {
        let json = match selected {
            Some(domain) => serde_json::to_string_pretty(domain)?,
            None => serde_json::to_string_pretty(&universe.domains().collect::<Vec<_>>())?,
        };
        return Ok(format!("{json}\n"));
    }

    let config = DumpConfig::new()
        .spans(args.spans)
        .annotations(args.annotations)
        .colored(args.color);
    Ok(match selected {
        Some(domain) => dump_domain(domain, &config),
        None => dump_universe(&universe, &config),
    })
}

pub fn run(args: DumpArgs) {
    super::finish(execute(&args));
}
