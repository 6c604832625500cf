use anyhow::{Context, Result};
use std::{env, fs, path::PathBuf, process};
use toybox_config::Config;
use toybox_engine::{BlockList, Submission, io};

mod script;

/// Where the starting block list comes from
enum Start {
    New,
    File(PathBuf),
}

struct Args {
    start: Start,
    edits: PathBuf,
    out: Option<PathBuf>,
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <blocks.json|--new> <edits.json> [--out <file>]");
    process::exit(1);
}

fn parse_args(args: &[String]) -> Option<Args> {
    let (start, edits, rest) = match args {
        [_, start, edits, rest @ ..] => (start, edits, rest),
        _ => return None,
    };

    let start = if start == "--new" {
        Start::New
    } else {
        Start::File(PathBuf::from(start))
    };

    let out = match rest {
        [] => None,
        [flag, path] if flag == "--out" => Some(PathBuf::from(path)),
        _ => return None,
    };

    Some(Args {
        start,
        edits: PathBuf::from(edits),
        out,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "toybox-cli".to_string());
    let Some(args) = parse_args(&args) else {
        usage(&program);
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let limits = config.editor.limits();

    let mut list = match &args.start {
        Start::New => BlockList::new(limits),
        Start::File(path) => {
            let records = io::read_records(path)
                .with_context(|| format!("reading blocks from {}", path.display()))?;
            BlockList::hydrate(records, limits)
                .with_context(|| format!("loading blocks from {}", path.display()))?
        }
    };
    log::info!("Editing {} blocks (limit {})", list.len(), limits.max_blocks);

    let script = fs::read_to_string(&args.edits)
        .with_context(|| format!("reading edit script {}", args.edits.display()))?;
    let ops = script::parse_script(&script)
        .with_context(|| format!("parsing edit script {}", args.edits.display()))?;

    for (step, op) in ops.into_iter().enumerate() {
        let cmd = op.into_cmd().with_context(|| format!("edit {step}"))?;
        let patch = list.apply(cmd);
        if let Some(rejection) = patch.rejection() {
            log::warn!("Edit {step} ignored: {rejection}");
        }
    }

    let submission = Submission::build(&list, &config.submission.naming())?;
    for part in &submission.files {
        log::info!(
            "File part {} <- {}",
            part.field_name,
            part.source_file.path().display()
        );
    }

    let records = list.serialize();
    match &args.out {
        Some(path) => {
            io::write_records(path, &records)?;
            log::info!("Wrote {} blocks to {}", records.len(), path.display());
        }
        None => println!("{}", io::records_to_json_pretty(&records)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_new_with_out() {
        let parsed = parse_args(&args(&["toybox-cli", "--new", "edits.json", "--out", "o.json"]))
            .unwrap();
        assert!(matches!(parsed.start, Start::New));
        assert_eq!(parsed.edits, PathBuf::from("edits.json"));
        assert_eq!(parsed.out, Some(PathBuf::from("o.json")));
    }

    #[test]
    fn test_parse_file_start() {
        let parsed = parse_args(&args(&["toybox-cli", "story.json", "edits.json"])).unwrap();
        assert!(matches!(parsed.start, Start::File(ref p) if p == &PathBuf::from("story.json")));
        assert_eq!(parsed.out, None);
    }

    #[test]
    fn test_parse_rejects_bad_arity() {
        assert!(parse_args(&args(&["toybox-cli"])).is_none());
        assert!(parse_args(&args(&["toybox-cli", "--new"])).is_none());
        assert!(parse_args(&args(&["toybox-cli", "--new", "e.json", "--out"])).is_none());
        assert!(parse_args(&args(&["toybox-cli", "--new", "e.json", "--verbose", "x"])).is_none());
    }
}
