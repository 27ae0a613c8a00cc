use std::env;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct CliArgs {
    pub api_key: Option<String>,
    pub organization_key: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub link: Option<String>,
    pub pricing: Option<PathBuf>,
    pub serve: bool,
    pub port: Option<u16>,
    pub no_save: bool,
}

pub fn parse_args() -> Result<CliArgs, String> {
    parse_from(env::args().skip(1))
}

fn parse_from<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut parsed = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api-key" => {
                parsed.api_key = Some(require_value(&mut args, "--api-key")?);
            }
            "--org" => {
                parsed.organization_key = Some(require_value(&mut args, "--org")?);
            }
            "--start" => {
                parsed.start = Some(require_value(&mut args, "--start")?);
            }
            "--end" => {
                parsed.end = Some(require_value(&mut args, "--end")?);
            }
            "--link" => {
                parsed.link = Some(require_value(&mut args, "--link")?);
            }
            "--pricing" => {
                parsed.pricing = Some(PathBuf::from(require_value(&mut args, "--pricing")?));
            }
            "--serve" => {
                parsed.serve = true;
            }
            "--port" => {
                let value = require_value(&mut args, "--port")?;
                let port = value
                    .parse::<u16>()
                    .map_err(|_| format!("invalid port value: {value}"))?;
                parsed.port = Some(port);
            }
            "--no-save" => {
                parsed.no_save = true;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument: {arg}"));
            }
        }
    }

    Ok(parsed)
}

fn require_value<I>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or_else(|| format!("missing value for {flag}"))
}

pub fn print_help() {
    println!(
        "Usage Dashboard CLI\n\n\
Usage:\n  usage-dashboard [options]\n\n\
Options:\n  --api-key <key>   API key (sess-...); defaults to the saved config value\n  --org <key>       Organization key (org-...); defaults to the saved config value\n  --start <date>    Range start, YYYY-MM-DD (default: 30 days ago)\n  --end <date>      Range end, YYYY-MM-DD (default: today)\n  --link <url>      Restore inputs from a share link (overrides the flags above)\n  --pricing <file>  JSON price-table override file\n  --serve           Run the local JSON API instead of printing a one-shot report\n  --port <port>     Port for --serve and for generated share links\n  --no-save         Do not write the keys back to the config file\n  -h, --help        Show this help message\n"
    );
}
