use std::env;
use std::path::PathBuf;

mod app;
mod audio;
mod config;
mod content;
mod logging;
mod page;
mod playback;
mod runtime;
mod ui;
mod visibility;

const USAGE: &str = "usage: sonic-universe [--dump-config] [CONFIG_PATH]";

fn main() -> anyhow::Result<()> {
    let mut config_path: Option<PathBuf> = None;
    let mut dump = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--dump-config" => dump = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            flag if flag.starts_with('-') => anyhow::bail!("unknown flag {flag}\n{USAGE}"),
            path => config_path = Some(PathBuf::from(path)),
        }
    }

    if dump {
        let (settings, _) = runtime::load_settings(config_path.as_deref());
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    runtime::run(config_path)
}
