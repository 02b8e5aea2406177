use jot::api::JotApi;
use jot::config::JotConfig;
use jot::error::Result;
use jot::store::fs::FileStore;
use std::io;
use std::path::PathBuf;

mod shell;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = JotConfig::load(&cwd).unwrap_or_default();
    let store = FileStore::new(cwd.join(config.notes_file()));

    let (mut api, startup) = JotApi::open(store)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    shell::print_messages(&mut out, &startup)?;
    shell::run(&mut api, &mut input, &mut out)
}
