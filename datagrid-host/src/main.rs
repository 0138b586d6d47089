use std::fs::File;
use std::io::{self, BufRead, Write};

use chrono::Utc;
use datagrid::TableConfig;
use datagrid_host::catalog::Catalog;
use datagrid_host::shell::{self, Command, HELP};
use datagrid_host::{HostError, Session, videos, view};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

fn load_config() -> Result<TableConfig, HostError> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading table config from {}", path);
            let file = File::open(path)?;
            Ok(serde_json::from_reader(file)?)
        }
        None => Ok(videos::table_config()),
    }
}

fn run() -> Result<(), HostError> {
    let catalog = Catalog::new(videos::sample_videos(Utc::now()));
    let mut session = Session::new(catalog, load_config()?)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{}", view::table_text(session.table_mut()));
    println!("Type 'help' for commands.");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match shell::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let handled = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Show => true,
            Command::Action(action) => session.dispatch(action)?.is_handled(),
            Command::Unsort => {
                let cleared = session.table_mut().clear_ordering();
                session.sync()?;
                cleared
            }
            Command::Hover(position) => session.hover_position(position).is_handled(),
            Command::Click(position) => session.click_position(position).is_handled(),
        };

        if !handled {
            println!("(nothing to do)");
        }
        print!("{}", view::table_text(session.table_mut()));
        println!("requests: {}  last: ?{}", session.requests(), session.last_query());
    }

    Ok(())
}

fn main() {
    let log_file = File::create("datagrid-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}
