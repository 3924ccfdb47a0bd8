extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use clap::{crate_description, crate_name, App, Arg, ArgMatches};
use lc_downloader::{
    account::{self, Account},
    config,
    downloader::Downloader,
    langs,
    session::{Session, Site},
};
use pretty_env_logger::init_timed;
use std::{fs::File, io::Write, path::PathBuf, process};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod write;

const LANGUAGE_ALL: &str = "ALL";

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("username")
                .long("username")
                .about("leetcode username")
                .takes_value(true),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .about("leetcode password")
                .takes_value(true),
        )
        .arg(
            Arg::new("account")
                .long("account")
                .about("path to a YAML file with `login` and `password` keys")
                .takes_value(true),
        )
        .arg(
            Arg::new("languages")
                .long("programming-languages")
                .about("language slugs to write starter files for, ALL selects every supported language")
                .takes_value(true)
                .multiple(true)
                .default_value(LANGUAGE_ALL),
        )
        .arg(
            Arg::new("path")
                .long("path-to-save-to")
                .about("directory to download the problems to")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("overwrite")
                .long("overwrite")
                .about("overwrite existing problem files"),
        )
        .arg(
            Arg::new("keep-going")
                .long("keep-going")
                .about("skip problems whose details fail to download instead of aborting"),
        )
        .get_matches();
    let ok = run(&mut stdout, &matches).await.is_ok();
    stdout.reset();
    if !ok {
        process::exit(1);
    }
}

#[allow(unused_must_use)]
async fn run(stdout: &mut StandardStream, matches: &ArgMatches) -> Result<(), ()> {
    let account = load_account(stdout, matches)?;
    let dest = PathBuf::from(matches.value_of("path").unwrap());
    if !dest.is_dir() {
        write_error!(
            stdout,
            "Error",
            "`{}` is not an existing directory",
            dest.display()
        );
        return Err(());
    }
    let requested: Vec<&str> = matches.values_of("languages").unwrap().collect();
    let languages: Vec<String> = if requested.iter().any(|s| *s == LANGUAGE_ALL) {
        langs::KNOWN_SLUGS.iter().map(|s| s.to_string()).collect()
    } else {
        requested.iter().map(|s| s.to_string()).collect()
    };
    write_info!(
        stdout,
        "Info",
        "Writing problems for languages: {}",
        languages.join(", ")
    );

    let session = match Site::new(config::site::BASE_URL).and_then(Session::new) {
        Ok(session) => session,
        Err(e) => {
            write_error!(stdout, "Error", "session: {}", e);
            return Err(());
        }
    };
    write_info!(
        stdout,
        "Info",
        "Logging into {} and fetching the problem list...",
        config::site::BASE_URL
    );
    let downloader = Downloader::new(&session, config::rate::QUESTION_FETCH_DELAY)
        .keep_going(matches.is_present("keep-going"));
    let catalog = match downloader.get_all_problems(&account).await {
        Ok(catalog) => catalog,
        Err(e) => {
            write_error!(stdout, "Error", "harvest: {}", e);
            return Err(());
        }
    };
    write_ok!(stdout, "Success", "Fetched {} problems", catalog.len());

    write_info!(stdout, "Info", "Writing problems to `{}`", dest.display());
    if let Err(e) = write::write_catalog(
        &catalog,
        &languages,
        &dest,
        matches.is_present("overwrite"),
    ) {
        write_error!(stdout, "Error", "write problems: {}", e);
        return Err(());
    }
    write_ok!(stdout, "Success", "Done!");
    Ok(())
}

#[allow(unused_must_use)]
fn load_account(stdout: &mut StandardStream, matches: &ArgMatches) -> Result<Account, ()> {
    if let Some(path) = matches.value_of("account") {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                write_error!(stdout, "Error", "Error open {}: {}", path, e);
                return Err(());
            }
        };
        return match account::from_reader(file) {
            Ok(account) => Ok(account),
            Err(e) => {
                write_error!(stdout, "Error", "Error load account: {}", e);
                Err(())
            }
        };
    }
    match (matches.value_of("username"), matches.value_of("password")) {
        (Some(login), Some(password)) => Ok(Account {
            login: login.to_owned(),
            password: password.to_owned(),
        }),
        _ => {
            write_error!(
                stdout,
                "Error",
                "Provide --username and --password, or --account"
            );
            Err(())
        }
    }
}
