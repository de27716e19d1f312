use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{QuestionBank, QuizSettings};
use storage::{QuestionSource, SessionStore, Storage};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidBankPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidBankPath { raw } => write!(f, "invalid --bank value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, raw: String) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

struct DesktopApp {
    storage: Storage,
    settings: QuizSettings,
}

impl UiApp for DesktopApp {
    fn questions(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.storage.questions)
    }

    fn session_store(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.storage.session)
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    bank: Option<PathBuf>,
    question_count: usize,
    seconds_per_question: u32,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--bank <path>] [--questions <n>] [--seconds <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bank       bundled question bank");
    eprintln!("  --questions  10");
    eprintln!("  --seconds    30");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK, QUIZ_QUESTION_COUNT, QUIZ_SECONDS, RUST_LOG");
}

impl Args {
    fn from_env() -> Result<Self, ArgsError> {
        let defaults = QuizSettings::default();
        let bank = std::env::var_os("QUIZ_BANK").map(PathBuf::from);
        let question_count = match std::env::var("QUIZ_QUESTION_COUNT") {
            Ok(raw) => parse_number("QUIZ_QUESTION_COUNT", raw)?,
            Err(_) => defaults.question_count(),
        };
        let seconds_per_question = match std::env::var("QUIZ_SECONDS") {
            Ok(raw) => parse_number("QUIZ_SECONDS", raw)?,
            Err(_) => defaults.seconds_per_question(),
        };

        Ok(Self {
            bank,
            question_count,
            seconds_per_question,
        })
    }

    /// Apply command-line flags on top of `self`. `Ok(None)` means help was shown.
    fn parse(mut self, args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => {
                    let value = require_value(args, "--bank")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBankPath { raw: value });
                    }
                    self.bank = Some(PathBuf::from(value));
                }
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    self.question_count = parse_number("--questions", value)?;
                }
                "--seconds" => {
                    let value = require_value(args, "--seconds")?;
                    self.seconds_per_question = parse_number("--seconds", value)?;
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(self))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init (e.g. under a test harness) is harmless.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_bank(path: Option<&PathBuf>) -> Result<QuestionBank, storage::StorageError> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading question bank");
            storage::load_question_bank(path)
        }
        None => storage::bundled_question_bank(),
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::from_env()
        .and_then(|args| args.parse(&mut argv))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let Some(parsed) = parsed else {
        print_usage();
        return Ok(());
    };

    init_tracing();

    let settings = QuizSettings::new(
        parsed.question_count,
        parsed.seconds_per_question,
        QuizSettings::default().tick(),
    )?;
    let bank = load_bank(parsed.bank.as_ref())?;
    tracing::info!(
        categories = bank.categories().count(),
        questions = bank.total_questions(),
        question_count = settings.question_count(),
        seconds = settings.seconds_per_question(),
        "question bank ready"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        storage: Storage::in_memory(bank),
        settings,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
