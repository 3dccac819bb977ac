use std::io::{stdin, stdout};

use miette::{IntoDiagnostic, Result, miette};
use tracing::info;

use paradigm_db::{
    App, Config, Session, builtin_stores,
    shell::{self, TerminalPresenter},
};

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(false)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .build(),
        )
    }))
    .into_diagnostic()?;
    miette::set_panic_hook();

    let config = Config::default();
    init_tracing(&config)?;

    let session = Session::start(builtin_stores(), &config.default_profile)?;
    info!(profiles = ?session.profile_names(), "session started");

    let presenter = TerminalPresenter::new(stdin().lock(), stdout().lock());
    let mut app = App::start(session, presenter)?;

    shell::run(&mut app, &config).into_diagnostic()?;

    println!("Exiting Paradigm");

    Ok(())
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_level).into_diagnostic()?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| miette!("failed to initialize tracing subscriber: {error}"))
}
