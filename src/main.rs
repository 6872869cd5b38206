use env_logger::Env;
use pathsize::App;
use pathsize::report::ConsoleReporter;
use pathsize::theme::load_theme_from_env_or_default;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut reporter = ConsoleReporter::new(load_theme_from_env_or_default());

    let result = App::from_args(env::args().skip(1), &mut reporter)
        .and_then(|app| app.run(&mut reporter));

    match result {
        Ok(summary) => {
            log::debug!("done: {} bytes in {} work paths", summary.total_bytes(), summary.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
