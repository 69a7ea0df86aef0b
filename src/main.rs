use quizlock::config::{Config, DEFAULT_CONFIG_PATH};
use quizlock::input::{Command as InputCommand, Controls, View};
use quizlock::logging;
use quizlock::monitor::Violation;
use quizlock::questions::QUESTIONS;
use quizlock::quiz::{Quiz, QuizEvent, Transition};
use quizlock::report::plain_summary;
use quizlock::store::{
    AttemptStore, FileStore, Gate, LOCKOUT_BANNER, LOCKOUT_MESSAGE, check_gate,
};
use quizlock::tui::Tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "quizlock")]
struct Cli {
    /// Config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Take the quiz (default)
    Run,
    /// Show the recorded attempt, if any
    Status,
}

/// Everything the main loop reacts to besides the clock
enum Input {
    Terminal(crossterm::event::Event),
    Signal,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config);
    let store = FileStore::default_location();

    match cli.command.unwrap_or(Command::Run) {
        Command::Status => {
            match store.load()? {
                Some(record) => println!("{} ({})", record.status, record.recorded_at.to_rfc3339()),
                None => println!("not attempted"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Run => {
            if let Gate::Locked(flag) = check_gate(&store)? {
                eprintln!("{}", LOCKOUT_MESSAGE);
                eprintln!("\x1b[1;31m{}\x1b[0m ({})", LOCKOUT_BANNER, flag);
                return Ok(ExitCode::FAILURE);
            }
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(run_quiz(config, store))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_quiz(config: Config, store: FileStore) -> anyhow::Result<()> {
    let log = logging::init(&config.log)?;

    let (input_tx, input_rx) = flume::unbounded::<Input>();

    // OS termination (SIGINT/SIGTERM/SIGHUP) counts as leaving the page
    let signal_tx = input_tx.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = signal_tx.send(Input::Signal);
    }) {
        log::warn!("Signal handler not installed: {}", e);
    }

    let mut tui = Tui::new(&config.proctoring).context("initializing terminal")?;

    // Terminal reader thread
    thread::spawn(move || {
        while let Ok(event) = crossterm::event::read() {
            if input_tx.send(Input::Terminal(event)).is_err() {
                break;
            }
        }
    });

    let mut quiz = Quiz::new(&QUESTIONS, config.timer.duration_secs, store);
    let mut controls = Controls::new(QUESTIONS.len());
    quiz.start();
    tui.draw(&quiz, &controls)?;

    const TICK: Duration = Duration::from_secs(1);
    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + TICK, TICK);

    loop {
        tokio::select! {
            biased;

            input = input_rx.recv_async() => {
                let Ok(input) = input else { break };
                let commands = match input {
                    Input::Terminal(event) => {
                        let view = View {
                            current: quiz.state().current(),
                            question_count: QUESTIONS.len(),
                            option_count: quiz.current_question().options.len(),
                            submitted: quiz.state().is_submitted(),
                        };
                        controls.handle(&event, view)
                    }
                    Input::Signal if quiz.state().is_submitted() => vec![InputCommand::Exit],
                    Input::Signal => {
                        vec![InputCommand::Dispatch(QuizEvent::Violation(Violation::Unload))]
                    }
                };
                if apply(&mut quiz, &controls, commands) {
                    break;
                }
            }

            _ = ticker.tick(), if quiz.timer_running() => {
                quiz.handle(QuizEvent::TimerTick, controls.selections());
            }
        }

        tui.draw(&quiz, &controls)?;
    }

    tui.restore()?;
    log.flush_held();
    if let Some(report) = quiz.report() {
        print!("{}", plain_summary(report));
    }
    Ok(())
}

/// Feed commands into the quiz. Returns true when the user closed the quiz.
fn apply<S: AttemptStore>(quiz: &mut Quiz<S>, controls: &Controls, commands: Vec<InputCommand>) -> bool {
    for command in commands {
        match command {
            InputCommand::Exit => return true,
            InputCommand::Dispatch(event) => {
                log::debug!("Event: {:?}", event);
                if quiz.handle(event, controls.selections()) == Transition::Submitted {
                    log::info!("Attempt closed with status {}", quiz.status());
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_has_no_reset() {
        assert!(Cli::try_parse_from(["quizlock", "reset"]).is_err());
        assert!(matches!(
            Cli::try_parse_from(["quizlock", "status"]).unwrap().command,
            Some(Command::Status)
        ));
        assert!(Cli::try_parse_from(["quizlock"]).unwrap().command.is_none());
    }
}
