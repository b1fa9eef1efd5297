mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};

use adapter::{NoopInterruptChecker, Osc52Clipboard, SigintChecker};
use cli::{parse_args, print_completion, run_repl, spawn_stdin_reader, Config, ParseOutcome};
use domain::SessionEvent;
use ports::inbound::RunLab;
use ports::outbound::InterruptChecker;
use wiring::{wire_lab, App};

/// 設定に応じて一覧表示か対話セッションを実行する Runner
struct Runner {
    app: App,
}

impl Runner {
    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record.layer("cli"));
    }

    fn command_name(config: &Config) -> &'static str {
        if config.help {
            "help"
        } else if config.list_profiles {
            "list-profiles"
        } else {
            "session"
        }
    }

    fn run_session(&self, config: &Config) -> Result<i32, Error> {
        let settings = self.app.resolve_settings(config)?;
        let mut ctl = self
            .app
            .build_controller(&settings, Arc::new(Osc52Clipboard::stdout()));

        let interrupt: Box<dyn InterruptChecker> = match SigintChecker::new() {
            Ok(c) => Box::new(c),
            Err(e) => {
                self.log(
                    LogRecord::new(LogLevel::Warn, "ctrl-c handler not installed")
                        .kind("lifecycle")
                        .field("error", e.to_string()),
                );
                Box::new(NoopInterruptChecker)
            }
        };

        if let Some(problem) = config.initial_problem() {
            ctl.dispatch(SessionEvent::InputChanged(problem));
            ctl.dispatch(SessionEvent::Submit { example: None });
        }

        let mut stdout = std::io::stdout();
        let exit = run_repl(&mut ctl, spawn_stdin_reader(), interrupt.as_ref(), &mut stdout)?;
        self.log(
            LogRecord::new(LogLevel::Info, "session ended")
                .kind("lifecycle")
                .field("reason", exit.as_str()),
        );
        Ok(exit.exit_code())
    }
}

impl RunLab for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let command_name = Self::command_name(&config);
        self.log(
            LogRecord::new(LogLevel::Info, "command started")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = if config.help {
            print_help();
            Ok(0)
        } else if config.list_profiles {
            let (names, default) = self.app.list_profiles();
            for name in &names {
                if *name == default {
                    println!("{} (default)", name);
                } else {
                    println!("{}", name);
                }
            }
            Ok(0)
        } else {
            self.run_session(&config)
        };

        let code = result.as_ref().copied().unwrap_or(0);
        self.log(
            LogRecord::new(LogLevel::Info, "command finished")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            self.log(LogRecord::new(LogLevel::Error, e.to_string()).kind("error"));
        }
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("lab: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_lab(config.verbose)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: lab [options] [challenge...]");
}

fn print_help() {
    println!("Usage: lab [options] [challenge...]");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -L, --list-profiles           List currently available provider profiles (from profiles.json + built-ins)");
    println!("  -p, --profile <profile>       Specify LLM profile (gemini, echo, or a name from profiles.json)");
    println!("  -m, --model <model>           Override the model of the profile");
    println!("  -l, --lang <ar|en>            Interface and answer language (default: ar)");
    println!("      --thinking-budget <n>     Reasoning token budget (default: 4000)");
    println!("  -v, --verbose                 Write structured logs to stderr");
    println!("      --generate <shell>        Generate shell completion script");
    println!();
    println!("Environment:");
    println!("  GEMINI_API_KEY                API key for the gemini profile");
    println!("  LAB_HOME                      Directory for config/profiles.json and state/lab.log");
    println!();
    print!("{}", adapter::terminal_view::help_text());
}
