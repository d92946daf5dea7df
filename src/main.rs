use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;

use dialogkit::clipboard::ClipboardHandler;
use dialogkit::config::{ButtonLabels, Config};
use dialogkit::logging::init_tracing;
use dialogkit::modal::{
    DialogOutcome, DialogRequest, InputClass, LoadingRequest, ModalManager, Payload,
    TextFieldSpec,
};
use dialogkit::notify::NotificationSink;
use dialogkit::tui::TerminalSurface;
use dialogkit::validate;

/// Show a modal dialog in the terminal and print its outcome as JSON.
#[derive(Debug, Parser)]
#[command(name = "dialogkit", version)]
struct Cli {
    /// Config file (default: ~/.config/dialogkit/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ignore Esc instead of dismissing the dialog.
    #[arg(long, global = true)]
    no_dismiss: bool,

    /// Copy the result to the clipboard.
    #[arg(long, global = true)]
    copy: bool,

    /// Do not show a toast with the result.
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Message with an OK button.
    Alert { title: String, message: String },
    /// Message with Yes / No.
    Confirm { title: String, message: String },
    /// Message with three buttons.
    Three {
        title: String,
        message: String,
        #[arg(long, default_value = "Save")]
        positive: String,
        #[arg(long, default_value = "Discard")]
        negative: String,
        #[arg(long, default_value = "Cancel")]
        neutral: String,
    },
    /// Single-line text entry.
    Input {
        title: String,
        #[arg(long, default_value = "")]
        hint: String,
        #[arg(long, default_value = "")]
        prefill: String,
        #[arg(long, value_enum, default_value_t = InputClassArg::Text)]
        class: InputClassArg,
        /// Check the entered text and report when it does not match.
        #[arg(long, value_enum)]
        validate: Option<ValidatorArg>,
    },
    /// Radio list confirmed with OK.
    Single {
        title: String,
        #[arg(required = true)]
        items: Vec<String>,
        #[arg(long)]
        selected: Option<usize>,
    },
    /// Checkbox list confirmed with OK.
    Multi {
        title: String,
        #[arg(required = true)]
        items: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        checked: Vec<usize>,
    },
    /// List that resolves on the first pick.
    List {
        title: String,
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Spinner shown for a while.
    Loading {
        #[arg(long)]
        message: Option<String>,
        #[arg(long, default_value_t = 3)]
        seconds: u64,
        #[arg(long)]
        cancelable: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputClassArg {
    Text,
    Number,
    Phone,
    Email,
    Url,
    Password,
}

impl From<InputClassArg> for InputClass {
    fn from(arg: InputClassArg) -> Self {
        match arg {
            InputClassArg::Text => InputClass::Text,
            InputClassArg::Number => InputClass::Number,
            InputClassArg::Phone => InputClass::Phone,
            InputClassArg::Email => InputClass::Email,
            InputClassArg::Url => InputClass::Url,
            InputClassArg::Password => InputClass::Password,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ValidatorArg {
    Email,
    Phone,
    Url,
    Numeric,
}

impl ValidatorArg {
    fn check(self, text: &str) -> bool {
        match self {
            ValidatorArg::Email => validate::is_email_valid(text),
            ValidatorArg::Phone => validate::is_phone_valid(text),
            ValidatorArg::Url => validate::is_url_valid(text),
            ValidatorArg::Numeric => validate::is_numeric(text),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            ValidatorArg::Email => "email address",
            ValidatorArg::Phone => "phone number",
            ValidatorArg::Url => "URL",
            ValidatorArg::Numeric => "number",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging).context("Failed to initialise logging")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    let surface = Arc::new(TerminalSurface::new(config.toast));
    let result = runtime.block_on(run(&cli, &config, Arc::clone(&surface)));
    surface.wait_idle();
    result
}

async fn run(cli: &Cli, config: &Config, surface: Arc<TerminalSurface>) -> anyhow::Result<()> {
    let manager = ModalManager::from_arc(Arc::clone(&surface));

    let request = match build_request(&cli.command, &config.labels) {
        Some(request) => request.dismissible(config.dialogs.dismissible && !cli.no_dismiss),
        None => return run_loading(cli, config, &manager).await,
    };

    let outcome = match manager.present(request).await {
        Ok(outcome) => outcome,
        Err(err) => {
            println!(
                "{}",
                json!({ "error": err.error_type(), "message": err.to_string() })
            );
            return Err(err.into());
        }
    };
    println!("{}", serde_json::to_string(&outcome)?);
    report(cli, &outcome, surface.as_ref())
}

fn build_request(command: &Command, labels: &ButtonLabels) -> Option<DialogRequest> {
    let request = match command {
        Command::Alert { title, message } => DialogRequest::alert(title, message),
        Command::Confirm { title, message } => DialogRequest::confirm(title, message),
        Command::Three {
            title,
            message,
            positive,
            negative,
            neutral,
        } => DialogRequest::three_choice(title, message, positive, negative, neutral),
        Command::Input {
            title,
            hint,
            prefill,
            class,
            ..
        } => DialogRequest::text_input(
            title,
            TextFieldSpec::new(hint, prefill).with_input_class((*class).into()),
        ),
        Command::Single {
            title,
            items,
            selected,
        } => DialogRequest::single_select(title, items.iter().cloned(), *selected),
        Command::Multi {
            title,
            items,
            checked,
        } => DialogRequest::multi_select(title, items.iter().cloned(), checked.iter().copied()),
        Command::List { title, items } => DialogRequest::list(title, items.iter().cloned()),
        Command::Loading { .. } => return None,
    };
    Some(request.with_labels(labels))
}

async fn run_loading(
    cli: &Cli,
    config: &Config,
    manager: &ModalManager<TerminalSurface>,
) -> anyhow::Result<()> {
    let Command::Loading {
        message,
        seconds,
        cancelable,
    } = &cli.command
    else {
        return Ok(());
    };

    let message = message
        .clone()
        .unwrap_or_else(|| config.dialogs.loading_message.clone());
    let mut handle = manager.show_loading(LoadingRequest::new(message).cancelable(*cancelable))?;

    let cancelled = tokio::select! {
        _ = tokio::time::sleep(Duration::from_secs(*seconds)) => false,
        cancelled = handle.cancelled() => cancelled,
    };
    handle.dismiss();

    let status = if cancelled { "cancelled" } else { "finished" };
    println!("{}", json!({ "loading": status }));
    Ok(())
}

/// Follow-up after an outcome: validation notice, clipboard copy, toast.
fn report(cli: &Cli, outcome: &DialogOutcome, sink: &dyn NotificationSink) -> anyhow::Result<()> {
    if let Command::Input {
        validate: Some(validator),
        ..
    } = &cli.command
    {
        if let Some(text) = outcome.text() {
            if !validator.check(text) {
                sink.notify_long(&format!("\"{}\" is not a valid {}", text, validator.describe()));
                return Ok(());
            }
        }
    }

    if cli.copy {
        if let Some(text) = clipboard_text(outcome) {
            ClipboardHandler::new()?.copy_with_notice(&text, sink)?;
            return Ok(());
        }
    }

    if !cli.quiet {
        sink.notify_short(&outcome.to_string());
    }
    Ok(())
}

fn clipboard_text(outcome: &DialogOutcome) -> Option<String> {
    match outcome {
        DialogOutcome::Positive(Payload::Text(text)) => Some(text.clone()),
        DialogOutcome::Positive(Payload::Item(item)) => Some(item.label.clone()),
        DialogOutcome::Positive(Payload::Items(items)) => Some(
            items
                .iter()
                .map(|item| item.label.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        _ => None,
    }
}
