mod backend;
mod render;


use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use contract::{
    ApiError, BACKEND_URL_ENV, Backend, BackendConfig, DEFAULT_BACKEND_URL, FINANCE_CATEGORY, FormList,
    SubmissionData, SubmissionRequest,
};
use serde::Serialize;

use crate::backend::ReqwestBackend;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("unknown form `{0}`; run `forms` to list them")]
    UnknownForm(String),
    #[error("form `{form}` has no field `{key}`")]
    UnknownField { form: String, key: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "flowpilot-cli", about = "Exercise the FlowPilot backend the landing page talks to")]
struct Cli {
    #[arg(long, env = BACKEND_URL_ENV, default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    #[arg(long, default_value_t = 10, help = "Request timeout in seconds")]
    timeout_secs: u64,

    #[arg(long, default_value_t = false, help = "Print raw JSON instead of text")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dashboard totals.
    Summary,
    /// Pricing plans.
    Pricing,
    Templates(TemplatesCommand),
    /// Declared forms and their field keys.
    Forms,
    /// Submit a form.
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
struct TemplatesCommand {
    #[command(subcommand)]
    command: TemplatesSubcommand,
}

#[derive(Subcommand, Debug)]
enum TemplatesSubcommand {
    /// Seed finance templates, then list them.
    Seed,
    List {
        #[arg(long, default_value = FINANCE_CATEGORY)]
        category: String,
    },
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long = "form")]
    form_id: String,

    #[arg(long = "field", value_parser = parse_field, help = "key=value, repeatable")]
    fields: Vec<(String, String)>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = BackendConfig::new(cli.backend_url);
    let backend = ReqwestBackend::new(config, Duration::from_secs(cli.timeout_secs))?;
    let json = cli.json;

    match cli.command {
        Command::Summary => {
            let summary = backend.dashboard_summary().await?;
            emit(json, &summary, render::summary)
        }
        Command::Pricing => {
            let pricing = backend.pricing().await?;
            emit(json, &pricing, render::pricing)
        }
        Command::Templates(templates) => run_templates(&backend, json, templates).await,
        Command::Forms => {
            let forms = backend.forms().await?;
            emit(json, &forms, render::forms)
        }
        Command::Submit(args) => run_submit(&backend, json, args).await,
    }
}

async fn run_templates(backend: &ReqwestBackend, json: bool, templates: TemplatesCommand) -> Result<(), CliError> {
    match templates.command {
        TemplatesSubcommand::Seed => {
            backend.seed_templates().await?;
            let list = backend.workflows(FINANCE_CATEGORY).await?;
            emit(json, &list, render::templates)
        }
        TemplatesSubcommand::List { category } => {
            let list = backend.workflows(&category).await?;
            emit(json, &list, render::templates)
        }
    }
}

async fn run_submit(backend: &ReqwestBackend, json: bool, args: SubmitArgs) -> Result<(), CliError> {
    let forms = backend.forms().await?;
    let request = build_submission(&forms, &args.form_id, args.fields)?;
    let result = backend.create_submission(&request).await?;
    emit(json, &result, render::submission)
}

/// Validate `--field` pairs against the backend's declared schema.
fn build_submission(forms: &FormList, form_id: &str, fields: Vec<(String, String)>) -> Result<SubmissionRequest, CliError> {
    let form = forms
        .items
        .iter()
        .find(|form| form.id == form_id)
        .ok_or_else(|| CliError::UnknownForm(form_id.to_owned()))?;

    let mut data = SubmissionData::new();
    for (key, value) in fields {
        if !form.has_field(&key) {
            return Err(CliError::UnknownField { form: form.id.clone(), key });
        }
        data.insert(key, value);
    }
    Ok(SubmissionRequest { form_id: form.id.clone(), data })
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw.split_once('=').ok_or_else(|| format!("expected key=value, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty field key in `{raw}`"));
    }
    Ok((key.to_owned(), value.to_owned()))
}

fn emit<T: Serialize>(json: bool, value: &T, text: fn(&T) -> String) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text(value));
    }
    Ok(())
}
