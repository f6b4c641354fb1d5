use clap::Parser;
use consulta_br::utils::logger;
use consulta_br::{
    AddressResult, Card, CepFlow, CliConfig, CnpjFlow, Command, CompanyResult, ConsoleNotifier,
    ConsultaError, FlowController, HttpFetcher, LookupSettings, SubmitOutcome,
};
use serde::Serialize;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let settings = LookupSettings::resolve(config.config.as_deref(), config.timeout)
        .unwrap_or_else(|e| fail("Configuration failed", e));
    let fetcher = HttpFetcher::from_config(&settings)
        .map(Arc::new)
        .unwrap_or_else(|e| fail("HTTP client setup failed", e));

    let notifier = Arc::new(ConsoleNotifier);
    let cep_flow: CepFlow<Arc<HttpFetcher>> =
        FlowController::from_config(fetcher.clone(), notifier.clone(), &settings);
    let cnpj_flow: CnpjFlow<Arc<HttpFetcher>> =
        FlowController::from_config(fetcher, notifier, &settings);

    let exit_code = match &config.command {
        Command::Cep { value } => {
            let outcome = cep_flow.submit(value).await;
            report(&outcome, config.json, AddressResult::cards)
        }
        Command::Cnpj { value } => {
            let outcome = cnpj_flow.submit(value).await;
            report(&outcome, config.json, CompanyResult::cards)
        }
        Command::Both { cep, cnpj } => {
            let (address, company) = tokio::join!(cep_flow.submit(cep), cnpj_flow.submit(cnpj));
            let cep_code = report(&address, config.json, AddressResult::cards);
            let cnpj_code = report(&company, config.json, CompanyResult::cards);
            cep_code.max(cnpj_code)
        }
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}

/// Reports a setup error and exits with its kind's code.
fn fail(context: &str, e: ConsultaError) -> ! {
    tracing::error!("{}: {}", context, e);
    eprintln!("❌ {}: {}", context, e);
    std::process::exit(e.exit_code());
}

/// Prints a found entity and returns the exit code for the outcome. Errors
/// were already shown by the notifier.
fn report<E: Serialize>(
    outcome: &SubmitOutcome<E>,
    as_json: bool,
    cards: impl Fn(&E) -> Vec<Card>,
) -> i32 {
    match outcome {
        SubmitOutcome::Found(entity) => {
            if as_json {
                match serde_json::to_string_pretty(entity) {
                    Ok(json) => println!("{}", json),
                    Err(e) => tracing::error!("failed to serialize result: {}", e),
                }
            } else {
                for card in cards(entity) {
                    println!("{:<14} {}", card.label, card.display_value());
                }
                println!();
            }
            0
        }
        SubmitOutcome::Rejected(e) | SubmitOutcome::Failed(e) => e.exit_code(),
        SubmitOutcome::Ignored => 0,
    }
}
