mod common;

use common::RecordingNotifier;
use consulta_br::{
    CepFlow, ConsultaError, FlowController, FlowPhase, HttpFetcher, LookupSettings, SubmitOutcome,
};
use httpmock::prelude::*;
use std::sync::Arc;

fn cep_flow(server: &MockServer) -> (CepFlow, Arc<RecordingNotifier>) {
    let settings = LookupSettings {
        cep_endpoint: server.url("/ws/{id}/json/"),
        ..Default::default()
    };
    let notifier = Arc::new(RecordingNotifier::default());
    let flow = FlowController::from_config(
        HttpFetcher::from_config(&settings).unwrap(),
        notifier.clone(),
        &settings,
    );
    (flow, notifier)
}

#[tokio::test]
async fn test_formatted_cep_end_to_end() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/ws/01310100/json/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "cep": "01310-100",
                "logradouro": "Avenida Paulista",
                "complemento": "de 612 a 1510 - lado par",
                "bairro": "Bela Vista",
                "localidade": "São Paulo",
                "uf": "SP",
                "ibge": "3550308",
                "ddd": "11"
            }));
    });

    let (flow, notifier) = cep_flow(&server);
    let outcome = flow.submit("01310-100").await;

    api_mock.assert();
    let address = outcome.found().expect("address should be found");
    assert_eq!(address.logradouro, "Avenida Paulista");
    assert_eq!(address.ddd, "11");

    let state = flow.state();
    assert!(!state.loading);
    assert_eq!(state.phase, FlowPhase::Succeeded);
    assert_eq!(state.result.as_ref(), Some(address));
    assert!(notifier.alerts().is_empty());
}

#[tokio::test]
async fn test_short_cep_never_reaches_network() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({}));
    });

    let (flow, notifier) = cep_flow(&server);
    let outcome = flow.submit("123").await;

    api_mock.assert_hits(0);
    assert!(matches!(
        outcome,
        SubmitOutcome::Rejected(ConsultaError::Validation { ref actual, .. }) if actual == "123"
    ));
    assert_eq!(
        notifier.alerts(),
        vec![(
            "Erro".to_string(),
            "Digite um CEP válido com 8 dígitos".to_string()
        )]
    );
    assert!(!flow.is_loading());
}

#[tokio::test]
async fn test_unknown_cep_reports_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ws/99999999/json/");
        then.status(200).json_body(serde_json::json!({"erro": "true"}));
    });

    let (flow, notifier) = cep_flow(&server);
    let outcome = flow.submit("99999-999").await;

    assert!(matches!(outcome, SubmitOutcome::Failed(ConsultaError::Domain { .. })));
    assert_eq!(notifier.messages(), vec!["CEP não encontrado"]);
    assert!(flow.state().result.is_none());
}

#[tokio::test]
async fn test_html_error_page_is_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ws/00000000/json/");
        then.status(400)
            .header("Content-Type", "text/html")
            .body("<h1>Bad Request</h1>");
    });

    let (flow, notifier) = cep_flow(&server);
    let outcome = flow.submit("00000000").await;

    assert!(outcome.error().unwrap().is_transport());
    assert_eq!(notifier.messages(), vec!["Ocorreu um erro ao buscar o CEP"]);
    assert_eq!(flow.state().phase, FlowPhase::Failed);
}

#[tokio::test]
async fn test_failure_discards_stale_address() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ws/01310100/json/");
        then.status(200)
            .json_body(serde_json::json!({"cep": "01310-100", "uf": "SP"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/ws/99999999/json/");
        then.status(200).json_body(serde_json::json!({"erro": true}));
    });

    let (flow, _notifier) = cep_flow(&server);
    let mut rx = flow.subscribe();

    flow.submit("01310100").await;
    assert_eq!(rx.borrow_and_update().result.as_ref().unwrap().uf, "SP");

    flow.submit("99999999").await;
    assert!(rx.has_changed().unwrap());
    let state = rx.borrow_and_update().clone();
    assert!(state.result.is_none());
    assert!(!state.loading);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 9 of localhost in the test environment.
    let settings = LookupSettings {
        cep_endpoint: "http://127.0.0.1:9/ws/{id}/json/".to_string(),
        ..Default::default()
    };
    let notifier = Arc::new(RecordingNotifier::default());
    let flow: CepFlow = FlowController::from_config(
        HttpFetcher::from_config(&settings).unwrap(),
        notifier.clone(),
        &settings,
    );

    let outcome = flow.submit("01310100").await;

    assert!(matches!(outcome, SubmitOutcome::Failed(ConsultaError::Transport(_))));
    assert_eq!(notifier.messages(), vec!["Ocorreu um erro ao buscar o CEP"]);
    assert!(!flow.is_loading());
}
