use super::{is_truthy, text_field};
use crate::domain::model::{CompanyResult, JsonObject, Mapped};
use crate::domain::ports::{ConfigProvider, LookupKind};

pub const CNPJ_ENDPOINT: &str = "https://www.receitaws.com.br/v1/cnpj/{id}";
pub const CNPJ_NOT_FOUND_MESSAGE: &str = "CNPJ não encontrado";

/// Company lookup by registration number against ReceitaWS.
#[derive(Debug, Clone, Copy, Default)]
pub struct CnpjLookup;

impl LookupKind for CnpjLookup {
    type Entity = CompanyResult;

    const NAME: &'static str = "CNPJ";
    const DIGITS: usize = 14;
    const DEFAULT_ENDPOINT: &'static str = CNPJ_ENDPOINT;
    const INVALID_INPUT_MESSAGE: &'static str = "Digite um CNPJ válido com 14 dígitos";
    const TRANSPORT_ERROR_MESSAGE: &'static str = "Ocorreu um erro ao buscar o CNPJ";

    fn classify(body: &JsonObject) -> Mapped<CompanyResult> {
        let status_error = body.get("status").and_then(|v| v.as_str()) == Some("ERROR");
        let message = body.get("message").filter(|v| is_truthy(v));

        if status_error || message.is_some() {
            // The API's own wording wins when it sends one.
            let text = text_field(body, "message");
            let text = if text.is_empty() {
                CNPJ_NOT_FOUND_MESSAGE.to_string()
            } else {
                text
            };
            return Mapped::DomainError(text);
        }

        Mapped::Found(CompanyResult {
            nome: text_field(body, "nome"),
            fantasia: text_field(body, "fantasia"),
            logradouro: text_field(body, "logradouro"),
            numero: text_field(body, "numero"),
            complemento: text_field(body, "complemento"),
            bairro: text_field(body, "bairro"),
            municipio: text_field(body, "municipio"),
            uf: text_field(body, "uf"),
            cep: text_field(body, "cep"),
            telefone: text_field(body, "telefone"),
            email: text_field(body, "email"),
            status: text_field(body, "status"),
            situacao: text_field(body, "situacao"),
        })
    }

    fn endpoint(config: &dyn ConfigProvider) -> &str {
        config.cnpj_endpoint()
    }
}
