use super::{is_truthy, text_field};
use crate::domain::model::{AddressResult, JsonObject, Mapped};
use crate::domain::ports::{ConfigProvider, LookupKind};

pub const CEP_ENDPOINT: &str = "https://viacep.com.br/ws/{id}/json/";
pub const CEP_NOT_FOUND_MESSAGE: &str = "CEP não encontrado";

/// Address lookup by postal code against ViaCEP.
#[derive(Debug, Clone, Copy, Default)]
pub struct CepLookup;

impl LookupKind for CepLookup {
    type Entity = AddressResult;

    const NAME: &'static str = "CEP";
    const DIGITS: usize = 8;
    const DEFAULT_ENDPOINT: &'static str = CEP_ENDPOINT;
    const INVALID_INPUT_MESSAGE: &'static str = "Digite um CEP válido com 8 dígitos";
    const TRANSPORT_ERROR_MESSAGE: &'static str = "Ocorreu um erro ao buscar o CEP";

    fn classify(body: &JsonObject) -> Mapped<AddressResult> {
        // ViaCEP answers unknown codes with 200 and `"erro": true`.
        if body.get("erro").is_some_and(is_truthy) {
            return Mapped::DomainError(CEP_NOT_FOUND_MESSAGE.to_string());
        }

        Mapped::Found(AddressResult {
            cep: text_field(body, "cep"),
            logradouro: text_field(body, "logradouro"),
            bairro: text_field(body, "bairro"),
            localidade: text_field(body, "localidade"),
            uf: text_field(body, "uf"),
            complemento: text_field(body, "complemento"),
            ddd: text_field(body, "ddd"),
        })
    }

    fn endpoint(config: &dyn ConfigProvider) -> &str {
        config.cep_endpoint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify(value: serde_json::Value) -> Mapped<AddressResult> {
        CepLookup::classify(value.as_object().unwrap())
    }

    #[test]
    fn test_partial_body_maps_with_empty_defaults() {
        let mapped = classify(json!({
            "cep": "01310-100",
            "logradouro": "Av. Paulista",
            "erro": false
        }));

        assert_eq!(
            mapped,
            Mapped::Found(AddressResult {
                cep: "01310-100".to_string(),
                logradouro: "Av. Paulista".to_string(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_full_body_maps_every_field() {
        let mapped = classify(json!({
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "complemento": "de 612 a 1510 - lado par",
            "unidade": "",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "gia": "1004",
            "ddd": "11",
            "siafi": "7107"
        }));

        let Mapped::Found(address) = mapped else {
            panic!("expected a found address");
        };
        assert_eq!(address.bairro, "Bela Vista");
        assert_eq!(address.localidade, "São Paulo");
        assert_eq!(address.uf, "SP");
        assert_eq!(address.complemento, "de 612 a 1510 - lado par");
        assert_eq!(address.ddd, "11");
    }

    #[test]
    fn test_erro_true_is_domain_error() {
        assert_eq!(
            classify(json!({"erro": true})),
            Mapped::DomainError(CEP_NOT_FOUND_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_erro_as_string_is_domain_error() {
        // Newer ViaCEP deployments send the flag as a string.
        assert_eq!(
            classify(json!({"erro": "true"})),
            Mapped::DomainError(CEP_NOT_FOUND_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_falsy_erro_is_success() {
        assert!(matches!(classify(json!({"erro": null})), Mapped::Found(_)));
        assert!(matches!(classify(json!({"erro": 0})), Mapped::Found(_)));
        assert!(matches!(classify(json!({})), Mapped::Found(_)));
    }
}
