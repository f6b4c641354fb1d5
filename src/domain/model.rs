use serde::{Deserialize, Serialize};

/// A JSON object as returned by the upstream APIs.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Address returned by the postal-code lookup. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResult {
    pub cep: String,
    pub logradouro: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
    pub complemento: String,
    pub ddd: String,
}

/// Company returned by the registration-number lookup. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyResult {
    pub nome: String,
    pub fantasia: String,
    pub logradouro: String,
    pub numero: String,
    pub complemento: String,
    pub bairro: String,
    pub municipio: String,
    pub uf: String,
    pub cep: String,
    pub telefone: String,
    pub email: String,
    pub status: String,
    pub situacao: String,
}

/// Classification of a parsed response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mapped<E> {
    Found(E),
    /// Well-formed response reporting "not found" or an API-side error.
    DomainError(String),
}

/// Phase of one flow. `Succeeded` and `Failed` are idle states that remember
/// how the last lookup ended: the flow accepts a new submission from any phase
/// except `Submitting`, and a rejected input leaves the phase unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FlowPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl FlowPhase {
    /// True when a submission would be accepted.
    pub fn is_idle(self) -> bool {
        !matches!(self, FlowPhase::Submitting)
    }
}

/// What a display surface renders for one flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState<E> {
    pub phase: FlowPhase,
    pub loading: bool,
    pub result: Option<E>,
}

impl<E> Default for PresentationState<E> {
    fn default() -> Self {
        Self {
            phase: FlowPhase::Idle,
            loading: false,
            result: None,
        }
    }
}

/// One label/value row of a result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub label: &'static str,
    pub value: String,
}

impl Card {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }

    /// The value as shown to the user: `-` when empty.
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            "-"
        } else {
            &self.value
        }
    }
}

impl AddressResult {
    pub fn cards(&self) -> Vec<Card> {
        vec![
            Card::new("CEP", self.cep.as_str()),
            Card::new("Logradouro", self.logradouro.as_str()),
            Card::new("Bairro", self.bairro.as_str()),
            Card::new("Cidade", self.localidade.as_str()),
            Card::new("Estado", self.uf.as_str()),
            Card::new("Complemento", self.complemento.as_str()),
            Card::new("DDD", self.ddd.as_str()),
        ]
    }
}

impl CompanyResult {
    pub fn cards(&self) -> Vec<Card> {
        vec![
            Card::new("Razão Social", self.nome.as_str()),
            Card::new("Nome Fantasia", self.fantasia.as_str()),
            Card::new("Situação", self.situacao.as_str()),
            Card::new("Logradouro", format!("{}, {}", self.logradouro, self.numero)),
            Card::new("Complemento", self.complemento.as_str()),
            Card::new("Bairro", self.bairro.as_str()),
            Card::new("Cidade", self.municipio.as_str()),
            Card::new("Estado", self.uf.as_str()),
            Card::new("CEP", self.cep.as_str()),
            Card::new("Telefone", self.telefone.as_str()),
            Card::new("Email", self.email.as_str()),
        ]
    }
}
