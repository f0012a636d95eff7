use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AlcanciaError, Result};
use crate::settings::Settings;

/// Fixed degradation text shown whenever the advisor cannot answer. The
/// failure itself stays in the error taxonomy; only the displayed content
/// collapses to this string.
pub const FALLBACK_MESSAGE: &str =
    "Hubo un error al contactar al asistente de IA. Por favor, inténtelo de nuevo más tarde.";

const API_KEY_VAR: &str = "GEMINI_API_KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// One-shot client for a Gemini-style generateContent endpoint. No
/// streaming, no multi-turn state, no retry; a CLI invocation holds at
/// most one call in flight.
#[derive(Debug)]
pub struct Advisor {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl Advisor {
    /// Missing credential is a hard configuration failure, distinct from
    /// the transient transport/provider errors `analyze` can return.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(AlcanciaError::MissingApiKey)?;
        Ok(Self {
            http_client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url: settings.advisor_base_url.trim_end_matches('/').to_string(),
            model: settings.advisor_model.clone(),
            api_key,
        })
    }

    /// Send the formatted monthly summary and return the advisory text.
    pub fn analyze(&self, report_text: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(report_text),
                }],
            }],
        };

        let response = self
            .http_client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            return Err(AlcanciaError::Provider(format!(
                "HTTP {} from model {}",
                response.status(),
                self.model
            )));
        }

        let body: GenerateResponse = response.json()?;
        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AlcanciaError::Provider("empty response".to_string()))
    }
}

fn build_prompt(report_text: &str) -> String {
    format!(
        "Eres un asesor financiero experto y amigable. \
Tu tarea es analizar el siguiente resumen financiero mensual de una familia y proporcionar un análisis claro y consejos prácticos.

**Resumen Financiero:**
{report_text}

**Instrucciones:**
1. **Análisis General:** Comienza con un breve resumen de la situación financiera (ej. \"Este mes tuvieron un balance positivo, lo cual es excelente\", o \"Sus gastos superaron sus ingresos, es importante revisar...\").
2. **Puntos Clave:** Identifica 1 o 2 puntos clave del informe. Por ejemplo, la categoría de gasto más alta o un ingreso inesperado.
3. **Consejos Personalizados:** Ofrece 3 consejos prácticos, específicos y accionables basados en los datos. Los consejos deben ser fáciles de entender y aplicar.
4. **Tono:** Mantén un tono alentador y constructivo. El objetivo es empoderar, no criticar.

Formatea tu respuesta usando solo negritas (**texto**) y saltos de línea."
    )
}
