use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::sparql::{GraphClient, QueryResult};

/// Characters that must be escaped inside an IRI reference (`<...>`).
/// Discovered values can contain spaces or quotes; left raw they would break
/// the graph pattern.
const IRI_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'`');

/// Response envelope from the SPARQL endpoint:
/// `{ "results": { "bindings": [ { "answer": { "value": "..." } } ] } }`
#[derive(Deserialize)]
struct SelectResponse {
    results: ResultSet,
}

#[derive(Deserialize)]
struct ResultSet {
    #[serde(default)]
    bindings: Vec<Binding>,
}

#[derive(Deserialize)]
struct Binding {
    answer: Option<BoundValue>,
}

#[derive(Deserialize)]
struct BoundValue {
    value: String,
}

/// SPARQL-over-HTTP graph query client
///
/// Stateless per call and safe to invoke concurrently; the resolver issues
/// one call per outstanding branch. Failures never cross this boundary as
/// errors: transport, status, and parse problems all collapse into
/// [`QueryResult::Error`], and the per-call timeout behaves the same way.
/// There is no retry.
pub struct SparqlClient {
    client: Client,
    endpoint: String,
    resource_base: String,
    ontology_base: String,
}

impl SparqlClient {
    /// Create a new client from configuration.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created (should not happen in
    /// normal operation).
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.endpoint.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: config.endpoint.url.clone(),
            resource_base: config.graph.resource_base.clone(),
            ontology_base: config.graph.ontology_base.clone(),
        }
    }

    /// Build the single-relation graph pattern for one hop.
    ///
    /// A bare root entity is expanded under the resource base; a discovered
    /// link is used as-is. The relation always resolves under the ontology
    /// base.
    fn build_query(&self, resource: &str, relation: &str, resource_is_link: bool) -> String {
        let resource = utf8_percent_encode(resource, IRI_ESCAPE);
        let relation = utf8_percent_encode(relation, IRI_ESCAPE);
        if resource_is_link {
            format!(
                "SELECT ?answer WHERE {{ <{}> <{}{}> ?answer . }}",
                resource, self.ontology_base, relation
            )
        } else {
            format!(
                "SELECT ?answer WHERE {{ <{}{}> <{}{}> ?answer . }}",
                self.resource_base, resource, self.ontology_base, relation
            )
        }
    }

    /// Execute one SELECT against the endpoint and collect the values.
    async fn select(&self, query: &str) -> reqwest::Result<SelectResponse> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("query", query),
                ("format", "application/sparql-results+json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        response.json::<SelectResponse>().await
    }
}

/// Reduce a response envelope to a [`QueryResult`].
///
/// Empty-string values are discarded; a response with no usable values is
/// `Unknown`. Duplicate values are preserved so downstream branches keep
/// their provenance.
fn collect_values(response: SelectResponse) -> QueryResult {
    let values: Vec<String> = response
        .results
        .bindings
        .into_iter()
        .filter_map(|binding| binding.answer)
        .map(|bound| bound.value)
        .filter(|value| !value.is_empty())
        .collect();

    if values.is_empty() {
        QueryResult::Unknown
    } else {
        QueryResult::Values(values)
    }
}

#[async_trait]
impl GraphClient for SparqlClient {
    async fn query(&self, resource: &str, relation: &str, resource_is_link: bool) -> QueryResult {
        let query = self.build_query(resource, relation, resource_is_link);
        log::debug!("Running query: <{}> : <{}>", resource, relation);
        log::trace!("{}", query);

        match self.select(&query).await {
            Ok(response) => collect_values(response),
            Err(e) => {
                log::warn!("SPARQL query failed for <{}> : <{}>: {}", resource, relation, e);
                QueryResult::Error
            }
        }
    }
}
