use async_trait::async_trait;
use reqwest::{header, Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

use crate::config::{Config, TorreEndpoints};
use crate::error::{Error, Result};
use crate::models::{
    compensation_analysis_payload, PersonDetails, PersonResult, ProfileRecord, SearchPayload,
    SkillCompensationResponse, StreamSearchPayload,
};
use crate::torre::rate_limiter::{retry_after, RateLimiter};
use crate::torre::search::SearchPeople;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; TorreAnalysisBot/1.0)";

pub struct TorreClient {
    client: Client,
    rate_limiter: RateLimiter,
    endpoints: TorreEndpoints,
}

impl TorreClient {
    pub fn new(
        endpoints: TorreEndpoints,
        timeout: Duration,
        min_interval: Duration,
    ) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header::HeaderValue::from_static("en-US,en;q=0.9"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(min_interval),
            endpoints,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.endpoints.clone(),
            config.request_timeout,
            config.search_delay,
        )
    }

    pub async fn search_profiles(
        &self,
        term: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<ProfileRecord>> {
        self.rate_limiter.wait().await;
        tracing::debug!("Searching '{}' with offset {} and limit {}", term, offset, limit);

        let response = self
            .client
            .post(&self.endpoints.search_url)
            .json(&SearchPayload::text(term, limit, offset))
            .send()
            .await?;
        let response = self.check_status(response, "search").await?;

        let body: Value = response.json().await?;
        let profiles = match body.get("results") {
            Some(Value::Array(results)) => {
                results.iter().cloned().map(ProfileRecord::new).collect()
            }
            _ => Vec::new(),
        };

        Ok(profiles)
    }

    pub async fn analyze_compensation(&self, skill: &str) -> Result<SkillCompensationResponse> {
        self.rate_limiter.wait().await;
        tracing::info!("Analyzing compensation for skill: {}", skill);

        let response = self
            .client
            .post(&self.endpoints.analyze_url)
            .json(&compensation_analysis_payload(skill))
            .send()
            .await?;
        let response = self.check_status(response, "compensation analysis").await?;

        let body = response.text().await?;
        SkillCompensationResponse::from_analysis(skill, &body)
    }

    pub async fn get_person_details(&self, username: &str) -> Result<PersonDetails> {
        let url = self.bio_url(username)?;
        self.rate_limiter.wait().await;
        tracing::info!("Fetching profile details for: {}", username);

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::ProfileNotFound(username.to_string()));
        }
        let response = self.check_status(response, "profile").await?;

        let mut details: PersonDetails = response.json().await?;
        details.decode_entities();
        Ok(details)
    }

    /// Runs a `_searchStream` query and collects the newline-delimited person
    /// records. Lines that are not person results are skipped.
    pub async fn search_people_stream(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<PersonResult>> {
        self.rate_limiter.wait().await;
        tracing::info!("Streaming people search for query: {}", query);

        let response = self
            .client
            .post(&self.endpoints.search_stream_url)
            .json(&StreamSearchPayload::new(query, limit))
            .send()
            .await?;
        let response = self.check_status(response, "people search").await?;

        let body = response.text().await?;
        let mut people = Vec::new();
        for (line_number, line) in body.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match PersonResult::from_stream_line(line) {
                Some(person) => people.push(person),
                None => tracing::debug!(
                    "Skipping stream line {}: not a person result",
                    line_number + 1
                ),
            }
        }

        tracing::debug!("Stream finished with {} people", people.len());
        Ok(people)
    }

    /// The username is appended as a single escaped path segment, so it can
    /// never address another upstream resource.
    fn bio_url(&self, username: &str) -> Result<Url> {
        if username == "." || username == ".." {
            return Err(Error::Validation(format!("Invalid username: {}", username)));
        }

        let bios_url = &self.endpoints.bios_url;
        let mut url = Url::parse(bios_url)
            .map_err(|e| Error::Config(format!("Invalid bios URL '{}': {}", bios_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Bios URL cannot take a path: {}", bios_url)))?
            .pop_if_empty()
            .push(username);
        Ok(url)
    }

    async fn check_status(
        &self,
        response: reqwest::Response,
        what: &str,
    ) -> Result<reqwest::Response> {
        if let Some(delay) = retry_after(&response) {
            self.rate_limiter.back_off(delay).await;
        }

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(Error::Upstream(format!(
            "Torre {} returned {} - {}",
            what, status, body
        )))
    }
}

#[async_trait]
impl SearchPeople for TorreClient {
    async fn search(&self, term: &str, limit: u32, offset: u32) -> Vec<ProfileRecord> {
        match self.search_profiles(term, limit, offset).await {
            Ok(profiles) => profiles,
            Err(e) => {
                tracing::warn!("Search failed for '{}': {}", term, e);
                Vec::new()
            }
        }
    }
}
