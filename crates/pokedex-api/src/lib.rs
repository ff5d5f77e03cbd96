// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use pokedex_app::{
    Ability, CancelToken, CatalogItem, CatalogPage, CatalogSource, FetchError, PokemonDetails,
    PokemonId, Sprites, Stat, TypeTag,
};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::thread;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_DETAIL_CONCURRENCY: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub count: u64,
    pub entries: Vec<NamedResource>,
}

/// Blocking client for the public Pokémon REST API.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    timeout: Duration,
    detail_concurrency: usize,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            bail!("api.base_url must not be empty");
        }
        let parsed =
            Url::parse(trimmed).with_context(|| format!("api.base_url {trimmed:?} is not a URL"))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(anyhow!(
                "api.base_url {trimmed:?} must be an http(s) URL such as {DEFAULT_BASE_URL}"
            ));
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url: parsed,
            timeout,
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
            http,
        })
    }

    pub fn with_detail_concurrency(mut self, concurrency: usize) -> Self {
        self.detail_concurrency = concurrency.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn detail_concurrency(&self) -> usize {
        self.detail_concurrency
    }

    pub fn list(&self, offset: u64, limit: u32) -> Result<Listing, FetchError> {
        let mut url = self.endpoint(&["pokemon"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());

        let parsed: ListingResponse = self.get_json(url, "pokemon listing")?;
        Ok(Listing {
            count: parsed.count,
            entries: parsed.results,
        })
    }

    pub fn pokemon(&self, key: &str) -> Result<PokemonDetails, FetchError> {
        let url = self.endpoint(&["pokemon", key])?;
        let parsed: PokemonResponse = self.get_json(url, key)?;
        Ok(parsed.into())
    }

    /// Follows the URL the listing handed out, falling back to the name
    /// endpoint when the listing URL is unusable.
    fn entry_details(&self, entry: &NamedResource) -> Result<PokemonDetails, FetchError> {
        let url = match Url::parse(&entry.url) {
            Ok(url) => url,
            Err(_) => self.endpoint(&["pokemon", entry.name.as_str()])?,
        };
        let parsed: PokemonResponse = self.get_json(url, &entry.name)?;
        Ok(parsed.into())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::network(format!("{} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url, key: &str) -> Result<T, FetchError> {
        debug!(event_name = "api.request", url = %url, "GET");
        let response = self
            .http
            .get(url.clone())
            .send()
            .map_err(|error| connection_error(self.base_url(), self.timeout, error))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                key: key.to_owned(),
            });
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        response
            .json::<T>()
            .map_err(|error| FetchError::network(format!("decode response from {url}: {error}")))
    }
}

impl CatalogSource for Client {
    fn fetch_page(
        &self,
        offset: u64,
        limit: u32,
        token: &CancelToken,
    ) -> Result<CatalogPage, FetchError> {
        token.check()?;
        let listing = self.list(offset, limit)?;

        let mut items = Vec::with_capacity(listing.entries.len());
        for batch in listing.entries.chunks(self.detail_concurrency) {
            token.check()?;
            let results: Vec<Result<PokemonDetails, FetchError>> = thread::scope(|scope| {
                let handles: Vec<_> = batch
                    .iter()
                    .map(|entry| scope.spawn(move || self.entry_details(entry)))
                    .collect();
                handles
                    .into_iter()
                    .map(|handle| {
                        handle
                            .join()
                            .unwrap_or_else(|_| Err(FetchError::network("detail fetch panicked")))
                    })
                    .collect()
            });
            for result in results {
                items.push(result?.summary());
            }
        }
        token.check()?;

        debug!(
            event_name = "api.page.assembled",
            offset,
            items = items.len(),
            count = listing.count,
            "assembled catalog page"
        );
        Ok(CatalogPage {
            items,
            total_count: listing.count,
            offset,
        })
    }

    fn lookup(&self, key: &str, token: &CancelToken) -> Result<CatalogItem, FetchError> {
        token.check()?;
        let details = self.pokemon(key)?;
        token.check()?;
        Ok(details.summary())
    }

    fn details(&self, key: &str) -> Result<PokemonDetails, FetchError> {
        self.pokemon(key)
    }
}

fn connection_error(base_url: &str, timeout: Duration, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        return FetchError::network(format!(
            "request to {base_url} timed out after {timeout:?}"
        ));
    }
    FetchError::network(format!(
        "cannot reach {base_url} -- check [api].base_url and your connection ({error})"
    ))
}

fn clean_error_response(status: StatusCode, body: &str) -> FetchError {
    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(detail) = parsed.detail
        && !detail.is_empty()
    {
        return FetchError::network(format!("server error ({}): {}", status.as_u16(), detail));
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() < 100 && !trimmed.contains('{') {
        return FetchError::network(format!("server error ({}): {}", status.as_u16(), trimmed));
    }

    FetchError::network(format!("server returned {}", status.as_u16()))
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListingResponse {
    count: u64,
    #[serde(default)]
    results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedRef,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: NamedRef,
    #[serde(default)]
    is_hidden: bool,
}

#[derive(Debug, Deserialize)]
struct StatSlot {
    base_stat: u32,
    stat: NamedRef,
}

#[derive(Debug, Default, Deserialize)]
struct ArtworkSprite {
    front_default: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Option<ArtworkSprite>,
}

#[derive(Debug, Default, Deserialize)]
struct SpritesResponse {
    front_default: Option<String>,
    back_default: Option<String>,
    #[serde(default)]
    other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    types: Vec<TypeSlot>,
    #[serde(default)]
    abilities: Vec<AbilitySlot>,
    #[serde(default)]
    stats: Vec<StatSlot>,
    #[serde(default)]
    sprites: SpritesResponse,
}

impl From<PokemonResponse> for PokemonDetails {
    fn from(value: PokemonResponse) -> Self {
        let artwork = value
            .sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default);
        Self {
            id: PokemonId::new(value.id),
            name: value.name,
            height: value.height,
            weight: value.weight,
            types: value
                .types
                .into_iter()
                .map(|slot| TypeTag::new(slot.kind.name))
                .collect(),
            abilities: value
                .abilities
                .into_iter()
                .map(|slot| Ability {
                    name: slot.ability.name,
                    hidden: slot.is_hidden,
                })
                .collect(),
            stats: value
                .stats
                .into_iter()
                .map(|slot| Stat {
                    name: slot.stat.name,
                    base: slot.base_stat,
                })
                .collect(),
            sprites: Sprites {
                front: value.sprites.front_default,
                back: value.sprites.back_default,
                artwork,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Client, PokemonResponse, clean_error_response};
    use pokedex_app::{FetchError, PokemonDetails};
    use reqwest::StatusCode;
    use std::time::Duration;

    #[test]
    fn new_rejects_empty_and_non_http_base_urls() {
        let error = Client::new("  ", Duration::from_secs(1)).expect_err("empty base url");
        assert!(error.to_string().contains("must not be empty"));

        let error = Client::new("ftp://example.com/api", Duration::from_secs(1))
            .expect_err("ftp base url");
        assert!(error.to_string().contains("http(s) URL"));

        let error =
            Client::new("not a url", Duration::from_secs(1)).expect_err("garbage base url");
        assert!(error.to_string().contains("is not a URL"));
    }

    #[test]
    fn base_url_is_normalized_and_endpoints_escape_segments() {
        let client = Client::new("https://pokeapi.co/api/v2///", Duration::from_secs(1))
            .expect("client should initialize");
        assert_eq!(client.base_url(), "https://pokeapi.co/api/v2");

        let url = client
            .endpoint(&["pokemon", "mr mime"])
            .expect("endpoint should build");
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/mr%20mime");
        assert_eq!(client.with_detail_concurrency(0).detail_concurrency(), 1);
    }

    #[test]
    fn pokemon_payload_maps_to_details() {
        let raw = r#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "types": [{"slot": 1, "type": {"name": "electric", "url": "u"}}],
            "abilities": [
                {"ability": {"name": "static", "url": "u"}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "lightning-rod", "url": "u"}, "is_hidden": true, "slot": 3}
            ],
            "stats": [{"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "u"}}],
            "sprites": {
                "front_default": "front.png",
                "back_default": null,
                "other": {"official-artwork": {"front_default": null}}
            }
        }"#;
        let parsed: PokemonResponse = serde_json::from_str(raw).expect("payload should decode");
        let details = PokemonDetails::from(parsed);

        assert_eq!(details.id.get(), 25);
        assert_eq!(details.types[0].name, "electric");
        assert!(details.abilities[1].hidden);
        assert_eq!(details.stats[0].base, 35);
        assert_eq!(details.sprites.back, None);

        let summary = details.summary();
        assert_eq!(summary.image, "front.png");
        assert_eq!(summary.image_back, None);
    }

    #[test]
    fn minimal_payload_uses_defaults() {
        let parsed: PokemonResponse =
            serde_json::from_str(r#"{"id": 1, "name": "bulbasaur"}"#).expect("decode");
        let details = PokemonDetails::from(parsed);
        assert!(details.types.is_empty());
        assert_eq!(details.summary().image, "");
        assert_eq!(details.summary().primary_type(), "normal");
    }

    #[test]
    fn error_responses_are_condensed() {
        assert_eq!(
            clean_error_response(StatusCode::BAD_GATEWAY, "upstream down"),
            FetchError::network("server error (502): upstream down")
        );
        assert_eq!(
            clean_error_response(
                StatusCode::TOO_MANY_REQUESTS,
                r#"{"detail": "Request was throttled."}"#
            ),
            FetchError::network("server error (429): Request was throttled.")
        );
        assert_eq!(
            clean_error_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>{oops}</html>"),
            FetchError::network("server returned 500")
        );
    }
}
