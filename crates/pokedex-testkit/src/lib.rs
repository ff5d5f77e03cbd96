// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use pokedex_app::{
    Ability, CancelToken, CatalogItem, CatalogPage, CatalogSource, FetchError, PokemonDetails,
    PokemonId, Sprites, Stat, TypeTag,
};
use serde_json::json;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

const SPECIES: [(&str, &[&str]); 40] = [
    ("bulbasaur", &["grass", "poison"]),
    ("ivysaur", &["grass", "poison"]),
    ("venusaur", &["grass", "poison"]),
    ("charmander", &["fire"]),
    ("charmeleon", &["fire"]),
    ("charizard", &["fire", "flying"]),
    ("squirtle", &["water"]),
    ("wartortle", &["water"]),
    ("blastoise", &["water"]),
    ("caterpie", &["bug"]),
    ("metapod", &["bug"]),
    ("butterfree", &["bug", "flying"]),
    ("weedle", &["bug", "poison"]),
    ("kakuna", &["bug", "poison"]),
    ("beedrill", &["bug", "poison"]),
    ("pidgey", &["normal", "flying"]),
    ("pidgeotto", &["normal", "flying"]),
    ("pidgeot", &["normal", "flying"]),
    ("rattata", &["normal"]),
    ("raticate", &["normal"]),
    ("spearow", &["normal", "flying"]),
    ("fearow", &["normal", "flying"]),
    ("ekans", &["poison"]),
    ("arbok", &["poison"]),
    ("pikachu", &["electric"]),
    ("raichu", &["electric"]),
    ("sandshrew", &["ground"]),
    ("sandslash", &["ground"]),
    ("nidoran-f", &["poison"]),
    ("nidorina", &["poison"]),
    ("nidoqueen", &["poison", "ground"]),
    ("nidoran-m", &["poison"]),
    ("nidorino", &["poison"]),
    ("nidoking", &["poison", "ground"]),
    ("clefairy", &["fairy"]),
    ("clefable", &["fairy"]),
    ("vulpix", &["fire"]),
    ("ninetales", &["fire"]),
    ("jigglypuff", &["normal", "fairy"]),
    ("wigglytuff", &["normal", "fairy"]),
];

const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

pub fn species_name(id: u32) -> String {
    usize::try_from(id)
        .ok()
        .and_then(|id| id.checked_sub(1))
        .and_then(|index| SPECIES.get(index))
        .map(|(name, _)| (*name).to_owned())
        .unwrap_or_else(|| format!("pokemon-{id}"))
}

fn species_types(id: u32) -> Vec<&'static str> {
    usize::try_from(id)
        .ok()
        .and_then(|id| id.checked_sub(1))
        .and_then(|index| SPECIES.get(index))
        .map(|(_, types)| types.to_vec())
        .unwrap_or_else(|| vec!["normal"])
}

pub fn artwork_url(id: u32) -> String {
    format!("https://sprites.example/artwork/{id}.png")
}

pub fn sample_item(id: u32) -> CatalogItem {
    CatalogItem {
        id: PokemonId::new(id),
        name: species_name(id),
        image: artwork_url(id),
        image_back: Some(format!("https://sprites.example/back/{id}.png")),
        types: species_types(id).into_iter().map(TypeTag::new).collect(),
    }
}

pub fn sample_details(id: u32) -> PokemonDetails {
    PokemonDetails {
        id: PokemonId::new(id),
        name: species_name(id),
        height: 4 + id % 17,
        weight: 60 + id * 3,
        types: species_types(id).into_iter().map(TypeTag::new).collect(),
        abilities: vec![
            Ability {
                name: "keen-eye".to_owned(),
                hidden: false,
            },
            Ability {
                name: "run-away".to_owned(),
                hidden: true,
            },
        ],
        stats: STAT_NAMES
            .iter()
            .enumerate()
            .map(|(index, name)| Stat {
                name: (*name).to_owned(),
                base: 20 + ((id + index as u32 * 13) % 110),
            })
            .collect(),
        sprites: Sprites {
            front: Some(format!("https://sprites.example/front/{id}.png")),
            back: Some(format!("https://sprites.example/back/{id}.png")),
            artwork: Some(artwork_url(id)),
        },
    }
}

/// Items `offset + 1 ..= offset + limit`, clipped to `total`.
pub fn sample_page(offset: u64, limit: u32, total: u64) -> CatalogPage {
    let end = (offset + u64::from(limit)).min(total);
    let items = (offset..end)
        .filter_map(|index| u32::try_from(index + 1).ok())
        .map(sample_item)
        .collect();
    CatalogPage {
        items,
        total_count: total,
        offset,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    Page { offset: u64, limit: u32 },
    Lookup(String),
    Details(String),
}

/// In-memory catalog of `total` synthetic entries with scriptable failures.
#[derive(Debug)]
pub struct FakeSource {
    total: u64,
    failing_offsets: Mutex<HashSet<u64>>,
    failing_lookups: Mutex<HashSet<String>>,
    calls: Mutex<Vec<SourceCall>>,
}

impl FakeSource {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            failing_offsets: Mutex::new(HashSet::new()),
            failing_lookups: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_page_at(self, offset: u64) -> Self {
        lock(&self.failing_offsets).insert(offset);
        self
    }

    pub fn fail_lookup_of(self, key: &str) -> Self {
        lock(&self.failing_lookups).insert(key.to_owned());
        self
    }

    pub fn heal(&self) {
        lock(&self.failing_offsets).clear();
        lock(&self.failing_lookups).clear();
    }

    pub fn calls(&self) -> Vec<SourceCall> {
        lock(&self.calls).clone()
    }

    pub fn network_calls(&self) -> usize {
        lock(&self.calls).len()
    }

    fn record(&self, call: SourceCall) {
        lock(&self.calls).push(call);
    }

    fn resolve(&self, key: &str) -> Option<u32> {
        let key = key.trim().to_lowercase();
        if let Ok(id) = key.parse::<u32>() {
            return (id >= 1 && u64::from(id) <= self.total).then_some(id);
        }
        (1..=u32::try_from(self.total).unwrap_or(u32::MAX)).find(|id| species_name(*id) == key)
    }
}

impl CatalogSource for FakeSource {
    fn fetch_page(
        &self,
        offset: u64,
        limit: u32,
        token: &CancelToken,
    ) -> Result<CatalogPage, FetchError> {
        self.record(SourceCall::Page { offset, limit });
        token.check()?;
        if lock(&self.failing_offsets).contains(&offset) {
            return Err(FetchError::network(format!(
                "scripted failure at offset {offset}"
            )));
        }
        Ok(sample_page(offset, limit, self.total))
    }

    fn lookup(&self, key: &str, token: &CancelToken) -> Result<CatalogItem, FetchError> {
        self.record(SourceCall::Lookup(key.to_owned()));
        token.check()?;
        if lock(&self.failing_lookups).contains(key) {
            return Err(FetchError::network(format!("scripted failure for {key}")));
        }
        self.resolve(key)
            .map(sample_item)
            .ok_or_else(|| FetchError::NotFound {
                key: key.to_owned(),
            })
    }

    fn details(&self, key: &str) -> Result<PokemonDetails, FetchError> {
        self.record(SourceCall::Details(key.to_owned()));
        self.resolve(key)
            .map(sample_details)
            .ok_or_else(|| FetchError::NotFound {
                key: key.to_owned(),
            })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Body of `GET /pokemon?limit=&offset=` whose entry URLs point at `base_url`.
pub fn listing_json(base_url: &str, offset: u64, limit: u32, total: u64) -> String {
    let base_url = base_url.trim_end_matches('/');
    let end = (offset + u64::from(limit)).min(total);
    let results: Vec<serde_json::Value> = (offset..end)
        .map(|index| {
            let id = index + 1;
            let name = u32::try_from(id)
                .map(species_name)
                .unwrap_or_else(|_| format!("pokemon-{id}"));
            json!({ "name": name, "url": format!("{base_url}/pokemon/{id}/") })
        })
        .collect();
    let next = (end < total).then(|| format!("{base_url}/pokemon?offset={end}&limit={limit}"));
    json!({
        "count": total,
        "next": next,
        "previous": null,
        "results": results,
    })
    .to_string()
}

/// Body of `GET /pokemon/{id}` shaped like the public API response.
pub fn pokemon_json(id: u32) -> String {
    let details = sample_details(id);
    let types: Vec<serde_json::Value> = details
        .types
        .iter()
        .enumerate()
        .map(|(index, tag)| {
            json!({
                "slot": index + 1,
                "type": {
                    "name": tag.name,
                    "url": format!("https://pokeapi.example/type/{index}/"),
                },
            })
        })
        .collect();
    let abilities: Vec<serde_json::Value> = details
        .abilities
        .iter()
        .enumerate()
        .map(|(index, ability)| {
            json!({
                "ability": { "name": ability.name, "url": "https://pokeapi.example/ability/1/" },
                "is_hidden": ability.hidden,
                "slot": index + 1,
            })
        })
        .collect();
    let stats: Vec<serde_json::Value> = details
        .stats
        .iter()
        .map(|stat| {
            json!({
                "base_stat": stat.base,
                "effort": 0,
                "stat": { "name": stat.name, "url": "https://pokeapi.example/stat/1/" },
            })
        })
        .collect();
    json!({
        "id": id,
        "name": details.name,
        "height": details.height,
        "weight": details.weight,
        "types": types,
        "abilities": abilities,
        "stats": stats,
        "sprites": {
            "front_default": details.sprites.front,
            "back_default": details.sprites.back,
            "other": {
                "official-artwork": { "front_default": details.sprites.artwork },
                "dream_world": { "front_default": null },
            },
        },
    })
    .to_string()
}
