// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::PokemonId;

pub const DEFAULT_TYPE: &str = "normal";
pub const MAX_BASE_STAT: u32 = 255;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeTag {
    pub name: String,
}

impl TypeTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn label(&self) -> String {
        self.name.to_uppercase()
    }
}

/// One entry of the browsable catalog. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: PokemonId,
    pub name: String,
    pub image: String,
    pub image_back: Option<String>,
    pub types: Vec<TypeTag>,
}

impl CatalogItem {
    pub fn primary_type(&self) -> &str {
        self.types
            .first()
            .map(|tag| tag.name.as_str())
            .unwrap_or(DEFAULT_TYPE)
    }

    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    pub fn display_number(&self) -> String {
        format_number(self.id)
    }

    /// Case-insensitive substring on the name, or plain substring on the
    /// decimal id.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
            || self.id.get().to_string().contains(query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    pub total_count: u64,
    pub offset: u64,
}

impl CatalogPage {
    pub fn next_offset(&self) -> u64 {
        self.offset + self.items.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front: Option<String>,
    pub back: Option<String>,
    pub artwork: Option<String>,
}

impl Sprites {
    pub fn primary_image(&self) -> Option<&str> {
        self.artwork
            .as_deref()
            .filter(|uri| !uri.is_empty())
            .or(self.front.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub hidden: bool,
}

impl Ability {
    pub fn display_name(&self) -> String {
        self.name.replacen('-', " ", 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTier {
    Excellent,
    Good,
    Fair,
    Poor,
    Weak,
}

impl StatTier {
    pub const fn from_base(base: u32) -> Self {
        match base {
            100.. => Self::Excellent,
            70..=99 => Self::Good,
            50..=69 => Self::Fair,
            30..=49 => Self::Poor,
            _ => Self::Weak,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Weak => "weak",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}

impl Stat {
    pub fn label(&self) -> &str {
        match self.name.as_str() {
            "hp" => "HP",
            "attack" => "Attack",
            "defense" => "Defense",
            "special-attack" => "Sp. Atk",
            "special-defense" => "Sp. Def",
            "speed" => "Speed",
            other => other,
        }
    }

    pub fn ratio(&self) -> f64 {
        (f64::from(self.base) / f64::from(MAX_BASE_STAT)).min(1.0)
    }

    pub const fn tier(&self) -> StatTier {
        StatTier::from_base(self.base)
    }
}

/// Full record behind the detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetails {
    pub id: PokemonId,
    pub name: String,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub types: Vec<TypeTag>,
    pub abilities: Vec<Ability>,
    pub stats: Vec<Stat>,
    pub sprites: Sprites,
}

impl PokemonDetails {
    pub fn height_meters(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_kilograms(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    pub fn total_base_stats(&self) -> u32 {
        self.stats.iter().map(|stat| stat.base).sum()
    }

    pub fn primary_type(&self) -> &str {
        self.types
            .first()
            .map(|tag| tag.name.as_str())
            .unwrap_or(DEFAULT_TYPE)
    }

    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    pub fn display_number(&self) -> String {
        format_number(self.id)
    }

    pub fn summary(&self) -> CatalogItem {
        CatalogItem {
            id: self.id,
            name: self.name.clone(),
            image: self.sprites.primary_image().unwrap_or_default().to_owned(),
            image_back: self.sprites.back.clone(),
            types: self.types.clone(),
        }
    }
}

pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_number(id: PokemonId) -> String {
    format!("#{:03}", id.get())
}
