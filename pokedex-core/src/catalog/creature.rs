//! Creature records as served by the Tyradex API
//!
//! Only the fields the catalog filters on are interpreted. Every other field
//! is kept verbatim in `extra` so a record written to favorites reads back
//! exactly as it was fetched.
//!
//! Decoding is lenient: a field that is missing, `null` or of the wrong shape
//! decodes as absent instead of failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Language-tagged display name. `fr` is the primary language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatureName {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub fr: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub jp: Option<String>,
}

/// A type tag, e.g. `{"name": "Feu", "image": "https://..."}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeTag {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Base stats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatureStats {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hp: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub atk: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub def: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub spe_atk: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub spe_def: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub vit: Option<u32>,
}

impl CreatureStats {
    /// Sum of all known stats
    pub fn total(&self) -> u32 {
        [
            self.hp,
            self.atk,
            self.def,
            self.spe_atk,
            self.spe_def,
            self.vit,
        ]
        .iter()
        .flatten()
        .sum()
    }
}

/// Sprite URLs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub regular: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub shiny: Option<String>,
}

/// An ability. `tc` marks the hidden ability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub tc: Option<bool>,
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// National Pokédex number, the primary key
    pub pokedex_id: u32,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub generation: Option<u32>,

    #[serde(default, deserialize_with = "lenient_or_default")]
    pub name: CreatureName,

    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<TypeTag>>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub stats: Option<CreatureStats>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sprites: Option<Sprites>,

    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub talents: Option<Vec<Talent>>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    /// Everything else the API sent, untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Creature {
    /// Create a record with a primary (French) name and nothing else
    pub fn new(pokedex_id: u32, name: impl Into<String>) -> Self {
        Self {
            pokedex_id,
            generation: None,
            name: CreatureName {
                fr: Some(name.into()),
                ..Default::default()
            },
            types: None,
            category: None,
            stats: None,
            sprites: None,
            talents: None,
            height: None,
            weight: None,
            extra: Map::new(),
        }
    }

    pub fn with_english_name(mut self, name: impl Into<String>) -> Self {
        self.name.en = Some(name.into());
        self
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = Some(
            types
                .iter()
                .map(|t| TypeTag {
                    name: Some(t.to_string()),
                    image: None,
                })
                .collect(),
        );
        self
    }

    pub fn with_generation(mut self, generation: u32) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Decode one wire record. Returns `None` for anything that is not an
    /// object with a positive `pokedex_id`.
    pub fn from_value(value: Value) -> Option<Self> {
        let creature: Creature = serde_json::from_value(value).ok()?;
        if creature.pokedex_id == 0 {
            return None;
        }
        Some(creature)
    }

    /// Decode a list of wire records, skipping the ones that cannot be used
    pub fn collect_lenient(values: Vec<Value>) -> Vec<Self> {
        let total = values.len();
        let creatures: Vec<Creature> = values.into_iter().filter_map(Self::from_value).collect();

        if creatures.len() < total {
            tracing::warn!(
                "Skipped {} of {} records without a usable pokedex_id",
                total - creatures.len(),
                total
            );
        }

        creatures
    }

    pub fn id(&self) -> u32 {
        self.pokedex_id
    }

    /// Primary-language (French) name
    pub fn primary_name(&self) -> Option<&str> {
        self.name.fr.as_deref()
    }

    /// Best name available for display, primary language first
    pub fn display_name(&self) -> &str {
        self.names().next().unwrap_or("???")
    }

    /// All names the record carries, primary first
    pub fn names(&self) -> impl Iterator<Item = &str> {
        [&self.name.fr, &self.name.en, &self.name.jp]
            .into_iter()
            .filter_map(|n| n.as_deref())
    }

    /// Names of the well-formed type tags, in order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types
            .iter()
            .flatten()
            .filter_map(|t| t.name.as_deref())
    }

    /// Case-insensitive type check
    pub fn has_type(&self, type_name: &str) -> bool {
        let wanted = type_name.to_lowercase();
        self.type_names().any(|t| t.to_lowercase() == wanted)
    }

    pub fn generation(&self) -> Option<u32> {
        self.generation
    }

    /// Pokédex number padded to three digits, e.g. `#004`
    pub fn padded_number(&self) -> String {
        format!("#{:03}", self.pokedex_id)
    }
}

/// Deserialize `T`, mapping any shape mismatch to `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Deserialize a list, dropping elements that do not decode. Anything that
/// is not an array becomes `None`.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter(|item| item.is_object())
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn salameche_json() -> Value {
        json!({
            "pokedex_id": 4,
            "generation": 1,
            "category": "Pokémon Lézard",
            "name": { "fr": "Salamèche", "en": "Charmander", "jp": "ヒトカゲ" },
            "sprites": { "regular": "https://example.test/4/regular.png", "shiny": null, "gmax": null },
            "types": [{ "name": "Feu", "image": "https://example.test/feu.png" }],
            "talents": [{ "name": "Brasier", "tc": false }, { "name": "Force Soleil", "tc": true }],
            "stats": { "hp": 39, "atk": 52, "def": 43, "spe_atk": 60, "spe_def": 50, "vit": 65 },
            "height": "0,6 m",
            "weight": "8,5 kg",
            "catch_rate": 45
        })
    }

    #[test]
    fn test_decode_full_record() {
        let creature = Creature::from_value(salameche_json()).unwrap();

        assert_eq!(creature.id(), 4);
        assert_eq!(creature.generation(), Some(1));
        assert_eq!(creature.primary_name(), Some("Salamèche"));
        assert_eq!(creature.names().collect::<Vec<_>>(), vec!["Salamèche", "Charmander", "ヒトカゲ"]);
        assert_eq!(creature.type_names().collect::<Vec<_>>(), vec!["Feu"]);
        assert_eq!(creature.stats.as_ref().unwrap().total(), 309);
        assert_eq!(creature.talents.as_ref().unwrap().len(), 2);
        assert_eq!(creature.extra.get("catch_rate"), Some(&json!(45)));
    }

    #[test]
    fn test_unknown_fields_survive_reserialization() {
        let creature = Creature::from_value(salameche_json()).unwrap();
        let reencoded = serde_json::to_value(&creature).unwrap();
        let decoded = Creature::from_value(reencoded).unwrap();

        assert_eq!(decoded, creature);
        assert_eq!(decoded.extra.get("catch_rate"), Some(&json!(45)));
    }

    #[test]
    fn test_malformed_types_decode_as_absent() {
        let creature = Creature::from_value(json!({
            "pokedex_id": 10,
            "name": { "fr": "Chenipan" },
            "types": "Insecte"
        }))
        .unwrap();
        assert!(creature.types.is_none());
        assert!(!creature.has_type("Insecte"));

        let creature = Creature::from_value(json!({
            "pokedex_id": 11,
            "types": [null, { "name": "Insecte" }, 42, { "image": "x" }]
        }))
        .unwrap();
        assert_eq!(creature.type_names().collect::<Vec<_>>(), vec!["Insecte"]);
    }

    #[test]
    fn test_null_names_and_generation() {
        let creature = Creature::from_value(json!({
            "pokedex_id": 25,
            "generation": "one",
            "name": null
        }))
        .unwrap();

        assert_eq!(creature.generation(), None);
        assert_eq!(creature.primary_name(), None);
        assert_eq!(creature.display_name(), "???");
    }

    #[test]
    fn test_unusable_records_are_skipped() {
        let values = vec![
            json!({ "pokedex_id": 0, "name": { "fr": "MissingNo." } }),
            json!("not a record"),
            json!({ "name": { "fr": "Sans numéro" } }),
            salameche_json(),
        ];

        let creatures = Creature::collect_lenient(values);
        assert_eq!(creatures.len(), 1);
        assert_eq!(creatures[0].id(), 4);
    }

    #[test]
    fn test_has_type_ignores_case() {
        let creature = Creature::new(135, "Voltali").with_types(&["Électrik"]);
        assert!(creature.has_type("électrik"));
        assert!(creature.has_type("ÉLECTRIK"));
        assert!(!creature.has_type("Eau"));
    }

    #[test]
    fn test_padded_number() {
        assert_eq!(Creature::new(4, "Salamèche").padded_number(), "#004");
        assert_eq!(Creature::new(1025, "Pohmarmotte").padded_number(), "#1025");
    }
}
