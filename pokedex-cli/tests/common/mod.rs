//! Helpers for running the `pokedex` binary against a temporary data directory

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Nothing listens here, so any network access fails fast
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    /// Empty data directory and a config that never retries
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.yaml"),
            format!(
                "api_base_url: {UNREACHABLE_API}\ntimeout_seconds: 2\nretry:\n  max_retries: 0\n"
            ),
        )
        .unwrap();
        Self { dir }
    }

    /// Data directory with a fresh catalog cache
    pub fn with_catalog() -> Self {
        let env = Self::new();
        env.seed_catalog(sample_catalog());
        env
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn seed_catalog(&self, creatures: serde_json::Value) {
        let cache_dir = self.data_dir().join("cache");
        std::fs::create_dir_all(&cache_dir).unwrap();
        let cached = serde_json::json!({
            "cached_at": chrono::Utc::now().to_rfc3339(),
            "creatures": creatures,
        });
        std::fs::write(cache_dir.join("catalog.json"), cached.to_string()).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_pokedex"))
            .args(args)
            .arg("--config")
            .arg(self.dir.path().join("config.yaml"))
            .arg("--data-dir")
            .arg(self.data_dir())
            .env_remove("POKEDEX_API_URL")
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    /// Run and require success, returning stdout
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "pokedex {:?} failed:\nstderr: {}\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8(output.stdout).unwrap()
    }
}

pub fn sample_catalog() -> serde_json::Value {
    serde_json::json!([
        {
            "pokedex_id": 1,
            "generation": 1,
            "category": "Pokémon Graine",
            "name": { "fr": "Bulbizarre", "en": "Bulbasaur", "jp": "フシギダネ" },
            "types": [{ "name": "Plante" }, { "name": "Poison" }]
        },
        {
            "pokedex_id": 4,
            "generation": 1,
            "category": "Pokémon Lézard",
            "name": { "fr": "Salamèche", "en": "Charmander", "jp": "ヒトカゲ" },
            "types": [{ "name": "Feu" }],
            "stats": { "hp": 39, "atk": 52, "def": 43, "spe_atk": 60, "spe_def": 50, "vit": 65 },
            "talents": [{ "name": "Brasier", "tc": false }, { "name": "Force Soleil", "tc": true }]
        },
        {
            "pokedex_id": 7,
            "generation": 1,
            "name": { "fr": "Carapuce", "en": "Squirtle", "jp": "ゼニガメ" },
            "types": [{ "name": "Eau" }]
        },
        {
            "pokedex_id": 155,
            "generation": 2,
            "name": { "fr": "Héricendre", "en": "Cyndaquil", "jp": "ヒノアラシ" },
            "types": [{ "name": "Feu" }]
        }
    ])
}
