use super::*;
use crate::Position;
use crate::decision::Passive;
use crate::decision::Provider;
use crate::decision::Remote;
use crate::decision::RemoteConfig;
use crate::gameroom::Player;
use crate::gameroom::Roster;
use crate::prompt::Template;
use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;

/// Players as written in a roster file.
///
/// ```toml
/// [[players]]
/// name = "alice"
/// seat = 0
/// template_path = "prompts/tight.txt"
///
/// [players.provider]
/// kind = "remote"
/// model = "claude-3-5-sonnet-latest"
///
/// [[players]]
/// name = "bob"
/// seat = 1
/// provider = { kind = "passive" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RosterConfig {
    pub players: Vec<PlayerConfig>,
    /// Directory relative template paths resolve against.
    #[serde(skip)]
    pub base: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub seat: Position,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub template_path: Option<PathBuf>,
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderConfig {
    Remote(RemoteOptions),
    #[default]
    Passive,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RemoteOptions {
    pub model: String,
    pub endpoint: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system: Option<String>,
}

impl Default for RemoteOptions {
    fn default() -> Self {
        let defaults = RemoteConfig::default();
        Self {
            model: defaults.model,
            endpoint: defaults.endpoint,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            max_tokens: defaults.max_tokens,
            temperature: defaults.temperature,
            system: None,
        }
    }
}

impl RosterConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<Self>(text)?)
    }

    pub fn load<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&text)?;
        config.base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Compile every template and construct every provider.
    pub fn build(&self) -> Result<Roster, ConfigError> {
        let players = self
            .players
            .iter()
            .map(|player| {
                Ok(Player::new(
                    player.name.clone(),
                    player.seat,
                    self.provider(player)?,
                    self.template(player)?,
                ))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Roster::new(players)
    }

    fn template(&self, player: &PlayerConfig) -> Result<Template, ConfigError> {
        let text = match (&player.template, &player.template_path) {
            (Some(_), Some(_)) => return Err(ConfigError::TemplateConflict(player.name.clone())),
            (None, None) => return Ok(Template::default()),
            (Some(text), None) => text.clone(),
            (None, Some(path)) => {
                let path = self.base.join(path);
                std::fs::read_to_string(&path).map_err(|source| ConfigError::Read { path, source })?
            }
        };
        Template::compile(&text).map_err(|source| ConfigError::Template {
            player: player.name.clone(),
            source,
        })
    }

    fn provider(&self, player: &PlayerConfig) -> Result<Box<dyn Provider>, ConfigError> {
        match &player.provider {
            ProviderConfig::Passive => Ok(Box::new(Passive)),
            ProviderConfig::Remote(options) => {
                let api_key = std::env::var(&options.api_key_env)
                    .map_err(|_| ConfigError::MissingKey(options.api_key_env.clone()))?;
                let defaults = RemoteConfig::default();
                let config = RemoteConfig {
                    endpoint: options.endpoint.clone(),
                    api_key: Some(api_key),
                    model: options.model.clone(),
                    max_tokens: options.max_tokens,
                    temperature: options.temperature,
                    system: options.system.clone().unwrap_or(defaults.system),
                    ..defaults
                };
                let remote = Remote::new(config).map_err(|source| ConfigError::Provider {
                    player: player.name.clone(),
                    source,
                })?;
                Ok(Box::new(remote))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = r#"
        [[players]]
        name = "alice"
        seat = 0
        template = "{{player}} to act: {{legal_actions}}"

        [players.provider]
        kind = "remote"
        model = "some-model"
        api_key_env = "ROBODEALER_TEST_KEY_THAT_IS_NEVER_SET"

        [[players]]
        name = "bob"
        seat = 1
    "#;

    #[test]
    fn parses_tagged_providers() {
        let config = RosterConfig::parse(ROSTER).unwrap();
        assert_eq!(config.players.len(), 2);
        assert_eq!(config.players[1].provider, ProviderConfig::Passive);
        match &config.players[0].provider {
            ProviderConfig::Remote(options) => {
                assert_eq!(options.model, "some-model");
                assert_eq!(options.max_tokens, RemoteOptions::default().max_tokens);
            }
            other => panic!("expected remote, got {:?}", other),
        }
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let config = RosterConfig::parse(ROSTER).unwrap();
        assert!(matches!(config.build(), Err(ConfigError::MissingKey(_))));
    }

    #[test]
    fn builds_passive_roster_with_template_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("prompt.txt"), "hello {{player}}").unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(
            &path,
            r#"
            [[players]]
            name = "alice"
            seat = 0
            template_path = "prompt.txt"

            [[players]]
            name = "bob"
            seat = 3
            provider = { kind = "passive" }
            "#,
        )
        .unwrap();
        let roster = RosterConfig::load(&path).unwrap().build().unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.name(3), Some("bob"));
        assert!(roster.get(0).is_some());
    }

    #[test]
    fn bad_templates_are_fatal() {
        let config = RosterConfig::parse(
            r#"
            [[players]]
            name = "alice"
            seat = 0
            template = "{{nonsense}}"

            [[players]]
            name = "bob"
            seat = 1
            "#,
        )
        .unwrap();
        assert!(matches!(config.build(), Err(ConfigError::Template { .. })));
    }

    #[test]
    fn duplicate_seats_are_fatal() {
        let config = RosterConfig::parse(
            r#"
            [[players]]
            name = "alice"
            seat = 0

            [[players]]
            name = "bob"
            seat = 0
            "#,
        )
        .unwrap();
        assert!(matches!(config.build(), Err(ConfigError::DuplicateSeat(0))));
    }
}
