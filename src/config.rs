use anyhow::{Result, bail};
use clap::Parser;

pub const ENV_GIST_ID: &str = "GIST_ID";
pub const ENV_GITHUB_TOKEN: &str = "GH_TOKEN";
pub const ENV_USERNAME: &str = "CHESS_COM_USERNAME";

#[derive(Parser)]
#[command(
    name = "chess-com-box",
    version,
    about = "Update a pinned gist with your Chess.com ratings"
)]
pub struct Cli {
    /// Gist id (otherwise GIST_ID)
    pub gist_id: Option<String>,
    /// GitHub access token (otherwise GH_TOKEN)
    pub token: Option<String>,
    /// Chess.com username (otherwise CHESS_COM_USERNAME)
    pub username: Option<String>,
}

pub struct Config {
    pub gist_id: String,
    pub token: String,
    pub username: String,
}

impl Config {
    /// Resolve configuration once at startup. The positional overrides win
    /// only when all three are given; otherwise the environment is used.
    pub fn resolve(cli: Cli) -> Result<Self> {
        Self::from_sources(cli, |key| std::env::var(key).ok())
    }

    fn from_sources(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let (Some(gist_id), Some(token), Some(username)) =
            (cli.gist_id, cli.token, cli.username)
        {
            return Ok(Self {
                gist_id,
                token,
                username,
            });
        }

        // An empty value counts as unset.
        let lookup = |key: &str| env(key).filter(|value| !value.is_empty());

        match (
            lookup(ENV_GIST_ID),
            lookup(ENV_GITHUB_TOKEN),
            lookup(ENV_USERNAME),
        ) {
            (Some(gist_id), Some(token), Some(username)) => Ok(Self {
                gist_id,
                token,
                username,
            }),
            (gist_id, token, username) => {
                let mut missing = Vec::new();
                if gist_id.is_none() {
                    missing.push(ENV_GIST_ID);
                }
                if token.is_none() {
                    missing.push(ENV_GITHUB_TOKEN);
                }
                if username.is_none() {
                    missing.push(ENV_USERNAME);
                }
                bail!("missing environment variables: {}", missing.join(", "));
            }
        }
    }
}
