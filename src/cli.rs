//! Command-line front end for manual calls against the Threads API.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use threads_sdk::{
    AccessToken, Config, InsightsRange, MediaType, ThreadsClient, UserThreadsQuery, generate_state,
};

const DEFAULT_MEDIA_FIELDS: &str = "id,media_type,text,permalink,timestamp";
const DEFAULT_PROFILE_FIELDS: &str = "id,username,threads_profile_picture_url,threads_biography";

/// Threads API client
#[derive(Parser, Debug)]
#[command(name = "threads", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the browser authorization URL
    AuthUrl {
        /// State value echoed back to the redirect URI
        #[arg(long, conflicts_with = "random_state")]
        state: Option<String>,
        /// Generate a random state value
        #[arg(long)]
        random_state: bool,
    },
    /// Exchange an authorization code for a short-lived token
    Exchange { code: String },
    /// Exchange a short-lived token for a long-lived token
    LongLived { token: String },
    /// Refresh a long-lived token
    Refresh { token: String },
    /// Create and publish a single post
    Post(PostArgs),
    /// List a user's threads
    Threads(ThreadsArgs),
    /// Show a user's profile
    Profile {
        #[command(flatten)]
        auth: TokenArgs,
        #[arg(long)]
        user: String,
        #[arg(long, default_value = DEFAULT_PROFILE_FIELDS)]
        fields: String,
    },
    /// List replies to a post
    Replies {
        #[command(flatten)]
        auth: TokenArgs,
        media_id: String,
        #[arg(long, default_value = DEFAULT_MEDIA_FIELDS)]
        fields: String,
        /// Oldest first instead of newest first
        #[arg(long)]
        chronological: bool,
    },
    /// Hide or unhide a reply
    Hide {
        #[command(flatten)]
        auth: TokenArgs,
        reply_id: String,
        #[arg(long)]
        unhide: bool,
    },
    /// Show media or user insights
    Insights(InsightsArgs),
}

#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Access token
    #[arg(long, env = "THREADS_ACCESS_TOKEN", hide_env_values = true)]
    pub token: String,
}

impl TokenArgs {
    fn access_token(&self) -> AccessToken {
        AccessToken::new(self.token.as_str())
    }
}

#[derive(Args, Debug)]
pub struct PostArgs {
    #[command(flatten)]
    pub auth: TokenArgs,
    #[arg(long)]
    pub user: String,
    /// Post text. Text posts only: image and video posts carry no caption
    #[arg(
        long,
        required_unless_present_any = ["image", "video"],
        conflicts_with_all = ["image", "video"]
    )]
    pub text: Option<String>,
    #[arg(long, conflicts_with = "video")]
    pub image: Option<String>,
    #[arg(long)]
    pub video: Option<String>,
}

#[derive(Args, Debug)]
pub struct ThreadsArgs {
    #[command(flatten)]
    pub auth: TokenArgs,
    #[arg(long)]
    pub user: String,
    #[arg(long, default_value = DEFAULT_MEDIA_FIELDS)]
    pub fields: String,
    #[arg(long, default_value_t = UserThreadsQuery::DEFAULT_LIMIT)]
    pub limit: u32,
    #[arg(long)]
    pub since: Option<String>,
    #[arg(long)]
    pub until: Option<String>,
}

#[derive(Args, Debug)]
pub struct InsightsArgs {
    #[command(flatten)]
    pub auth: TokenArgs,
    #[arg(long, conflicts_with = "user", required_unless_present = "user")]
    pub media: Option<String>,
    #[arg(long)]
    pub user: Option<String>,
    /// Comma-separated metric names
    #[arg(long, default_value = "views,likes,replies")]
    pub metrics: String,
    /// Unix timestamp lower bound (user insights only)
    #[arg(long)]
    pub since: Option<i64>,
    #[arg(long)]
    pub until: Option<i64>,
}

/// Run a parsed command and map the outcome to an exit code.
pub async fn run(cli: Cli) -> ExitCode {
    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if !matches!(cli.command, Commands::AuthUrl { .. }) {
        config.validate().context("Incomplete client configuration")?;
    }
    let client = ThreadsClient::from_config(&config);

    match cli.command {
        Commands::AuthUrl {
            state,
            random_state,
        } => {
            let state = if random_state {
                Some(generate_state())
            } else {
                state
            };
            println!("{}", client.authorization_url(state.as_deref()));
            if let Some(state) = state {
                eprintln!("state: {state}");
            }
            Ok(())
        }
        Commands::Exchange { code } => print_json(&client.get_access_token(&code).await?),
        Commands::LongLived { token } => {
            print_json(&client.get_long_lived_token(&AccessToken::new(token)).await?)
        }
        Commands::Refresh { token } => print_json(
            &client
                .refresh_long_lived_token(&AccessToken::new(token))
                .await?,
        ),
        Commands::Post(args) => post(&client, args).await,
        Commands::Threads(args) => {
            let query = UserThreadsQuery {
                since: args.since,
                until: args.until,
                limit: args.limit,
            };
            let threads = client
                .get_user_threads(
                    &args.auth.access_token(),
                    &args.user,
                    &split_list(&args.fields),
                    &query,
                )
                .await?;
            print_json(&threads)
        }
        Commands::Profile { auth, user, fields } => print_json(
            &client
                .get_user_profile(&auth.access_token(), &user, &split_list(&fields))
                .await?,
        ),
        Commands::Replies {
            auth,
            media_id,
            fields,
            chronological,
        } => print_json(
            &client
                .get_replies(
                    &auth.access_token(),
                    &media_id,
                    &split_list(&fields),
                    Some(!chronological),
                )
                .await?,
        ),
        Commands::Hide {
            auth,
            reply_id,
            unhide,
        } => print_json(
            &client
                .hide_reply(&auth.access_token(), &reply_id, !unhide)
                .await?,
        ),
        Commands::Insights(args) => insights(&client, args).await,
    }
}

async fn post(client: &ThreadsClient, args: PostArgs) -> Result<()> {
    let token = args.auth.access_token();
    let (media_type, media_url) = match (&args.image, &args.video) {
        (Some(url), _) => (MediaType::Image, Some(url.as_str())),
        (None, Some(url)) => (MediaType::Video, Some(url.as_str())),
        (None, None) => (MediaType::Text, None),
    };

    let creation_id = client
        .create_media_container(
            &token,
            &args.user,
            media_type,
            media_url,
            args.text.as_deref(),
        )
        .await?;
    let id = client
        .publish_media_container(&token, &args.user, &creation_id)
        .await?;

    print_json(&serde_json::json!({ "creation_id": creation_id, "id": id }))
}

async fn insights(client: &ThreadsClient, args: InsightsArgs) -> Result<()> {
    let token = args.auth.access_token();
    let metrics = split_list(&args.metrics);
    let insights = match (&args.media, &args.user) {
        (Some(media_id), _) => client.get_media_insights(&token, media_id, &metrics).await?,
        (None, Some(user_id)) => {
            let range = InsightsRange {
                since: args.since,
                until: args.until,
            };
            client
                .get_user_insights(&token, user_id, &metrics, &range)
                .await?
        }
        (None, None) => anyhow::bail!("Either --media or --user is required"),
    };
    print_json(&insights)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Split a comma-separated CLI list, dropping empty entries.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
