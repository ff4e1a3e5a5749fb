use std::sync::Arc;

use serenity::async_trait;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::client::{Client, Context, EventHandler};
use serenity::http::Http;
use serenity::model::application::{
    Command as ApplicationCommand, CommandOptionType, Interaction,
};
use serenity::model::gateway::{GatewayIntents, Ready};
use serenity::model::id::GuildId;

use crate::controllers::interactions::InteractionController;
use crate::domain::command::Command;
use crate::error::AppResult;
use crate::infrastructure::config::Config;

/// Where slash commands get registered: for every guild the bot is in, or
/// for one guild only (development).
#[derive(Debug, Clone, Copy)]
pub enum CommandScope {
    Global,
    Guild(GuildId),
}

impl CommandScope {
    pub fn from_config(config: &Config) -> Self {
        match config.guild_id {
            Some(id) => Self::Guild(GuildId::new(id)),
            None => Self::Global,
        }
    }
}

/// The five slash commands and their option schemas.
pub fn command_definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("random")
            .description("Random post from a random subreddit from this channel's list"),
        CreateCommand::new("add")
            .description("Add a subreddit to this channel's list")
            .add_option(subreddit_option()),
        CreateCommand::new("remove")
            .description("Remove a subreddit from this channel's list")
            .add_option(subreddit_option()),
        CreateCommand::new("list").description("List the subreddits on this channel's list"),
        CreateCommand::new("sub")
            .description("Random post from a specific subreddit")
            .add_option(subreddit_option()),
    ]
}

fn subreddit_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "subreddit", "Enter subreddit name")
        .required(true)
}

pub async fn register_commands(http: &Arc<Http>, scope: CommandScope) -> AppResult<()> {
    match scope {
        CommandScope::Global => {
            ApplicationCommand::set_global_commands(http, command_definitions()).await?;
        }
        CommandScope::Guild(guild_id) => {
            guild_id.set_commands(http, command_definitions()).await?;
        }
    }
    Ok(())
}

/// Removes every command registered by `register_commands`.
pub async fn clear_commands(http: &Arc<Http>, scope: CommandScope) -> AppResult<()> {
    match scope {
        CommandScope::Global => {
            ApplicationCommand::set_global_commands(http, Vec::new()).await?;
        }
        CommandScope::Guild(guild_id) => {
            guild_id.set_commands(http, Vec::new()).await?;
        }
    }
    Ok(())
}

pub struct DiscordHandler {
    controller: Arc<InteractionController>,
    scope: CommandScope,
}

impl DiscordHandler {
    pub fn new(controller: Arc<InteractionController>, scope: CommandScope) -> Self {
        Self { controller, scope }
    }
}

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, "bot connected");

        match register_commands(&ctx.http, self.scope).await {
            Ok(()) => tracing::info!(scope = ?self.scope, "slash commands registered"),
            Err(e) => tracing::error!(error = %e, "failed to register slash commands"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(interaction) = interaction else {
            return;
        };

        let channel_id = interaction.channel_id.to_string();
        let argument = interaction
            .data
            .options
            .first()
            .and_then(|option| option.value.as_str());

        let Some(command) = Command::parse(&interaction.data.name, argument) else {
            tracing::debug!(command = %interaction.data.name, "ignoring unknown command");
            return;
        };

        let reply = self.controller.handle(&channel_id, command).await;

        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new().content(reply),
        );
        if let Err(e) = interaction.create_response(&ctx.http, response).await {
            tracing::error!(error = %e, "failed to send interaction response");
        }
    }
}

/// Connects to the Discord gateway and blocks until shutdown. On ctrl-c the
/// registered commands are removed before the shards stop, mirroring the
/// registration done in `ready`.
pub async fn start_discord_client(
    config: Arc<Config>,
    controller: Arc<InteractionController>,
) -> AppResult<()> {
    let scope = CommandScope::from_config(&config);
    let handler = DiscordHandler::new(controller, scope);

    let mut client = Client::builder(&config.discord_token, GatewayIntents::empty())
        .event_handler(handler)
        .await?;

    let http = client.http.clone();
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for shutdown signal");
            return;
        }
        tracing::info!("shutting down; removing registered slash commands");
        if let Err(e) = clear_commands(&http, scope).await {
            tracing::warn!(error = %e, "failed to remove slash commands");
        }
        shard_manager.shutdown_all().await;
    });

    client.start().await?;
    Ok(())
}
