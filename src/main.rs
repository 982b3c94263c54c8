// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Directory terminal client
//!
//! Loads the activity list from the activities API, prints it, and reads
//! signup/unregister commands from stdin.

use activity_directory::{
    client::{
        command::{Command, CommandError, HELP},
        events::{Dispatcher, UiEvent},
        DirectoryClient,
    },
    config::Config,
    logging,
    services::HttpActivityApi,
};
use anyhow::Context;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(api = %config.api_base_url, "Starting activity directory client");

    let api = Arc::new(HttpActivityApi::new(config.api_base_url.clone()));
    let client = DirectoryClient::new(api, config.message_timeout);
    let dispatcher = Dispatcher::new(client);

    run_events(&dispatcher, vec![UiEvent::PageLoaded]).await?;
    println!("{}", dispatcher.client().snapshot().await.to_text());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Show => println!("{}", dispatcher.client().snapshot().await.to_text()),
            Command::Html => match dispatcher.client().snapshot().await.to_html() {
                Ok(html) => println!("{}", html),
                Err(e) => tracing::error!(error = %e, "Failed to render page"),
            },
            Command::List => {
                run_events(&dispatcher, vec![UiEvent::PageLoaded]).await?;
                println!("{}", dispatcher.client().snapshot().await.to_text());
            }
            Command::Signup { email, activity } => {
                let events = vec![
                    UiEvent::FormInput {
                        email,
                        activity: Some(activity),
                    },
                    UiEvent::SignupSubmitted,
                ];
                if let Err(e) = run_events(&dispatcher, events).await {
                    println!("{}", e);
                    continue;
                }
                println!("{}", dispatcher.client().snapshot().await.to_text());
            }
            Command::Unregister { email, activity } => {
                // Only rows actually on the page carry an unregister control.
                let has_row = dispatcher
                    .client()
                    .snapshot()
                    .await
                    .card(&activity)
                    .is_some_and(|card| card.rows().iter().any(|row| row.email == email));
                if !has_row {
                    println!("No participant row for {} in {}", email, activity);
                    continue;
                }
                run_events(&dispatcher, vec![UiEvent::UnregisterClicked { activity, email }])
                    .await?;
                println!("{}", dispatcher.client().snapshot().await.to_text());
            }
        }
    }

    Ok(())
}

/// Dispatch events in order, waiting for each handler to finish.
async fn run_events(dispatcher: &Dispatcher, events: Vec<UiEvent>) -> anyhow::Result<()> {
    for event in events {
        dispatcher
            .dispatch(event)
            .await
            .context("UI event handler panicked")??;
    }
    Ok(())
}
