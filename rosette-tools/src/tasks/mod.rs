// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment tasks.
//!
//! Each task carries one or more [`Tag`]s. Running with a set of tags runs every task carrying
//! any of them, in declaration order; running with no tags runs every task.

use crate::{
    core::{accounts::AccountError, deployment::DeploymentError},
    runtime::Runtime,
};

mod rosette_stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Tag {
    #[value(name = "RosetteStone")]
    RosetteStone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Deploys the `RosetteStone` contract from the `deployer` account.
    RosetteStone,
}

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("{0}")]
    Account(#[from] AccountError),
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
}

impl Task {
    pub const ALL: &'static [Task] = &[Task::RosetteStone];

    /// Contract the task deploys.
    pub fn name(&self) -> &'static str {
        match self {
            Task::RosetteStone => rosette_stone::CONTRACT,
        }
    }

    /// Named account the deployment is sent from.
    pub fn role(&self) -> &'static str {
        match self {
            Task::RosetteStone => rosette_stone::ROLE,
        }
    }

    /// Whether the task reports its outcome at info level.
    pub fn log(&self) -> bool {
        match self {
            Task::RosetteStone => rosette_stone::LOG,
        }
    }

    pub fn tags(&self) -> &'static [Tag] {
        match self {
            Task::RosetteStone => &[Tag::RosetteStone],
        }
    }

    pub async fn run(&self, runtime: &mut Runtime) -> Result<(), TaskError> {
        match self {
            Task::RosetteStone => rosette_stone::run(runtime).await,
        }
    }
}

/// Tasks selected by `tags`, or all tasks when `tags` is empty.
pub fn select(tags: &[Tag]) -> Vec<Task> {
    Task::ALL
        .iter()
        .copied()
        .filter(|task| tags.is_empty() || task.tags().iter().any(|tag| tags.contains(tag)))
        .collect()
}

/// Runs the tasks selected by `tags`, stopping at the first failure.
pub async fn run(runtime: &mut Runtime, tags: &[Tag]) -> Result<(), TaskError> {
    let tasks = select(tags);
    if tasks.is_empty() {
        warn!(@yellow, "no deployment task matches tags {:?}", tags);
    }
    for task in tasks {
        debug!(@grey, "running task {}", task.name().mint());
        task.run(runtime).await?;
    }
    Ok(())
}
