// In memory activity directory.
//
// Purpose
// - Hold every activity for the lifetime of the process.
//
// Responsibilities
// - Serve the read side (ActivityQueries) and the write side (ActivityDirectory).
// - Run lookup, roster check and mutation under one write guard.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::modules::activities::adapters::outbound::activity_directory::{
    ActivityDirectory, DirectoryError,
};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::changes::ActivityChange;
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::core::seed::seed_activities;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;

#[derive(Default)]
pub struct InMemoryActivityDirectory {
    activities: RwLock<BTreeMap<String, Activity>>,
    is_offline: bool,
}

impl InMemoryActivityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::from_activities(seed_activities())
    }

    pub fn from_activities(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl ActivityDirectory for InMemoryActivityDirectory {
    async fn apply(
        &self,
        activity_name: &str,
        change: ActivityChange,
    ) -> Result<Activity, DirectoryError> {
        if self.is_offline {
            return Err(DirectoryError::Backend("Activity directory offline".into()));
        }

        let mut guard = self.activities.write().await;
        let activity = guard
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;
        activity.apply(&change)?;
        Ok(activity.clone())
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityDirectory {
    async fn list_activities(&self) -> anyhow::Result<BTreeMap<String, Activity>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity directory offline"));
        }

        Ok(self.activities.read().await.clone())
    }

    async fn find_activity(&self, name: &str) -> anyhow::Result<Option<Activity>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity directory offline"));
        }

        Ok(self.activities.read().await.get(name).cloned())
    }
}
