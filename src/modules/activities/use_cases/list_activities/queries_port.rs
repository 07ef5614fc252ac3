use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::modules::activities::core::activity::Activity;

#[async_trait]
pub trait ActivityQueries {
    async fn list_activities(&self) -> anyhow::Result<BTreeMap<String, Activity>>;

    async fn find_activity(&self, name: &str) -> anyhow::Result<Option<Activity>>;
}
