use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::unregister_participant::command::UnregisterParticipant;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UnregisterMutation;

#[Object]
impl UnregisterMutation {
    async fn unregister(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        state
            .unregister_handler
            .handle(UnregisterParticipant::new(activity_name, email))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}

#[cfg(test)]
mod unregister_participant_graphql_inbound_tests {
    use crate::shell::graphql::build_schema;
    use crate::tests::fixtures::activities::make_test_state;

    #[tokio::test]
    async fn it_should_return_the_confirmation() {
        let schema = build_schema(make_test_state());
        let response = schema
            .execute(
                r#"mutation { unregister(activityName: "Chess Club", email: "michael@mergington.edu") }"#,
            )
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(
            data["unregister"],
            "Unregistered michael@mergington.edu from Chess Club"
        );
    }

    #[tokio::test]
    async fn it_should_surface_an_unknown_participant_as_an_error() {
        let schema = build_schema(make_test_state());
        let response = schema
            .execute(
                r#"mutation { unregister(activityName: "Chess Club", email: "ghost@mergington.edu") }"#,
            )
            .await;

        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.to_lowercase().contains("not found"));
    }
}
