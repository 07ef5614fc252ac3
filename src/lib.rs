pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod changes;
            pub mod errors;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod list_activities {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod sign_up_participant {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod unregister_participant {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_responses;
            }
            pub mod outbound {
                pub mod activity_directory;
                pub mod activity_directory_in_memory;
            }
        }
    }
}

pub mod shell;
