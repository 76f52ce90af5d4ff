pub mod shared {
    pub mod http;
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod codec;
            pub mod event;
        }
        pub mod use_cases {
            pub mod home {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_store;
                pub mod event_store_in_memory;
            }
        }
    }
}

pub mod shell;
