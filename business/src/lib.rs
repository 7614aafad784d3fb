pub mod application {
    pub mod conversation {
        pub mod ask;
        pub mod open_chat;
        pub mod send_message;
    }
}

pub mod domain {
    pub mod credential;
    pub mod errors;
    pub mod logger;
    pub mod conversation {
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod ask;
            pub mod open_chat;
            pub mod send_message;
        }
    }
}
