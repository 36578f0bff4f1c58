pub mod application {
    pub mod completion {
        pub mod create;
        pub mod get_by_id;
        pub mod list_recent;
        pub mod search;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod completion {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod get_by_id;
            pub mod list_recent;
            pub mod search;
        }
    }
}
