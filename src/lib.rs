pub mod models {
    pub mod event;
    pub mod quiz;
}

pub mod utils {
    pub mod basic_auth;
    pub mod config;
    pub mod http;
    pub mod quiz_store;
}

pub mod handlers {
    #[path = "insert-quiz-handler.rs"]
    pub mod insert_quiz;
}
