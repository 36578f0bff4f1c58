pub mod completion {
    pub mod repository;
}
