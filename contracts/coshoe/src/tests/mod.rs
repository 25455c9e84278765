
// --- Unit Tests ---
pub mod unit {
    pub mod errors_test;
    pub mod metadata_test;
    pub mod purchase_test;
    pub mod transfer_test;
    pub mod views_test;
}
