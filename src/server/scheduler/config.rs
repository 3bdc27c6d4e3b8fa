pub mod customer {
    /// Cron expression for the customer count report
    /// Runs every hour at the top of the hour
    pub const COUNT_CRON_EXPRESSION: &str = "0 0 * * * *";
}
