mod analytics_tests;
mod errors_tests;
mod regions_tests;
